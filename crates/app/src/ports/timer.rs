//! Timer port — delays without binding the core to a runtime.

use std::future::Future;
use std::time::Duration;

/// Suspends the current task for a while.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
