//! Tokio-backed [`Timer`].

use std::future::Future;
use std::time::Duration;

use alarmclock_app::ports::Timer;

/// Sleeps on the tokio time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}
