//! Settings page port — read-side view of the form.

use alarmclock_domain::page::PageSnapshot;

/// Something that can describe the current state of the settings form.
pub trait SettingsPage {
    /// Take a snapshot of the form as it is right now.
    fn snapshot(&self) -> PageSnapshot;
}

impl SettingsPage for PageSnapshot {
    fn snapshot(&self) -> PageSnapshot {
        self.clone()
    }
}

impl<T: SettingsPage> SettingsPage for &T {
    fn snapshot(&self) -> PageSnapshot {
        (**self).snapshot()
    }
}
