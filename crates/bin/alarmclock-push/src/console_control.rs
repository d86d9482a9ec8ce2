//! Headless stand-in for the save button.
//!
//! There is no UI to update, so each state change of the control is reported
//! through `tracing` instead.

use std::cell::RefCell;

use alarmclock_app::ports::TriggerControl;

/// Trigger control that logs its enabled flag and label.
#[derive(Debug, Default)]
pub struct ConsoleControl {
    label: RefCell<String>,
}

impl ConsoleControl {
    /// The label currently shown.
    #[must_use]
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }
}

impl TriggerControl for ConsoleControl {
    fn set_enabled(&self, enabled: bool) {
        tracing::debug!(enabled, "save control");
    }

    fn set_label(&self, label: &str) {
        tracing::info!(label, "save control");
        *self.label.borrow_mut() = label.to_string();
    }
}
