//! Binding registry — makes binding the save action idempotent per control.
//!
//! The binding routine may run several times (e.g. on repeated readiness
//! signals). Only the first call for a given control should attach the
//! action; later calls are no-ops.

use std::collections::HashSet;

use alarmclock_domain::id::ControlId;

/// Set of controls the save action has already been attached to.
#[derive(Debug, Default)]
pub struct TriggerBindings {
    bound: HashSet<ControlId>,
}

impl TriggerBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the save action to `id` unless it is already bound.
    ///
    /// `attach` runs only for a control that is not bound yet and reports
    /// whether the handler was installed. The control is recorded as bound
    /// only on success, so a failed attach is retried on the next call.
    /// Returns `true` when this call bound the control.
    pub fn bind(&mut self, id: ControlId, attach: impl FnOnce() -> bool) -> bool {
        if self.bound.contains(&id) {
            tracing::debug!(control_id = %id, "save trigger already bound");
            return false;
        }
        if !attach() {
            tracing::warn!(control_id = %id, "cannot attach save trigger");
            return false;
        }
        self.bound.insert(id);
        tracing::info!(control_id = %id, "save trigger bound");
        true
    }
}
