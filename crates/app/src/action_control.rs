//! Action control — applies [`ActionControlState`] transitions to a concrete
//! [`TriggerControl`].

use std::cell::Cell;

use alarmclock_domain::control::{ActionControlState, ControlEvent, ControlLabels};
use alarmclock_domain::error::TransitionError;
use alarmclock_domain::id::ControlId;
use alarmclock_domain::submission::SubmissionOutcome;

use crate::ports::TriggerControl;

/// A trigger control together with its current state.
///
/// The state is only ever changed by this type, one transition at a time.
/// On every transition the control is relabelled; its enabled flag is only
/// touched when it actually changes.
pub struct ActionControl<C> {
    id: ControlId,
    control: C,
    labels: ControlLabels,
    state: Cell<ActionControlState>,
}

impl<C: TriggerControl> ActionControl<C> {
    /// Wrap a control that is currently idle. The control itself is not modified.
    pub fn new(id: ControlId, control: C, labels: ControlLabels) -> Self {
        Self {
            id,
            control,
            labels,
            state: Cell::new(ActionControlState::Idle),
        }
    }

    #[must_use]
    pub fn id(&self) -> ControlId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> ActionControlState {
        self.state.get()
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    /// Enter `Busy`: disable the control and show the busy label.
    ///
    /// Returns `false` (and changes nothing) when the control is not idle.
    pub fn begin(&self) -> bool {
        match self.apply(ControlEvent::Triggered) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(control_id = %self.id, error = %err, "ignoring trigger");
                false
            }
        }
    }

    /// Enter `Result`: show the success or error label.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the control is busy.
    pub fn show_result(&self, outcome: SubmissionOutcome) -> Result<(), TransitionError> {
        self.apply(ControlEvent::Settled(outcome)).map(drop)
    }

    /// Return to `Idle`: re-enable the control and restore the idle label.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless the control is showing a result.
    pub fn revert(&self) -> Result<(), TransitionError> {
        self.apply(ControlEvent::RevertElapsed).map(drop)
    }

    fn apply(&self, event: ControlEvent) -> Result<ActionControlState, TransitionError> {
        let previous = self.state.get();
        let next = previous.on(event)?;
        self.state.set(next);

        if previous.is_enabled() != next.is_enabled() {
            self.control.set_enabled(next.is_enabled());
        }
        self.control.set_label(next.label(&self.labels));

        tracing::trace!(control_id = %self.id, ?previous, ?next, "control transition");
        Ok(next)
    }
}
