//! Action control — the state machine behind the save button.
//!
//! ```text
//! Idle --Triggered--> Busy --Settled(outcome)--> Result(outcome) --RevertElapsed--> Idle
//! ```

use serde::Deserialize;

use crate::error::TransitionError;
use crate::submission::SubmissionOutcome;

/// How long the result label stays visible before the control reverts to idle.
pub const DEFAULT_REVERT_DELAY_MS: u64 = 2000;

/// Visible state of the save control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionControlState {
    /// Enabled, showing the idle label. Initial and terminal state.
    #[default]
    Idle,
    /// Disabled while collection and submission run.
    Busy,
    /// Disabled, showing the aggregate outcome until the revert delay elapses.
    Result(SubmissionOutcome),
}

/// Inputs driving [`ActionControlState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The user activated the control.
    Triggered,
    /// All issued submissions resolved.
    Settled(SubmissionOutcome),
    /// The revert delay elapsed after entering `Result`.
    RevertElapsed,
}

impl ActionControlState {
    /// Compute the next state.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when `event` is not accepted in `self`,
    /// e.g. a second trigger while busy.
    pub fn on(self, event: ControlEvent) -> Result<Self, TransitionError> {
        match (self, event) {
            (Self::Idle, ControlEvent::Triggered) => Ok(Self::Busy),
            (Self::Busy, ControlEvent::Settled(outcome)) => Ok(Self::Result(outcome)),
            (Self::Result(_), ControlEvent::RevertElapsed) => Ok(Self::Idle),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    /// Whether the control accepts user input in this state.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The label shown in this state.
    #[must_use]
    pub fn label(self, labels: &ControlLabels) -> &str {
        match self {
            Self::Idle => &labels.idle,
            Self::Busy => &labels.busy,
            Self::Result(SubmissionOutcome::Succeeded) => &labels.success,
            Self::Result(SubmissionOutcome::Failed) => &labels.error,
        }
    }
}

/// Texts shown on the control in each state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControlLabels {
    pub idle: String,
    pub busy: String,
    pub success: String,
    pub error: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self {
            idle: "Speichern".to_string(),
            busy: "Speichern...".to_string(),
            success: "Gespeichert".to_string(),
            error: "Fehler".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_walk_full_cycle() {
        let state = ActionControlState::default();
        let state = state.on(ControlEvent::Triggered).unwrap();
        assert_eq!(state, ActionControlState::Busy);
        let state = state
            .on(ControlEvent::Settled(SubmissionOutcome::Failed))
            .unwrap();
        assert_eq!(state, ActionControlState::Result(SubmissionOutcome::Failed));
        let state = state.on(ControlEvent::RevertElapsed).unwrap();
        assert_eq!(state, ActionControlState::Idle);
    }

    #[test]
    fn should_reject_trigger_while_busy() {
        let err = ActionControlState::Busy
            .on(ControlEvent::Triggered)
            .unwrap_err();
        assert_eq!(err.from, ActionControlState::Busy);
        assert_eq!(err.event, ControlEvent::Triggered);
    }

    #[test]
    fn should_reject_trigger_while_showing_result() {
        let state = ActionControlState::Result(SubmissionOutcome::Succeeded);
        assert!(state.on(ControlEvent::Triggered).is_err());
    }

    #[test]
    fn should_reject_settle_and_revert_from_idle() {
        assert!(
            ActionControlState::Idle
                .on(ControlEvent::Settled(SubmissionOutcome::Succeeded))
                .is_err()
        );
        assert!(ActionControlState::Idle.on(ControlEvent::RevertElapsed).is_err());
    }

    #[test]
    fn should_pick_label_per_state() {
        let labels = ControlLabels::default();
        assert_eq!(ActionControlState::Idle.label(&labels), "Speichern");
        assert_eq!(ActionControlState::Busy.label(&labels), "Speichern...");
        assert_eq!(
            ActionControlState::Result(SubmissionOutcome::Succeeded).label(&labels),
            "Gespeichert"
        );
        assert_eq!(
            ActionControlState::Result(SubmissionOutcome::Failed).label(&labels),
            "Fehler"
        );
    }

    #[test]
    fn should_only_be_enabled_when_idle() {
        assert!(ActionControlState::Idle.is_enabled());
        assert!(!ActionControlState::Busy.is_enabled());
        assert!(!ActionControlState::Result(SubmissionOutcome::Succeeded).is_enabled());
    }
}
