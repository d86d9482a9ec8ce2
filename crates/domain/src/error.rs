//! Domain error types.
//!
//! Each failure family is its own typed error; none of them reaches the user.

use crate::control::{ActionControlState, ControlEvent};

/// A string could not be interpreted as a domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown weekday short code: {0:?}")]
    UnknownShortCode(String),

    #[error("unknown document ready state: {0:?}")]
    UnknownReadiness(String),
}

/// The action control received an event that is not valid in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("event {event:?} is not valid in state {from:?}")]
pub struct TransitionError {
    pub from: ActionControlState,
    pub event: ControlEvent,
}
