//! Typed identifier newtype backed by a UUID.

use std::fmt;
use std::str::FromStr;

/// Identity of one trigger control instance.
///
/// The binding registry is keyed by this id so a control is bound at most
/// once, however many times the binding routine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(uuid::Uuid);

impl Default for ControlId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl ControlId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ControlId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}
