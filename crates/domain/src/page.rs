//! Page snapshot — the read-only view of the settings form at harvest time.
//!
//! Adapters build a [`PageSnapshot`] from whatever actually holds the form
//! (the live document in the browser, a TOML file in the headless binary) so
//! that record extraction never touches a global document.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseError;

/// Everything the save action reads from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    /// Schedule entry groups in document order.
    pub groups: Vec<ScheduleEntryGroup>,
    /// The three display-setting controls.
    pub display: DisplayControls,
}

/// One repeatable form group describing a single alarm.
///
/// `None` means the input is missing from the group altogether, which is
/// different from an input holding an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduleEntryGroup {
    pub time: Option<String>,
    pub text: Option<String>,
    pub toggles: Vec<DayToggle>,
}

/// A checkbox together with the text of its label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayToggle {
    pub label: String,
    #[serde(default)]
    pub checked: bool,
}

impl DayToggle {
    #[must_use]
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
        }
    }
}

/// Trim a value read from a form input or label.
///
/// Strips Unicode whitespace and the byte order mark, like the browser's
/// `String.prototype.trim`.
#[must_use]
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// The display-settings controls; each one may be absent from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayControls {
    /// Checked state of the automatic on/off toggle.
    pub auto: Option<bool>,
    /// Value of the "display on" time input.
    pub on_time: Option<String>,
    /// Value of the "display off" time input.
    pub off_time: Option<String>,
}

/// Loading state of the hosting document, as reported by `readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentReadiness {
    Loading,
    Interactive,
    Complete,
}

impl DocumentReadiness {
    /// Whether the form elements can be looked up yet.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Interactive | Self::Complete)
    }
}

impl FromStr for DocumentReadiness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loading" => Ok(Self::Loading),
            "interactive" => Ok(Self::Interactive),
            "complete" => Ok(Self::Complete),
            other => Err(ParseError::UnknownReadiness(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentReadiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Loading => "loading",
            Self::Interactive => "interactive",
            Self::Complete => "complete",
        })
    }
}
