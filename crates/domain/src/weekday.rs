//! Weekday short codes used both as checkbox labels and as serialized day tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::page::trim_form_value;

/// One of the seven two-letter weekday abbreviations shown on the device page.
///
/// Variants are declared in lexicographic order of their codes so the derived
/// [`Ord`] sorts `Di < Do < Fr < Mi < Mo < Sa < So`, which is the order the
/// device expects on the wire. Calendar order is available via
/// [`ShortCode::CALENDAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShortCode {
    Di,
    Do,
    Fr,
    Mi,
    Mo,
    Sa,
    So,
}

impl ShortCode {
    /// All codes in calendar order, Monday first.
    pub const CALENDAR: [Self; 7] = [
        Self::Mo,
        Self::Di,
        Self::Mi,
        Self::Do,
        Self::Fr,
        Self::Sa,
        Self::So,
    ];

    /// The label text and wire token for this day.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mo => "Mo",
            Self::Di => "Di",
            Self::Mi => "Mi",
            Self::Do => "Do",
            Self::Fr => "Fr",
            Self::Sa => "Sa",
            Self::So => "So",
        }
    }

    /// Interpret a checkbox label.
    ///
    /// Surrounding whitespace (and a byte order mark) is ignored, the
    /// remainder must match a code exactly (case-sensitive).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        trim_form_value(label).parse().ok()
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CALENDAR
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseError::UnknownShortCode(s.to_string()))
    }
}
