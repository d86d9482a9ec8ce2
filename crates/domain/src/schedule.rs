//! Schedule entry records — one alarm rule as the device stores it.
//!
//! Wire format is one line per record: `time,text,days,active`, where `days`
//! is itself comma-joined (e.g. `07:30,Aufstehen,Di,Mo,Aktiv`).

use std::collections::BTreeSet;
use std::fmt;

use crate::page::{ScheduleEntryGroup, trim_form_value};
use crate::weekday::ShortCode;

/// Text sent when the user left the label empty.
pub const PLACEHOLDER_TEXT: &str = "Kein Text";

/// Whether the alarm fires on any day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Aktiv,
    Inaktiv,
}

impl Activity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aktiv => "Aktiv",
            Self::Inaktiv => "Inaktiv",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A harvested alarm rule, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntryRecord {
    /// Trimmed time value; not validated.
    pub time: String,
    /// Trimmed label, never empty.
    pub text: String,
    /// Selected days, deduplicated and sorted by code.
    pub days: Vec<ShortCode>,
    pub active: Activity,
}

impl ScheduleEntryRecord {
    /// Derive a record from a form group.
    ///
    /// Returns `None` when the group lacks its time or text input, or when
    /// both values are blank after trimming.
    #[must_use]
    pub fn from_group(group: &ScheduleEntryGroup) -> Option<Self> {
        let time = trim_form_value(group.time.as_deref()?);
        let text = trim_form_value(group.text.as_deref()?);
        if time.is_empty() && text.is_empty() {
            return None;
        }

        let days: BTreeSet<ShortCode> = group
            .toggles
            .iter()
            .filter(|toggle| toggle.checked)
            .filter_map(|toggle| ShortCode::from_label(&toggle.label))
            .collect();

        let active = if days.is_empty() {
            Activity::Inaktiv
        } else {
            Activity::Aktiv
        };

        Some(Self {
            time: time.to_string(),
            text: if text.is_empty() {
                PLACEHOLDER_TEXT.to_string()
            } else {
                text.to_string()
            },
            days: days.into_iter().collect(),
            active,
        })
    }

    /// The `days` field as it appears on the wire (possibly empty).
    #[must_use]
    pub fn days_field(&self) -> String {
        self.days
            .iter()
            .map(|day| day.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for ScheduleEntryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.time,
            self.text,
            self.days_field(),
            self.active
        )
    }
}

/// Render records as the newline-joined request body.
#[must_use]
pub fn render_schedule_body(records: &[ScheduleEntryRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
