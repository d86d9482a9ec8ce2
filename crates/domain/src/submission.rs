//! Submissions — serialized payloads addressed to a device endpoint, and the
//! outcome bookkeeping used to reconcile them into a single status.

use std::fmt;

use crate::display::DisplaySettingsRecord;
use crate::schedule::{ScheduleEntryRecord, render_schedule_body};

/// Content type declared for the schedule entries body.
pub const TEXT_PLAIN: &str = "text/plain";

/// The device endpoints accepting settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// "save schedule entries"
    ScheduleEntries,
    /// "save display settings"
    DisplaySettings,
}

impl Endpoint {
    /// Path served by the stock device firmware.
    #[must_use]
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::ScheduleEntries => "/save_alarms",
            Self::DisplaySettings => "/save_display_settings",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ScheduleEntries => "schedule_entries",
            Self::DisplaySettings => "display_settings",
        })
    }
}

/// One request to send: a body and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub endpoint: Endpoint,
    pub body: String,
    /// `None` means no explicit content type is declared.
    pub content_type: Option<&'static str>,
}

impl Submission {
    /// Build the schedule entries submission; `None` when there is nothing to send.
    #[must_use]
    pub fn schedule_entries(records: &[ScheduleEntryRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        Some(Self {
            endpoint: Endpoint::ScheduleEntries,
            body: render_schedule_body(records),
            content_type: Some(TEXT_PLAIN),
        })
    }

    #[must_use]
    pub fn display_settings(record: &DisplaySettingsRecord) -> Self {
        Self {
            endpoint: Endpoint::DisplaySettings,
            body: record.to_string(),
            content_type: None,
        }
    }
}

/// Result of one submission, or the aggregate of several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed,
}

impl SubmissionOutcome {
    /// Classify an HTTP status: success iff it lies in `[200, 300)`.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }

    /// Logical AND of two outcomes.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        if self.is_success() && other.is_success() {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl From<bool> for SubmissionOutcome {
    fn from(success: bool) -> Self {
        if success { Self::Succeeded } else { Self::Failed }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        })
    }
}

/// Outstanding-request counter for one save invocation.
///
/// Starts at the number of issued requests and is decremented on each
/// resolution. The aggregate becomes available exactly when the counter
/// reaches zero; with zero issued requests it is available immediately and
/// vacuously successful.
#[derive(Debug, Clone)]
pub struct SubmissionTally {
    outstanding: usize,
    aggregate: SubmissionOutcome,
}

impl SubmissionTally {
    #[must_use]
    pub fn new(issued: usize) -> Self {
        Self {
            outstanding: issued,
            aggregate: SubmissionOutcome::Succeeded,
        }
    }

    /// Number of requests that have not resolved yet.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Record one resolution.
    ///
    /// Returns the aggregate on the resolution that brings the counter to
    /// zero, and `None` otherwise. Resolutions beyond the issued count are
    /// ignored so the aggregate is produced exactly once.
    pub fn record(&mut self, outcome: SubmissionOutcome) -> Option<SubmissionOutcome> {
        if self.outstanding == 0 {
            return None;
        }
        self.aggregate = self.aggregate.and(outcome);
        self.outstanding -= 1;
        self.settled()
    }

    /// The aggregate, once every issued request has resolved.
    #[must_use]
    pub fn settled(&self) -> Option<SubmissionOutcome> {
        (self.outstanding == 0).then_some(self.aggregate)
    }
}
