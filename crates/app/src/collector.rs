//! Collector — harvests records from a page snapshot.
//!
//! Missing controls and blank groups reduce the amount of work submitted;
//! they are never errors.

use alarmclock_domain::display::DisplaySettingsRecord;
use alarmclock_domain::page::PageSnapshot;
use alarmclock_domain::schedule::ScheduleEntryRecord;
use alarmclock_domain::submission::Submission;
use serde::Deserialize;

/// Which parts of the form a save covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveScope {
    /// Schedule entries and display settings.
    #[default]
    All,
    /// Display settings only; schedule groups are left untouched.
    DisplayOnly,
}

/// Output of one harvest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    /// Qualifying schedule entries in document order.
    pub entries: Vec<ScheduleEntryRecord>,
    pub display: Option<DisplaySettingsRecord>,
}

impl Collected {
    /// The schedule entries submission followed by the display settings one.
    #[must_use]
    pub fn submissions(&self) -> (Option<Submission>, Option<Submission>) {
        (
            Submission::schedule_entries(&self.entries),
            self.display.as_ref().map(Submission::display_settings),
        )
    }
}

/// Harvest the snapshot into records.
#[must_use]
pub fn collect(snapshot: &PageSnapshot, scope: SaveScope) -> Collected {
    let entries = match scope {
        SaveScope::All => snapshot
            .groups
            .iter()
            .filter_map(ScheduleEntryRecord::from_group)
            .collect(),
        SaveScope::DisplayOnly => Vec::new(),
    };
    let display = DisplaySettingsRecord::from_controls(&snapshot.display);

    let has_display = display.is_some();
    tracing::debug!(
        groups = snapshot.groups.len(),
        entries = entries.len(),
        has_display,
        ?scope,
        "collected settings"
    );

    Collected { entries, display }
}
