//! Display settings record — automatic display power schedule.

use std::fmt;

use crate::page::DisplayControls;

pub const KEY_AUTO: &str = "DISPLAY_AUTO";
pub const KEY_ON_TIME: &str = "DISPLAY_ON_TIME";
pub const KEY_OFF_TIME: &str = "DISPLAY_OFF_TIME";

/// Display settings as submitted to the device.
///
/// Rendered as exactly three `KEY=value` lines in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettingsRecord {
    pub auto: bool,
    /// Passed through untouched.
    pub on_time: String,
    /// Passed through untouched.
    pub off_time: String,
}

impl DisplaySettingsRecord {
    /// Build a record when all three controls are present.
    #[must_use]
    pub fn from_controls(controls: &DisplayControls) -> Option<Self> {
        match controls {
            DisplayControls {
                auto: Some(auto),
                on_time: Some(on_time),
                off_time: Some(off_time),
            } => Some(Self {
                auto: *auto,
                on_time: on_time.clone(),
                off_time: off_time.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for DisplaySettingsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{KEY_AUTO}={}\n{KEY_ON_TIME}={}\n{KEY_OFF_TIME}={}",
            self.auto, self.on_time, self.off_time
        )
    }
}
