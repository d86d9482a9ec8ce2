//! Element ids and endpoint paths used by the device's settings page.

use std::time::Duration;

use alarmclock_domain::control::{ControlLabels, DEFAULT_REVERT_DELAY_MS};
use alarmclock_domain::submission::Endpoint;

/// Browser adapter configuration. The defaults match the page the device serves.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Id of the save button.
    pub trigger_id: String,
    /// Selector matching the schedule entry groups.
    pub groups_selector: String,
    pub display_auto_id: String,
    pub display_on_id: String,
    pub display_off_id: String,
    pub endpoints: EndpointPaths,
    pub revert_delay_ms: u64,
    pub labels: ControlLabels,
}

/// Same-origin request paths for each [`Endpoint`].
#[derive(Debug, Clone)]
pub struct EndpointPaths {
    pub schedule_entries: String,
    pub display_settings: String,
}

impl EndpointPaths {
    #[must_use]
    pub fn path_for(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::ScheduleEntries => &self.schedule_entries,
            Endpoint::DisplaySettings => &self.display_settings,
        }
    }
}

impl WebConfig {
    #[must_use]
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            trigger_id: "saveButton".to_string(),
            groups_selector: "#alarmForm fieldset".to_string(),
            display_auto_id: "displayAuto".to_string(),
            display_on_id: "displayOn".to_string(),
            display_off_id: "displayOff".to_string(),
            endpoints: EndpointPaths::default(),
            revert_delay_ms: DEFAULT_REVERT_DELAY_MS,
            labels: ControlLabels::default(),
        }
    }
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            schedule_entries: Endpoint::ScheduleEntries.default_path().to_string(),
            display_settings: Endpoint::DisplaySettings.default_path().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_device_page_defaults() {
        let config = WebConfig::default();
        assert_eq!(config.trigger_id, "saveButton");
        assert_eq!(config.groups_selector, "#alarmForm fieldset");
        assert_eq!(config.revert_delay(), Duration::from_millis(2000));
        assert_eq!(
            config.endpoints.path_for(Endpoint::DisplaySettings),
            "/save_display_settings"
        );
    }
}
