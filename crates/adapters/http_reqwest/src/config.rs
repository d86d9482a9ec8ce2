//! HTTP sink configuration.

use alarmclock_domain::submission::Endpoint;
use serde::Deserialize;

/// Where the device lives and which paths accept settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSinkConfig {
    /// Scheme, host and optional port of the device (e.g. `http://192.168.4.1`).
    pub base_url: String,
    pub endpoints: EndpointPaths,
}

/// Request paths for each [`Endpoint`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointPaths {
    pub schedule_entries: String,
    pub display_settings: String,
}

impl HttpSinkConfig {
    /// Absolute URL for `endpoint`.
    #[must_use]
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        let path = match endpoint {
            Endpoint::ScheduleEntries => &self.endpoints.schedule_entries,
            Endpoint::DisplaySettings => &self.endpoints.display_settings,
        };
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for HttpSinkConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1".to_string(),
            endpoints: EndpointPaths::default(),
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
