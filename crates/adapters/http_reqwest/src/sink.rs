//! [`SettingsSink`] implementation over `reqwest`.

use std::future::Future;

use alarmclock_app::ports::SettingsSink;
use alarmclock_domain::submission::{Submission, SubmissionOutcome};
use reqwest::header::CONTENT_TYPE;

use crate::config::HttpSinkConfig;
use crate::error::HttpSinkError;

/// Posts submissions to the device over HTTP.
#[derive(Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    config: HttpSinkConfig,
}

impl HttpSink {
    /// Build a sink for the configured device.
    ///
    /// No request timeout is set: a submission lives until the device answers
    /// or the connection fails.
    ///
    /// # Errors
    ///
    /// Returns [`HttpSinkError::Client`] if the TLS backend cannot be initialised.
    pub fn new(config: HttpSinkConfig) -> Result<Self, HttpSinkError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(HttpSinkError::Client)?;
        Ok(Self { client, config })
    }

    async fn send(&self, submission: &Submission) -> Result<u16, HttpSinkError> {
        let url = self.config.url_for(submission.endpoint);
        let mut request = self.client.post(&url).body(submission.body.clone());
        if let Some(content_type) = submission.content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        tracing::debug!(endpoint = %submission.endpoint, %url, bytes = submission.body.len(), "posting settings");
        let response = request.send().await.map_err(HttpSinkError::Transport)?;

        let status = response.status().as_u16();
        if SubmissionOutcome::from_status(status).is_success() {
            Ok(status)
        } else {
            Err(HttpSinkError::Status(status))
        }
    }
}

impl SettingsSink for HttpSink {
    fn submit(&self, submission: &Submission) -> impl Future<Output = SubmissionOutcome> {
        async move {
            match self.send(submission).await {
                Ok(status) => {
                    tracing::debug!(endpoint = %submission.endpoint, status, "device accepted settings");
                    SubmissionOutcome::Succeeded
                }
                Err(err) => {
                    tracing::warn!(endpoint = %submission.endpoint, error = %err, "submission failed");
                    SubmissionOutcome::Failed
                }
            }
        }
    }
}
