//! [`SettingsSink`] implementation over the browser's fetch API.

use std::future::Future;

use alarmclock_app::ports::SettingsSink;
use alarmclock_domain::submission::{Submission, SubmissionOutcome};
use gloo_net::http::Request;

use crate::config::EndpointPaths;
use crate::error::WebSinkError;

/// Posts submissions to the page's origin.
pub struct FetchSink {
    endpoints: EndpointPaths,
}

impl FetchSink {
    pub fn new(endpoints: EndpointPaths) -> Self {
        Self { endpoints }
    }

    async fn send(&self, submission: &Submission) -> Result<u16, WebSinkError> {
        let mut builder = Request::post(self.endpoints.path_for(submission.endpoint));
        if let Some(content_type) = submission.content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let request = builder
            .body(submission.body.as_str())
            .map_err(WebSinkError::Request)?;
        let response = request.send().await.map_err(WebSinkError::Request)?;

        let status = response.status();
        if SubmissionOutcome::from_status(status).is_success() {
            Ok(status)
        } else {
            Err(WebSinkError::Status(status))
        }
    }
}

impl SettingsSink for FetchSink {
    fn submit(&self, submission: &Submission) -> impl Future<Output = SubmissionOutcome> {
        async move {
            match self.send(submission).await {
                Ok(_) => SubmissionOutcome::Succeeded,
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("saving {} failed: {err}", submission.endpoint).into(),
                    );
                    SubmissionOutcome::Failed
                }
            }
        }
    }
}
