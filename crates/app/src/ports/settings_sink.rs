//! Settings sink port — delivers one submission to the device.

use std::future::Future;

use alarmclock_domain::submission::{Submission, SubmissionOutcome};

/// Sends serialized settings to the device backend.
///
/// Implementations never fail: a transport error and a non-2xx status both
/// resolve to [`SubmissionOutcome::Failed`]. Adapters may log the underlying
/// cause, but it is not surfaced to the caller.
pub trait SettingsSink {
    /// POST `submission.body` to the endpoint, declaring `content_type` when set.
    fn submit(&self, submission: &Submission) -> impl Future<Output = SubmissionOutcome>;
}
