//! Coordinator — issues the collected submissions and reconciles their outcomes.
//!
//! Up to two requests are issued concurrently on the current task. The
//! schedule entries request is polled (and therefore initiated) first, but
//! either may finish first; the aggregate does not depend on the order.

use std::cell::RefCell;

use alarmclock_domain::submission::{Submission, SubmissionOutcome, SubmissionTally};

use crate::collector::Collected;
use crate::ports::SettingsSink;

/// Submit everything in `collected` and return the aggregate outcome.
///
/// With nothing to submit this returns [`SubmissionOutcome::Succeeded`]
/// without touching the sink or yielding. No request is retried.
pub async fn submit_all<S: SettingsSink>(sink: &S, collected: &Collected) -> SubmissionOutcome {
    let (schedule, display) = collected.submissions();
    let issued = usize::from(schedule.is_some()) + usize::from(display.is_some());
    let tally = RefCell::new(SubmissionTally::new(issued));

    if let Some(outcome) = tally.borrow().settled() {
        tracing::debug!("nothing to submit");
        return outcome;
    }

    tracing::debug!(issued, "submitting settings");
    tokio::join!(
        resolve(sink, schedule.as_ref(), &tally),
        resolve(sink, display.as_ref(), &tally),
    );

    // join! only returns once both branches resolved, so the tally is settled.
    let outcome = tally
        .into_inner()
        .settled()
        .unwrap_or(SubmissionOutcome::Failed);
    tracing::info!(issued, %outcome, "settings submitted");
    outcome
}

async fn resolve<S: SettingsSink>(
    sink: &S,
    submission: Option<&Submission>,
    tally: &RefCell<SubmissionTally>,
) {
    let Some(submission) = submission else {
        return;
    };
    let outcome = sink.submit(submission).await;

    let mut tally = tally.borrow_mut();
    let aggregate = tally.record(outcome);
    tracing::debug!(
        endpoint = %submission.endpoint,
        %outcome,
        outstanding = tally.outstanding(),
        settled = aggregate.is_some(),
        "submission resolved"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    use alarmclock_domain::display::DisplaySettingsRecord;
    use alarmclock_domain::schedule::{Activity, ScheduleEntryRecord};
    use alarmclock_domain::submission::{Endpoint, TEXT_PLAIN};
    use alarmclock_domain::weekday::ShortCode;

    /// Sink answering each endpoint with a scripted outcome after a number
    /// of scheduler yields, recording the order requests start and finish.
    #[derive(Default)]
    struct ScriptedSink {
        script: HashMap<Endpoint, (SubmissionOutcome, usize)>,
        started: RefCell<Vec<Endpoint>>,
        finished: RefCell<Vec<Endpoint>>,
        received: RefCell<Vec<Submission>>,
    }

    impl ScriptedSink {
        fn with(mut self, endpoint: Endpoint, outcome: SubmissionOutcome, yields: usize) -> Self {
            self.script.insert(endpoint, (outcome, yields));
            self
        }
    }

    impl SettingsSink for ScriptedSink {
        fn submit(&self, submission: &Submission) -> impl Future<Output = SubmissionOutcome> {
            let submission = submission.clone();
            async move {
                self.started.borrow_mut().push(submission.endpoint);
                let (outcome, yields) = self
                    .script
                    .get(&submission.endpoint)
                    .copied()
                    .unwrap_or((SubmissionOutcome::Succeeded, 0));
                for _ in 0..yields {
                    tokio::task::yield_now().await;
                }
                self.finished.borrow_mut().push(submission.endpoint);
                self.received.borrow_mut().push(submission);
                outcome
            }
        }
    }

    fn both() -> Collected {
        Collected {
            entries: vec![ScheduleEntryRecord {
                time: "07:30".to_string(),
                text: "Wake up".to_string(),
                days: vec![
                    ShortCode::Di,
                    ShortCode::Do,
                    ShortCode::Fr,
                    ShortCode::Mi,
                    ShortCode::Mo,
                ],
                active: Activity::Aktiv,
            }],
            display: Some(DisplaySettingsRecord {
                auto: false,
                on_time: "06:00".to_string(),
                off_time: "22:00".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn should_succeed_without_requests_when_nothing_collected() {
        let sink = ScriptedSink::default();
        let outcome = submit_all(&sink, &Collected::default()).await;

        assert_eq!(outcome, SubmissionOutcome::Succeeded);
        assert!(sink.started.borrow().is_empty());
    }

    /// Sink whose requests never complete.
    struct StalledSink;

    impl SettingsSink for StalledSink {
        fn submit(&self, _submission: &Submission) -> impl Future<Output = SubmissionOutcome> {
            std::future::pending()
        }
    }

    #[test]
    fn should_settle_on_first_poll_when_nothing_collected() {
        let collected = Collected::default();
        let mut submission = std::pin::pin!(submit_all(&StalledSink, &collected));
        let mut cx = Context::from_waker(Waker::noop());

        assert_eq!(
            submission.as_mut().poll(&mut cx),
            Poll::Ready(SubmissionOutcome::Succeeded)
        );
    }

    #[test]
    fn should_stay_pending_while_a_request_is_outstanding() {
        let collected = both();
        let mut submission = std::pin::pin!(submit_all(&StalledSink, &collected));
        let mut cx = Context::from_waker(Waker::noop());

        assert_eq!(submission.as_mut().poll(&mut cx), Poll::Pending);
    }

    #[tokio::test]
    async fn should_send_both_bodies_to_their_endpoints() {
        let sink = ScriptedSink::default();
        let outcome = submit_all(&sink, &both()).await;

        assert_eq!(outcome, SubmissionOutcome::Succeeded);
        let received = sink.received.borrow();
        assert_eq!(received.len(), 2);

        let schedule = received
            .iter()
            .find(|s| s.endpoint == Endpoint::ScheduleEntries)
            .unwrap();
        assert_eq!(schedule.body, "07:30,Wake up,Di,Do,Fr,Mi,Mo,Aktiv");
        assert_eq!(schedule.content_type, Some(TEXT_PLAIN));

        let display = received
            .iter()
            .find(|s| s.endpoint == Endpoint::DisplaySettings)
            .unwrap();
        assert_eq!(
            display.body,
            "DISPLAY_AUTO=false\nDISPLAY_ON_TIME=06:00\nDISPLAY_OFF_TIME=22:00"
        );
        assert_eq!(display.content_type, None);
    }

    #[tokio::test]
    async fn should_initiate_schedule_request_first_and_run_both_concurrently() {
        let sink = ScriptedSink::default()
            .with(Endpoint::ScheduleEntries, SubmissionOutcome::Succeeded, 3)
            .with(Endpoint::DisplaySettings, SubmissionOutcome::Succeeded, 0);

        submit_all(&sink, &both()).await;

        assert_eq!(
            *sink.started.borrow(),
            [Endpoint::ScheduleEntries, Endpoint::DisplaySettings]
        );
        // The display request did not wait for the slower schedule request.
        assert_eq!(
            *sink.finished.borrow(),
            [Endpoint::DisplaySettings, Endpoint::ScheduleEntries]
        );
    }

    #[tokio::test]
    async fn should_fail_when_either_request_fails_regardless_of_order() {
        for (failing, slow) in [
            (Endpoint::ScheduleEntries, Endpoint::ScheduleEntries),
            (Endpoint::ScheduleEntries, Endpoint::DisplaySettings),
            (Endpoint::DisplaySettings, Endpoint::ScheduleEntries),
            (Endpoint::DisplaySettings, Endpoint::DisplaySettings),
        ] {
            let mut sink = ScriptedSink::default();
            for endpoint in [Endpoint::ScheduleEntries, Endpoint::DisplaySettings] {
                let outcome = SubmissionOutcome::from(endpoint != failing);
                let yields = if endpoint == slow { 2 } else { 0 };
                sink = sink.with(endpoint, outcome, yields);
            }

            assert_eq!(
                submit_all(&sink, &both()).await,
                SubmissionOutcome::Failed,
                "failing={failing} slow={slow}"
            );
        }
    }

    #[tokio::test]
    async fn should_report_single_request_outcome() {
        let only_display = Collected {
            entries: vec![],
            ..both()
        };
        let sink =
            ScriptedSink::default().with(Endpoint::DisplaySettings, SubmissionOutcome::Failed, 1);

        assert_eq!(
            submit_all(&sink, &only_display).await,
            SubmissionOutcome::Failed
        );
        assert_eq!(*sink.started.borrow(), [Endpoint::DisplaySettings]);
    }
}
