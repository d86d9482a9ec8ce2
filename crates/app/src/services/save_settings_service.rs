//! Save settings service — the use-case behind the save button.
//!
//! One invocation walks the control through idle → busy → result → idle:
//! it disables the control, harvests the page, submits, shows the aggregate
//! outcome and, after the revert delay, restores the idle state.

use std::time::Duration;

use alarmclock_domain::control::DEFAULT_REVERT_DELAY_MS;
use alarmclock_domain::submission::SubmissionOutcome;

use crate::action_control::ActionControl;
use crate::collector::{SaveScope, collect};
use crate::coordinator::submit_all;
use crate::ports::{SettingsPage, SettingsSink, Timer, TriggerControl};

/// Application service for saving the settings page.
pub struct SaveSettingsService<S, T> {
    sink: S,
    timer: T,
    revert_delay: Duration,
    scope: SaveScope,
}

impl<S: SettingsSink, T: Timer> SaveSettingsService<S, T> {
    /// Create a service saving everything, with the default revert delay.
    pub fn new(sink: S, timer: T) -> Self {
        Self {
            sink,
            timer,
            revert_delay: Duration::from_millis(DEFAULT_REVERT_DELAY_MS),
            scope: SaveScope::All,
        }
    }

    /// How long the result label stays visible.
    #[must_use]
    pub fn with_revert_delay(mut self, revert_delay: Duration) -> Self {
        self.revert_delay = revert_delay;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: SaveScope) -> Self {
        self.scope = scope;
        self
    }

    /// Run the save action.
    ///
    /// Returns `None` without doing anything when `control` is absent or not
    /// idle. Otherwise returns the aggregate outcome once the control has
    /// been reverted to idle. Failures are absorbed into the outcome.
    pub async fn trigger<C, P>(
        &self,
        control: Option<&ActionControl<C>>,
        page: &P,
    ) -> Option<SubmissionOutcome>
    where
        C: TriggerControl,
        P: SettingsPage,
    {
        let Some(control) = control else {
            tracing::debug!("save triggered without a control");
            return None;
        };
        if !control.begin() {
            return None;
        }

        let collected = collect(&page.snapshot(), self.scope);
        let outcome = submit_all(&self.sink, &collected).await;

        if let Err(err) = control.show_result(outcome) {
            tracing::warn!(control_id = %control.id(), error = %err, "cannot show save result");
            return Some(outcome);
        }

        self.timer.sleep(self.revert_delay).await;
        if let Err(err) = control.revert() {
            tracing::warn!(control_id = %control.id(), error = %err, "cannot revert save control");
        }
        Some(outcome)
    }
}
