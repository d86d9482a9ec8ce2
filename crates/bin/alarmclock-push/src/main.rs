//! # alarmclock-push — headless settings push
//!
//! Composition root that wires the HTTP adapter into the save use-case and
//! runs it once against a page snapshot.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars) and the snapshot path argument
//! - Initialise logging
//! - Load the [`PageSnapshot`] from a TOML file
//! - Construct the HTTP sink and the save service
//! - Run the save action on a console-backed control and map the aggregate
//!   outcome to the process exit code
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod console_control;
mod timer;

use std::process::ExitCode;

use alarmclock_adapter_http_reqwest::HttpSink;
use alarmclock_app::action_control::ActionControl;
use alarmclock_app::services::save_settings_service::SaveSettingsService;
use alarmclock_domain::id::ControlId;
use alarmclock_domain::page::PageSnapshot;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::console_control::ConsoleControl;
use crate::timer::TokioTimer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::load().context("loading alarmclock.toml")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let snapshot_path = std::env::args()
        .nth(1)
        .context("usage: alarmclock-push <snapshot.toml>")?;
    let snapshot = load_snapshot(&snapshot_path)?;

    let sink = HttpSink::new(config.device.clone()).context("building HTTP client")?;
    let service = SaveSettingsService::new(sink, TokioTimer)
        .with_revert_delay(config.action.revert_delay())
        .with_scope(config.action.scope);

    let control = ActionControl::new(
        ControlId::new(),
        ConsoleControl::default(),
        config.action.labels.clone(),
    );

    tracing::info!(device = %config.device.base_url, snapshot = %snapshot_path, "pushing settings");
    let outcome = service
        .trigger(Some(&control), &snapshot)
        .await
        .context("save control was not idle")?;
    tracing::debug!(%outcome, label = %control.control().label(), "save finished");

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_snapshot(path: &str) -> anyhow::Result<PageSnapshot> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading snapshot {path}"))?;
    toml::from_str(&content).with_context(|| format!("parsing snapshot {path}"))
}
