//! # alarmclock-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SettingsPage` — read-only snapshot of the settings form
//!   - `SettingsSink` — send one serialized submission to the device
//!   - `TriggerControl` — enable/disable and relabel the save control
//!   - `Timer` — wait for the result label revert delay
//! - Harvest records from a snapshot (`collector`)
//! - Issue submissions concurrently and reconcile them (`coordinator`)
//! - Drive the save control through its states (`action_control`)
//! - Bind each control at most once (`bindings`)
//! - Compose all of the above into the save use-case (`services`)
//!
//! ## Dependency rule
//! Depends on `alarmclock-domain` only (plus `tokio` macros for joining
//! futures). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.
//!
//! Ports carry no `Send` bound: the browser adapter runs on a single-threaded
//! event loop and its futures are `!Send`.

pub mod action_control;
pub mod bindings;
pub mod collector;
pub mod coordinator;
pub mod ports;
pub mod services;
