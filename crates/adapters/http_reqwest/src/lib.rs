//! # alarmclock-adapter-http-reqwest
//!
//! Native HTTP implementation of the [`SettingsSink`](alarmclock_app::ports::SettingsSink)
//! port, backed by `reqwest`.
//!
//! Each submission is a single `POST` to `<base_url><endpoint path>`. The
//! exchange succeeds iff the device answers with a 2xx status; every other
//! result (non-2xx, connection refused, broken body, …) is logged and reported
//! as a failed submission. Requests are never retried.

pub mod config;
pub mod error;
pub mod sink;

pub use config::{EndpointPaths, HttpSinkConfig};
pub use error::HttpSinkError;
pub use sink::HttpSink;
