//! HTTP adapter error types.
//!
//! These never cross the port boundary; [`HttpSink`](crate::HttpSink) logs
//! them and reports a failed submission instead.

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpSinkError {
    /// The underlying client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("HTTP transport error")]
    Transport(#[source] reqwest::Error),

    /// The device answered with a non-2xx status.
    #[error("device responded with HTTP {0}")]
    Status(u16),
}
