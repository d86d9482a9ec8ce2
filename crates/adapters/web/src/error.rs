//! Browser adapter error types.
//!
//! Logged to the console and collapsed into a failed submission; never shown
//! to the user beyond the generic error label.

/// Errors raised while posting settings from the page.
#[derive(Debug, thiserror::Error)]
pub enum WebSinkError {
    /// The request could not be built or sent.
    #[error("request failed")]
    Request(#[source] gloo_net::Error),

    /// The device answered with a non-2xx status.
    #[error("device responded with HTTP {0}")]
    Status(u16),
}
