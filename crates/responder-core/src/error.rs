//! Error types for responder operations.

use thiserror::Error;

/// Errors that can occur while invoking an AI responder.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The responder is misconfigured (missing API key, bad URL, etc.)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The upstream service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The upstream service returned an error status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The upstream service returned a completion with no text.
    #[error("empty reply from responder")]
    EmptyReply,
}
