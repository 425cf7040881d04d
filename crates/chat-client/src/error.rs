//! Error types for the chat client.

use thiserror::Error;

/// Errors that can occur while talking to the API server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, decode).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}
