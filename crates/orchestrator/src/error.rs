//! Error types for orchestrator operations.

use responder_core::ResponderError;
use thiserror::Error;

/// Errors that can occur while handling a chat message.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The user message was empty after trimming; no upstream call was made.
    #[error("message is empty")]
    EmptyMessage,

    /// The responder call failed.
    #[error("responder error: {0}")]
    Upstream(#[from] ResponderError),

    /// The responder did not answer within the deadline.
    #[error("responder deadline exceeded")]
    DeadlineExceeded,
}
