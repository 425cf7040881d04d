//! Failing responder implementation - always returns an error.

use async_trait::async_trait;
use responder_core::{ImageCaptioner, Prompt, Reply, Responder, ResponderError};

/// Which error a [`FailingResponder`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The upstream is unreachable.
    Network,
    /// The upstream rejected the request.
    Api,
    /// The upstream returned a completion with no text.
    EmptyReply,
}

/// A responder that always fails with the configured error.
///
/// Useful for exercising the upstream-failure paths of callers.
#[derive(Debug, Clone)]
pub struct FailingResponder {
    kind: FailureKind,
}

impl Default for FailingResponder {
    fn default() -> Self {
        Self {
            kind: FailureKind::Network,
        }
    }
}

impl FailingResponder {
    /// Create a responder that fails with a network error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a responder that fails with the given kind of error.
    pub fn with_kind(kind: FailureKind) -> Self {
        Self { kind }
    }

    fn error(&self) -> ResponderError {
        match self.kind {
            FailureKind::Network => {
                ResponderError::Network("simulated connection failure".to_string())
            }
            FailureKind::Api => ResponderError::Api {
                status: 500,
                message: "simulated provider error".to_string(),
            },
            FailureKind::EmptyReply => ResponderError::EmptyReply,
        }
    }
}

#[async_trait]
impl Responder for FailingResponder {
    async fn respond(&self, _prompt: Prompt) -> Result<Reply, ResponderError> {
        Err(self.error())
    }

    fn name(&self) -> &str {
        "FailingResponder"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

#[async_trait]
impl ImageCaptioner for FailingResponder {
    async fn caption(&self, _image_base64: &str) -> Result<String, ResponderError> {
        Err(self.error())
    }
}
