//! Echo responder implementation - echoes prompts back.

use async_trait::async_trait;
use responder_core::{Prompt, Reply, Responder, ResponderError};

/// A simple responder that echoes the prompt text back.
///
/// Useful for testing the request flow without any AI processing.
#[derive(Debug, Clone, Default)]
pub struct EchoResponder {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoResponder {
    /// Create a new EchoResponder with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoResponder with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_responder::EchoResponder;
    ///
    /// let responder = EchoResponder::with_prefix("Echo: ");
    /// // Will respond with "Echo: <original prompt>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Responder for EchoResponder {
    async fn respond(&self, prompt: Prompt) -> Result<Reply, ResponderError> {
        let text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, prompt.text),
            None => prompt.text,
        };

        Ok(Reply::new(text))
    }

    fn name(&self) -> &str {
        "EchoResponder"
    }
}
