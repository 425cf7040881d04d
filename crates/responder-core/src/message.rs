//! Prompt and reply types for a single responder invocation.

use serde::{Deserialize, Serialize};

/// One outbound completion request.
///
/// A prompt carries the user-facing instruction text plus an optional
/// persona/system instruction the backend should apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Optional system/persona instruction.
    pub system: Option<String>,
    /// The instruction text to complete.
    pub text: String,
}

impl Prompt {
    /// Create a prompt with no system instruction.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            system: None,
            text: text.into(),
        }
    }

    /// Attach a system/persona instruction.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// The raw text completion returned by a responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Completion text, exactly as the backend produced it.
    pub text: String,
}

impl Reply {
    /// Create a reply from completion text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
