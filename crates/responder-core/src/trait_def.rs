//! The Responder trait definition.

use async_trait::async_trait;

use crate::error::ResponderError;
use crate::message::{Prompt, Reply};

/// A trait for turning a prompt into a text completion.
///
/// Implementations can range from canned test doubles to full AI backends.
/// This trait is object-safe and can be used with `Arc<dyn Responder>`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a completion for the given prompt.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The instruction to complete.
    ///
    /// # Returns
    ///
    /// A [`Reply`] containing the completion text, or an error if the
    /// backend could not be reached or refused the request.
    async fn respond(&self, prompt: Prompt) -> Result<Reply, ResponderError>;

    /// Get a human-readable name for this responder implementation.
    fn name(&self) -> &str;

    /// Check if the responder is ready to take requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

/// A trait for describing an uploaded image in plain language.
///
/// Kept separate from [`Responder`] so backends without a vision model can
/// skip it, and so tests can substitute either capability independently.
#[async_trait]
pub trait ImageCaptioner: Send + Sync {
    /// Caption a base64-encoded JPEG image.
    async fn caption(&self, image_base64: &str) -> Result<String, ResponderError>;
}
