//! Canned responder implementation - returns a fixed reply.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use responder_core::{ImageCaptioner, Prompt, Reply, Responder, ResponderError};

/// A well-formed three-section reply, usable wherever a test needs output
/// that parses cleanly.
pub const DEFAULT_REPLY: &str = "Explanation:\n- A canned point.\n- Another canned point.\n\nCode:\n```js\nconsole.log(\"canned\");\n```\n\nResources:\n- [Canned Doc](https://example.com/doc)\n";

/// A responder that returns a fixed reply and records how often it was
/// invoked.
///
/// The invocation counter makes it easy to assert single-call contracts.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    reply: String,
    caption: String,
    calls: Arc<AtomicUsize>,
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self {
            reply: DEFAULT_REPLY.to_string(),
            caption: "A canned caption.".to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl CannedResponder {
    /// Create a responder that returns the default three-section reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a responder that returns the given reply text.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            ..Default::default()
        }
    }

    /// Set the caption returned by the [`ImageCaptioner`] implementation.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// How many times `respond` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, _prompt: Prompt) -> Result<Reply, ResponderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Reply::new(self.reply.clone()))
    }

    fn name(&self) -> &str {
        "CannedResponder"
    }
}

#[async_trait]
impl ImageCaptioner for CannedResponder {
    async fn caption(&self, _image_base64: &str) -> Result<String, ResponderError> {
        Ok(self.caption.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_default_reply() {
        let responder = CannedResponder::new();
        let reply = responder.respond(Prompt::new("anything")).await.unwrap();
        assert!(reply.text.contains("Explanation:"));
        assert!(reply.text.contains("Code:"));
        assert!(reply.text.contains("Resources:"));
    }

    #[tokio::test]
    async fn test_canned_custom_reply() {
        let responder = CannedResponder::with_reply("fixed");
        let reply = responder.respond(Prompt::new("anything")).await.unwrap();
        assert_eq!(reply.text, "fixed");
    }

    #[tokio::test]
    async fn test_call_count() {
        let responder = CannedResponder::new();
        assert_eq!(responder.call_count(), 0);

        responder.respond(Prompt::new("one")).await.unwrap();
        responder.respond(Prompt::new("two")).await.unwrap();
        assert_eq!(responder.call_count(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_counter() {
        let responder = CannedResponder::new();
        let clone = responder.clone();

        clone.respond(Prompt::new("via clone")).await.unwrap();
        assert_eq!(responder.call_count(), 1);
    }

    #[tokio::test]
    async fn test_caption() {
        let responder = CannedResponder::new().with_caption("a chalkboard");
        let caption = responder.caption("AAAA").await.unwrap();
        assert_eq!(caption, "a chalkboard");
    }

    #[tokio::test]
    async fn test_responder_name() {
        let responder = CannedResponder::new();
        assert_eq!(responder.name(), "CannedResponder");
    }
}
