//! Delayed responder implementation - wraps another responder with artificial delay.

use std::time::Duration;

use async_trait::async_trait;
use responder_core::{Prompt, Reply, Responder, ResponderError};
use tokio::time::sleep;

/// A responder that wraps another responder and adds artificial delay.
///
/// Useful for testing deadline handling and simulating upstream latency.
pub struct DelayedResponder<R: Responder> {
    inner: R,
    delay: Duration,
}

impl<R: Responder> DelayedResponder<R> {
    /// Create a new DelayedResponder wrapping the given responder with the specified delay.
    pub fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a responder with a delay in milliseconds.
    pub fn with_millis(inner: R, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Create a responder with a delay in seconds.
    pub fn with_secs(inner: R, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }
}

#[async_trait]
impl<R: Responder> Responder for DelayedResponder<R> {
    async fn respond(&self, prompt: Prompt) -> Result<Reply, ResponderError> {
        sleep(self.delay).await;
        self.inner.respond(prompt).await
    }

    fn name(&self) -> &str {
        "DelayedResponder"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}
