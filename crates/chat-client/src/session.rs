//! The chat session send loop.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use orchestrator::ReplyEnvelope;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::ClientError;
use crate::playback::PacedPlayback;
use crate::transcript::{ChatMessage, LikedMessages, Transcript};

/// Greeting seeded into a fresh transcript.
pub const GREETING: &str = "Hello! Ask me to generate code or explain concepts.";

/// Bot message shown when a chat request fails, whatever the cause.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble responding. Please try again later.";

/// Transport behind a chat session.
///
/// Abstracted so tests can substitute canned or failing transports for the
/// real HTTP client.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one chat message and return the structured reply.
    async fn chat(&self, message: &str) -> Result<ReplyEnvelope, ClientError>;
}

/// One user's chat view: input buffer, transcript, liked messages, and the
/// paced playback of the current reply.
///
/// `send` is single-flight by construction (it borrows the session mutably
/// for the whole request), and starting a new request cancels any appends
/// still pending from the previous reply.
pub struct ChatSession<T: ChatTransport> {
    transport: T,
    transcript: Arc<RwLock<Transcript>>,
    liked: LikedMessages,
    playback: PacedPlayback,
    input: String,
    in_flight: bool,
    last_reply: Option<ReplyEnvelope>,
}

impl<T: ChatTransport> ChatSession<T> {
    /// Create a session over the given transport, seeded with the greeting.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            transcript: Arc::new(RwLock::new(Transcript::with_greeting(GREETING))),
            liked: LikedMessages::new(),
            playback: PacedPlayback::new(),
            input: String::new(),
            in_flight: false,
            last_reply: None,
        }
    }

    /// Use a custom interval between revealed reply lines.
    pub fn with_line_delay(mut self, delay: Duration) -> Self {
        self.playback = PacedPlayback::with_delay(delay);
        self
    }

    /// Shared handle to the transcript, for rendering.
    pub fn transcript(&self) -> Arc<RwLock<Transcript>> {
        self.transcript.clone()
    }

    /// Replace the input buffer.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// The last structured reply, for the code/resources panels.
    pub fn last_reply(&self) -> Option<&ReplyEnvelope> {
        self.last_reply.as_ref()
    }

    /// Like a message text. Returns false when it was already liked.
    pub fn like(&mut self, text: &str) -> bool {
        self.liked.like(text)
    }

    /// Liked message texts.
    pub fn liked(&self) -> &LikedMessages {
        &self.liked
    }

    /// Send the current input buffer.
    ///
    /// A blank buffer is a no-op. On success the reply's explanation plays
    /// back gradually; on failure a fixed fallback bubble is appended and
    /// the error stays client-side.
    pub async fn send(&mut self) {
        if self.in_flight {
            return;
        }

        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        self.input.clear();

        self.transcript
            .write()
            .await
            .push(ChatMessage::user(trimmed.clone()));

        // A new request owns the playback slot from here on
        self.playback.cancel();

        self.in_flight = true;
        let result = self.transport.chat(&trimmed).await;
        self.in_flight = false;

        match result {
            Ok(envelope) => {
                self.playback
                    .start(&envelope.explanation, self.transcript.clone());
                self.last_reply = Some(envelope);
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                self.transcript
                    .write()
                    .await
                    .push(ChatMessage::bot(FALLBACK_MESSAGE));
            }
        }
    }
}
