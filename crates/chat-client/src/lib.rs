//! Client session state for the Sage chat service.
//!
//! This crate reimplements the browser-side chat session as a library:
//!
//! - [`Transcript`] / [`LikedMessages`] - the running conversation state
//! - [`PacedPlayback`] - reveals a reply's explanation as fixed-interval
//!   chat bubbles, as a cancellable set of scheduled appends
//! - [`ApiClient`] - cookie-session HTTP transport to the API server
//! - [`ChatSession`] - the send loop tying them together (single-flight,
//!   fallback message on failure)
//!
//! # Example
//!
//! ```rust,no_run
//! use chat_client::{ApiClient, ChatSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new("http://localhost:3000")?;
//!     api.login("ada@example.com", "password123").await?;
//!
//!     let mut session = ChatSession::new(api);
//!     session.set_input("How do I reverse a list?");
//!     session.send().await;
//!
//!     let transcript = session.transcript();
//!     for message in transcript.read().await.messages() {
//!         println!("[{:?}] {}", message.sender, message.text);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod http;
mod playback;
mod session;
mod transcript;

pub use error::ClientError;
pub use http::{ApiClient, ApiFullName, ApiUser};
pub use playback::{PacedPlayback, DEFAULT_LINE_DELAY};
pub use session::{ChatSession, ChatTransport, FALLBACK_MESSAGE, GREETING};
pub use transcript::{ChatMessage, LikedMessages, Sender, Transcript};

// Re-export the reply contract shared with the server
pub use orchestrator::{ReplyEnvelope, Resource};
