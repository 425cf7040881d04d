//! Chat orchestrator for coordinating AI responder calls and reply parsing.
//!
//! This crate provides the [`ChatOrchestrator`] type which sits between the
//! HTTP layer and the AI responder, plus the structured-reply contract both
//! sides of the wire agree on.
//!
//! # Architecture
//!
//! ```text
//! User message (from the chat route)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CHAT ORCHESTRATOR                       │
//! │                                                             │
//! │  1. Reject empty input (no upstream call is made)           │
//! │         ↓                                                   │
//! │  2. Wrap the message in the three-section instruction       │
//! │         ↓                                                   │
//! │  3. Invoke the responder exactly once, under a deadline     │
//! │         ↓                                                   │
//! │  4. Parse the raw reply into a ReplyEnvelope                │
//! │     (total: malformed text degrades, never errors)          │
//! └─────────────────────────────────────────────────────────────┘
//!          ↓
//! { explanation, code, resources }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use orchestrator::ChatOrchestrator;
//! use mock_responder::CannedResponder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let responder = Arc::new(CannedResponder::new());
//!     let orchestrator = ChatOrchestrator::new(responder);
//!
//!     let envelope = orchestrator.handle("How do I reverse a list?").await?;
//!     println!("{}", envelope.explanation);
//!     Ok(())
//! }
//! ```

mod envelope;
mod error;
mod orchestrator;
pub mod prompt;

// Public exports
pub use envelope::{parse_reply, ReplyEnvelope, Resource};
pub use error::OrchestratorError;
pub use orchestrator::{ChatOrchestrator, DEFAULT_DEADLINE};

// Re-export commonly used types from dependencies
pub use responder_core::{Prompt, Reply, Responder, ResponderError};
