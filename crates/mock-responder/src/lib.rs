//! Mock responder implementations for Sage chat processing.
//!
//! This crate provides mock implementations of the `Responder` trait for
//! testing:
//! - `CannedResponder` - Returns a fixed reply and counts invocations
//! - `EchoResponder` - Echoes the prompt text back
//! - `DelayedResponder` - Wraps another responder with artificial delay
//! - `FailingResponder` - Always fails with a chosen error
//!
//! For production AI processing, use the `gemini-responder` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_responder::{CannedResponder, Prompt, Responder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_responder::ResponderError> {
//!     let responder = CannedResponder::with_reply("42");
//!
//!     let reply = responder.respond(Prompt::new("What is the answer?")).await?;
//!     assert_eq!(reply.text, "42");
//!     assert_eq!(responder.call_count(), 1);
//!     Ok(())
//! }
//! ```

mod canned;
mod delayed;
mod echo;
mod failing;

// Re-export responder-core types for convenience
pub use responder_core::{async_trait, ImageCaptioner, Prompt, Reply, Responder, ResponderError};

pub use canned::{CannedResponder, DEFAULT_REPLY};
pub use delayed::DelayedResponder;
pub use echo::EchoResponder;
pub use failing::{FailingResponder, FailureKind};
