//! Gemini-based responder implementation.
//!
//! This crate provides a responder implementation that uses the Google
//! Gemini `generateContent` API to answer tutoring questions, plus the
//! auxiliary image-caption capability used for uploaded assignments.
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_responder::GeminiResponder;
//! use responder_core::{Prompt, Responder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let responder = GeminiResponder::from_env()?;
//!     let reply = responder.respond(Prompt::new("Explain recursion")).await?;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod responder;

pub use config::GeminiConfig;
pub use responder::GeminiResponder;

// Re-export responder-core types for convenience
pub use responder_core::{
    async_trait, ImageCaptioner, Prompt, Reply, Responder, ResponderError,
};
