//! Core trait and types for AI responder implementations.
//!
//! This crate provides the shared interface every responder backend in the
//! Sage service implements. It defines:
//!
//! - [`Responder`] - The trait that all responder implementations must implement
//! - [`Prompt`] / [`Reply`] - Request/response types for one completion call
//! - [`ResponderError`] - Error types for responder operations
//! - [`ImageCaptioner`] - Trait for the auxiliary image-caption capability
//!
//! # Example
//!
//! ```rust
//! use responder_core::{Prompt, Reply, Responder, ResponderError};
//! use async_trait::async_trait;
//!
//! struct MyResponder;
//!
//! #[async_trait]
//! impl Responder for MyResponder {
//!     async fn respond(&self, prompt: Prompt) -> Result<Reply, ResponderError> {
//!         Ok(Reply::new(format!("You asked: {}", prompt.text)))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyResponder"
//!     }
//! }
//! ```

mod error;
mod message;
mod prompt;
mod trait_def;

pub use error::ResponderError;
pub use message::{Prompt, Reply};
pub use prompt::hash_prompt;
pub use trait_def::{ImageCaptioner, Responder};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
