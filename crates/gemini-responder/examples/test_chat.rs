//! Simple test for GeminiResponder chat completion.
//!
//! Run with: cargo run -p gemini-responder --example test_chat
//! Or with a custom message: cargo run -p gemini-responder --example test_chat -- "Your message here"
//!
//! Make sure to set environment variables in .env:
//!   GEMINI_API_KEY - Gemini API key for authentication

use gemini_responder::{GeminiResponder, Prompt, Responder};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get message from command line args or use default
    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Hello! Please respond with a short greeting.".to_string()
    };

    println!("Initializing GeminiResponder...");
    let responder = GeminiResponder::from_env()?;

    println!("Responder initialized: {}", responder.name());
    println!("API URL: {}", responder.config().api_url);
    println!("Model: {}", responder.config().model);
    println!("Caption model: {}", responder.config().caption_model);
    println!();

    println!("Sending: \"{}\"", message_text);
    println!("Waiting for response...\n");

    let reply = responder.respond(Prompt::new(message_text)).await?;

    println!("=== Reply ===");
    println!("{}", reply.text);
    println!("=============");

    Ok(())
}
