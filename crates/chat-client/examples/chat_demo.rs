//! End-to-end chat demo against a running API server.
//!
//! Run with: cargo run -p chat-client --example chat_demo -- "Your question here"
//!
//! Environment variables:
//!   SAGE_URL      - API base URL (default: http://localhost:3000)
//!   SAGE_EMAIL    - account email (default: demo@example.com)
//!   SAGE_PASSWORD - account password (default: password123)
//!
//! The demo registers the account if it does not exist yet, sends one chat
//! message, and prints the transcript as the paced playback reveals it.

use std::env;
use std::time::Duration;

use chat_client::{ApiClient, ChatSession, ClientError};
use tokio::time::sleep;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let base_url = env::var("SAGE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let email = env::var("SAGE_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
    let password = env::var("SAGE_PASSWORD").unwrap_or_else(|_| "password123".to_string());

    let args: Vec<String> = env::args().collect();
    let question = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "How do I reverse a string?".to_string()
    };

    let api = ApiClient::new(&base_url)?;

    // Log in, registering on first use
    match api.login(&email, &password).await {
        Ok(user) => println!("Logged in as {}", user.email),
        Err(ClientError::Api { .. }) => {
            let user = api.register("Demo", "User", &email, &password).await?;
            println!("Registered {}", user.email);
        }
        Err(e) => return Err(e.into()),
    }

    let mut session = ChatSession::new(api).with_line_delay(Duration::from_millis(500));
    session.set_input(&question);

    println!("Sending: \"{}\"", question);
    session.send().await;

    // Watch the transcript grow as lines are revealed; stop once it settles
    let transcript = session.transcript();
    let mut printed = 0;
    loop {
        {
            let guard = transcript.read().await;
            for message in &guard.messages()[printed..] {
                println!("[{:?}] {}", message.sender, message.text);
            }
            printed = guard.len();
        }

        sleep(Duration::from_millis(600)).await;
        if transcript.read().await.len() == printed {
            break;
        }
    }

    if let Some(reply) = session.last_reply() {
        if !reply.code.is_empty() {
            println!("\n=== Code ===\n{}", reply.code);
        }
        for resource in &reply.resources {
            println!("Resource: {} <{}>", resource.title, resource.url);
        }
    }

    Ok(())
}
