//! Sage HTTP API server.
//!
//! Exposes registration/login/session routes and the AI-backed chat route
//! over JSON, backed by the SQLite credential store and the chat
//! orchestrator.

mod auth;
mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use database::Database;
use gemini_responder::GeminiResponder;
use orchestrator::ChatOrchestrator;
use tracing::info;

use crate::auth::{CookieSettings, TokenIssuer};
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration; a missing JWT secret is fatal here, at startup
    let config = Config::from_env()?;
    info!(addr = %config.addr, environment = %config.environment, "Starting Sage API server");

    // Connect to the credential store
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // The responder is built once and injected; handlers never construct it
    let responder = Arc::new(GeminiResponder::from_env()?);
    let orchestrator = Arc::new(ChatOrchestrator::new(responder.clone()));

    // Build application state
    let state = AppState {
        db,
        orchestrator,
        captioner: responder,
        tokens: TokenIssuer::new(&config.jwt_secret),
        cookies: CookieSettings::for_environment(&config.environment),
        environment: config.environment.clone(),
    };

    // Build router
    let app = routes::router(&config).with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Sage API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
