//! Route handlers for the API server.

pub mod auth;
pub mod chat;
pub mod status;

use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::Config;
use crate::state::AppState;

/// Route prefixes reported by the 404 fallback.
const AVAILABLE_ROUTES: [&str; 2] = ["/api/auth", "/api/chat"];

/// Build the router with all routes.
pub fn router(config: &Config) -> Router<AppState> {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentials mode forbids wildcard origins, so the list is explicit
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            header::COOKIE,
        ]);

    Router::new()
        // Service status
        .route("/", get(status::root))
        // Authentication
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/profile", get(auth::profile))
        // Chat
        .route("/api/chat/chatwithai", post(chat::chat_with_ai))
        .route("/api/chat/caption", post(chat::caption))
        .fallback(not_found)
        .layer(cors)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundResponse {
    error: String,
    path: String,
    method: String,
    available_routes: Vec<String>,
}

/// Catch-all for unmatched routes.
async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    warn!("Route not found: {} {}", method, uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Route not found".to_string(),
            path: uri.path().to_string(),
            method: method.to_string(),
            available_routes: AVAILABLE_ROUTES.iter().map(|r| r.to_string()).collect(),
        }),
    )
}
