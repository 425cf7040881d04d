//! Service status endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Status {
    pub message: String,
    pub status: String,
    pub timestamp: String,
    pub environment: String,
}

/// Service status endpoint.
pub async fn root(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        message: "Sage API server is running".to_string(),
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        environment: state.environment.clone(),
    })
}
