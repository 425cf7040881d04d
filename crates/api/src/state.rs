//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use orchestrator::ChatOrchestrator;
use responder_core::ImageCaptioner;

use crate::auth::{CookieSettings, TokenIssuer};

/// Shared application state.
///
/// All AI capabilities are injected here by the composition root; handlers
/// never reach for process-global clients.
#[derive(Clone)]
pub struct AppState {
    /// Credential store.
    pub db: Database,
    /// Chat orchestrator wrapping the injected responder.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Image captioner for uploaded assignments.
    pub captioner: Arc<dyn ImageCaptioner>,
    /// Session token issuer/verifier.
    pub tokens: TokenIssuer,
    /// Session cookie attributes, shared by the set and clear paths.
    pub cookies: CookieSettings,
    /// Deployment environment name, reported by the status route.
    pub environment: String,
}
