//! Main orchestrator that coordinates chat message handling.

use std::sync::Arc;
use std::time::Duration;

use responder_core::{Prompt, Responder};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::envelope::{parse_reply, ReplyEnvelope};
use crate::error::OrchestratorError;
use crate::prompt;

/// Default deadline for one responder call.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Coordinates one chat exchange: validate the message, invoke the
/// responder exactly once, and parse the reply into an envelope.
///
/// The responder is an injected capability; the composition root owns its
/// lifecycle, and tests substitute a mock. The orchestrator itself keeps no
/// state across requests and never retries a failed upstream call.
pub struct ChatOrchestrator {
    responder: Arc<dyn Responder>,
    deadline: Duration,
}

impl ChatOrchestrator {
    /// Create an orchestrator around the given responder.
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            responder,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Set the upstream deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Name of the underlying responder.
    pub fn responder_name(&self) -> &str {
        self.responder.name()
    }

    /// Handle one user message end-to-end.
    ///
    /// Empty (or whitespace-only) messages are rejected before any upstream
    /// call. A failed or timed-out responder call surfaces as an error and
    /// never as a partial envelope; parsing of a successful reply is total.
    pub async fn handle(&self, user_message: &str) -> Result<ReplyEnvelope, OrchestratorError> {
        let trimmed = user_message.trim();
        if trimmed.is_empty() {
            return Err(OrchestratorError::EmptyMessage);
        }

        debug!("Handling chat message: {} chars", trimmed.len());

        let prompt =
            Prompt::new(prompt::coding_instruction(trimmed)).with_system(prompt::TUTOR_PERSONA);

        let reply = match timeout(self.deadline, self.responder.respond(prompt)).await {
            Ok(result) => result.map_err(|e| {
                warn!("Responder {} failed: {}", self.responder.name(), e);
                OrchestratorError::Upstream(e)
            })?,
            Err(_) => {
                warn!(
                    "Responder {} exceeded {:?} deadline",
                    self.responder.name(),
                    self.deadline
                );
                return Err(OrchestratorError::DeadlineExceeded);
            }
        };

        info!("Responder reply: {} chars", reply.text.len());

        Ok(parse_reply(&reply.text))
    }
}
