//! AI-backed chat and caption handlers.

use axum::extract::State;
use axum::Json;
use orchestrator::ReplyEnvelope;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::SessionUser;
use crate::error::{ApiError, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
    /// Base64-encoded JPEG image.
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Answer one chat message with a structured three-part reply.
pub async fn chat_with_ai(
    State(state): State<AppState>,
    session: SessionUser,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ReplyEnvelope>> {
    info!(user_id = %session.user_id, "Chat message received");

    let envelope = state.orchestrator.handle(&payload.message).await?;

    Ok(Json(envelope))
}

/// Caption an uploaded assignment image.
pub async fn caption(
    State(state): State<AppState>,
    session: SessionUser,
    Json(payload): Json<CaptionRequest>,
) -> Result<Json<CaptionResponse>> {
    let image = payload.image.trim();
    if image.is_empty() {
        return Err(ApiError::Validation("Image is required".to_string()));
    }

    info!(user_id = %session.user_id, "Caption request received");

    let caption = state
        .captioner
        .caption(image)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(CaptionResponse { caption }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::testing::{body_json, json_request, register_user, test_app};

    fn with_cookie(
        mut request: Request<Body>,
        cookie: &str,
    ) -> Request<Body> {
        request.headers_mut().insert(
            header::COOKIE,
            cookie.parse().unwrap(),
        );
        request
    }

    #[tokio::test]
    async fn test_chat_returns_envelope() {
        let app = test_app().await;
        let cookie = register_user(&app, "ada@example.com").await;

        let request = with_cookie(
            json_request(
                "POST",
                "/api/chat/chatwithai",
                serde_json::json!({"message": "How do I print a value?"}),
            ),
            &cookie,
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        // All three envelope fields are always present
        assert!(body["explanation"].is_string());
        assert!(body["code"].is_string());
        assert!(body["resources"].is_array());
        assert!(!body["explanation"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_empty_message_rejected() {
        let app = test_app().await;
        let cookie = register_user(&app, "ada@example.com").await;

        for message in ["", "   \n\t "] {
            let request = with_cookie(
                json_request(
                    "POST",
                    "/api/chat/chatwithai",
                    serde_json::json!({"message": message}),
                ),
                &cookie,
            );
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_chat_without_session_rejected() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/chat/chatwithai",
                serde_json::json!({"message": "hello"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_caption_returns_text() {
        let app = test_app().await;
        let cookie = register_user(&app, "ada@example.com").await;

        let request = with_cookie(
            json_request(
                "POST",
                "/api/chat/caption",
                serde_json::json!({"image": "aGVsbG8="}),
            ),
            &cookie,
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(!body["caption"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_is_generic_502() {
        use std::sync::Arc;

        use mock_responder::FailingResponder;
        use responder_core::Responder;

        use crate::routes::router;
        use crate::routes::testing::{state_for, test_config};

        let failing = Arc::new(FailingResponder::new());
        let state = state_for(failing.clone() as Arc<dyn Responder>, failing).await;
        let app = router(&test_config()).with_state(state);

        let cookie = register_user(&app, "ada@example.com").await;
        let request = with_cookie(
            json_request(
                "POST",
                "/api/chat/chatwithai",
                serde_json::json!({"message": "hello"}),
            ),
            &cookie,
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        // Generic message only: provider detail must stay server-side
        assert_eq!(body["message"], "AI service is currently unavailable");
    }

    #[tokio::test]
    async fn test_caption_empty_image_rejected() {
        let app = test_app().await;
        let cookie = register_user(&app, "ada@example.com").await;

        let request = with_cookie(
            json_request("POST", "/api/chat/caption", serde_json::json!({"image": ""})),
            &cookie,
        );
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
