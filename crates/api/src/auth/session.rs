//! Session gate: extracts and verifies the identity behind a request.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::auth::cookie::SESSION_COOKIE;
use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated identity attached to a guarded request.
///
/// Using this extractor is what gates a route: missing or invalid session
/// cookies are rejected before the handler body runs. Public routes simply
/// don't ask for it.
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// Verified user id from the session token.
    pub user_id: String,
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(ApiError::Unauthenticated)?;

        let user_id = state
            .tokens
            .verify(&token)
            .map_err(|_| ApiError::Unauthenticated)?;

        Ok(SessionUser { user_id })
    }
}
