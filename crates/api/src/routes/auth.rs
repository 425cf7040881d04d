//! Registration, login, logout, and profile handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use database::{user, validation, DatabaseError, User};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{password, SessionUser};
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// A user's full name, as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: FullName,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User shape returned to clients. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub full_name: FullName,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            full_name: FullName {
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
            },
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

/// Register a new user and open a session.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>)> {
    info!(email = %payload.email, "Registration attempt");

    validation::validate_name("firstName", &payload.full_name.first_name)?;
    validation::validate_name("lastName", &payload.full_name.last_name)?;
    validation::validate_email(&payload.email)?;
    validation::validate_password(&payload.password)?;

    let email = payload.email.trim().to_string();

    if user::find_by_email(state.db.pool(), &email).await?.is_some() {
        warn!(email = %email, "Registration failed: email already registered");
        return Err(ApiError::Validation("User already exists".to_string()));
    }

    let password_hash = password::hash_password(&payload.password)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;

    let new_user = User {
        id: Uuid::new_v4().to_string(),
        first_name: payload.full_name.first_name.trim().to_string(),
        last_name: payload.full_name.last_name.trim().to_string(),
        email,
        password_hash,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    user::create_user(state.db.pool(), &new_user)
        .await
        .map_err(|e| match e {
            // Lost the race against a concurrent registration
            DatabaseError::AlreadyExists { .. } => {
                ApiError::Validation("User already exists".to_string())
            }
            other => ApiError::Database(other),
        })?;

    let token = state
        .tokens
        .issue(&new_user.id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let jar = jar.add(state.cookies.session(token));

    info!(user_id = %new_user.id, "User registered successfully");

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(&new_user),
        }),
    ))
}

/// Log an existing user in and open a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>)> {
    info!(email = %payload.email, "Login attempt");

    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    validation::validate_email(&payload.email)?;

    let found = user::find_by_email(state.db.pool(), payload.email.trim()).await?;

    let Some(found) = found else {
        warn!(email = %payload.email, "Login failed: unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !password::verify_password(&payload.password, &found.password_hash) {
        warn!(email = %payload.email, "Login failed: wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(&found.id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let jar = jar.add(state.cookies.session(token));

    info!(user_id = %found.id, "User logged in successfully");

    Ok((
        jar,
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user: UserResponse::from(&found),
        }),
    ))
}

/// Close the session by clearing the cookie.
///
/// The signed token itself stays valid until its natural expiry; there is
/// no server-side revocation.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(state.cookies.expired());

    (
        jar,
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

/// Return the profile of the authenticated user.
pub async fn profile(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ProfileResponse>> {
    let found = user::get_user(state.db.pool(), &session.user_id)
        .await
        .map_err(|e| match e {
            DatabaseError::NotFound { .. } => ApiError::NotFound("User not found".to_string()),
            other => ApiError::Database(other),
        })?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from(&found),
    }))
}
