//! Cookie-session HTTP transport to the API server.

use orchestrator::ReplyEnvelope;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::session::ChatTransport;

/// User shape returned by the auth routes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: String,
    pub full_name: ApiFullName,
    pub email: String,
}

/// Name pair inside [`ApiUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFullName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
struct AuthBody {
    user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct ProfileBody {
    user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// HTTP client holding the session cookie between calls.
///
/// The session token travels in an HttpOnly cookie, so the client simply
/// carries a cookie store; no Authorization headers are involved.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API server at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map an error status to [`ClientError::Api`], extracting the server's
    /// message when the body carries one.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| status.to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Register a new account; the session cookie is stored on success.
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<ApiUser, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({
                "fullName": {"firstName": first_name, "lastName": last_name},
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json::<AuthBody>().await?.user)
    }

    /// Log in; the session cookie is stored on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<ApiUser, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({"email": email, "password": password}))
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json::<AuthBody>().await?.user)
    }

    /// Log out, clearing the server-set cookie.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.http.post(self.url("/api/auth/logout")).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Fetch the profile of the logged-in user.
    pub async fn profile(&self) -> Result<ApiUser, ClientError> {
        let response = self.http.get(self.url("/api/auth/profile")).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json::<ProfileBody>().await?.user)
    }

    /// Send one chat message and return the structured reply.
    pub async fn chat(&self, message: &str) -> Result<ReplyEnvelope, ClientError> {
        let response = self
            .http
            .post(self.url("/api/chat/chatwithai"))
            .json(&serde_json::json!({"message": message}))
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json::<ReplyEnvelope>().await?)
    }
}

#[async_trait::async_trait]
impl ChatTransport for ApiClient {
    async fn chat(&self, message: &str) -> Result<ReplyEnvelope, ClientError> {
        ApiClient::chat(self, message).await
    }
}
