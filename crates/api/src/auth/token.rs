//! Stateless session tokens.
//!
//! Tokens are signed JWTs binding a user id to an absolute 24-hour expiry.
//! There is no refresh and no server-side revocation list: logout only
//! clears the client cookie, and a leaked token stays valid until it
//! expires naturally.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session lifetime in seconds (24 hours, absolute from issuance).
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Errors from issuing or verifying session tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token signing failed.
    #[error("failed to sign token: {0}")]
    Issue(String),

    /// Signature invalid or token expired.
    #[error("invalid or expired token")]
    InvalidToken,
}

/// Issues and verifies signed session tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    /// Create an issuer over the given signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token for the given user id, expiring in 24 hours.
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_owned(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Issue(e.to_string()))
    }

    /// Verify a token and return the user id it was issued for.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = TokenIssuer::new("test-secret");

        let token = issuer.issue("user-123").unwrap();
        assert!(token.contains('.'));

        let user_id = issuer.verify(&token).unwrap();
        assert_eq!(user_id, "user-123");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new("test-secret");

        let mut token = issuer.issue("user-123").unwrap();
        token.push('x');

        assert!(matches!(
            issuer.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenIssuer::new("secret-one").issue("user-123").unwrap();

        let result = TokenIssuer::new("secret-two").verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = TokenIssuer::new("test-secret");
        assert!(matches!(
            issuer.verify("invalid.token.here"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new("test-secret");

        // Sign claims that expired an hour ago, past any validation leeway
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "user-123".to_string(),
            iat: now - TOKEN_TTL_SECS - 3600,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            issuer.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expiry_is_in_the_future() {
        let issuer = TokenIssuer::new("test-secret");
        let token = issuer.issue("user-123").unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("test-secret".as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        let now = chrono::Utc::now().timestamp();
        assert!(data.claims.exp > now);
        assert!(data.claims.iat <= now);
        assert_eq!(data.claims.exp - data.claims.iat, TOKEN_TTL_SECS);
    }
}
