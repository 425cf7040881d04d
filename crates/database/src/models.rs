//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// The password hash never leaves the server: it is skipped on
/// serialization, and HTTP-facing user shapes are built without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Stable UUID assigned at registration.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login identifier, unique across the store.
    pub email: String,
    /// bcrypt hash of the password.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: "u-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$12$secret"));
        assert!(json.contains("ada@example.com"));
    }
}
