//! SQLite credential store for Sage.
//!
//! This crate provides async database operations for registered users using
//! SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, models::User, user};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:sage.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Create a user
//!     let new_user = User {
//!         id: "c27fb365-0c84-4cf2-8555-814bb065e448".to_string(),
//!         first_name: "Ada".to_string(),
//!         last_name: "Lovelace".to_string(),
//!         email: "ada@example.com".to_string(),
//!         password_hash: "$2b$12$...".to_string(),
//!         created_at: "2024-01-01T00:00:00Z".to_string(),
//!     };
//!     user::create_user(db.pool(), &new_user).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod user;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::User;
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/sage.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn sample_user(email: &str) -> User {
        User {
            id: format!("id-{}", email),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password_hash: "$2b$12$hash".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let db = test_db().await;

        let new_user = sample_user("ada@example.com");
        user::create_user(db.pool(), &new_user).await.unwrap();

        let fetched = user::get_user(db.pool(), &new_user.id).await.unwrap();
        assert_eq!(fetched, new_user);

        let by_email = user::find_by_email(db.pool(), "ada@example.com")
            .await
            .unwrap();
        assert_eq!(by_email.unwrap().id, new_user.id);
    }

    #[tokio::test]
    async fn test_find_unknown_email_is_none() {
        let db = test_db().await;

        let result = user::find_by_email(db.pool(), "nobody@example.com")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_new_row() {
        let db = test_db().await;

        let first = sample_user("dup@example.com");
        user::create_user(db.pool(), &first).await.unwrap();

        let mut second = sample_user("dup@example.com");
        second.id = "another-id".to_string();
        let result = user::create_user(db.pool(), &second).await;

        assert!(matches!(
            result,
            Err(DatabaseError::AlreadyExists { entity: "User", .. })
        ));
        assert_eq!(user::count_users(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_not_found() {
        let db = test_db().await;

        let result = user::get_user(db.pool(), "missing").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
