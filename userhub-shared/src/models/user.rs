/// User model and database operations
///
/// This module provides the `User` model and the persistence operations
/// the API handlers call: insert, fetch-by-id, and list-all. Validation
/// is the caller's responsibility; these operations only talk to the
/// database.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id BIGSERIAL PRIMARY KEY,
///     username TEXT NOT NULL,
///     email TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use userhub_shared::models::user::{NewUser, User};
/// use userhub_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     NewUser {
///         username: "alice".to_string(),
///         email: "a@x.com".to_string(),
///     },
/// )
/// .await?;
/// println!("Created user: {}", user.id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User model representing a persisted user record
///
/// Every persisted user has a non-empty username and email; the
/// invariant is enforced by request validation at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the database on insert
    pub id: i64,

    /// Display/login name, non-empty
    pub username: String,

    /// Email address, non-empty
    ///
    /// No uniqueness or format constraint is enforced
    pub email: String,
}

/// Input for creating a new user
///
/// Both fields are required and must already be validated as non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display/login name
    pub username: String,

    /// Email address
    pub email: String,
}

impl User {
    /// Inserts a new user and returns the persisted record
    ///
    /// The database assigns the id. This operation performs no
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or rejects the
    /// write.
    pub async fn create(pool: &PgPool, data: NewUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id, username, email
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users in insertion order
    ///
    /// Ordered by id, which is monotonically assigned on insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Counts total number of users
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
