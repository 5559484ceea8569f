//! User repository for database operations

use anyhow::{Context, Result};
use shared::models::{PublicUser, User, UserSummary};
use shared::DbPool;
use sqlx::{Executor, Postgres};

pub struct UserRepository;

impl UserRepository {
    /// Create a new user with the default role
    ///
    /// A duplicate email surfaces as a unique-violation error from the store.
    pub async fn create(
        pool: &DbPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password, role
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .context("Failed to create user")?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, role FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .context("Failed to find user by email")?;

        Ok(user)
    }

    /// Find the public fields of a user by ID
    pub async fn find_public(pool: &DbPool, user_id: i32) -> Result<Option<PublicUser>> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, name, email FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .context("Failed to find user by ID")?;

        Ok(user)
    }

    /// List every user without password hashes
    pub async fn list(pool: &DbPool) -> Result<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT id, name, email, role FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
        .context("Failed to list users")?;

        Ok(users)
    }

    /// Delete a user row; dependent rows must already be gone
    pub async fn delete<'e, E>(executor: E, user_id: i32) -> Result<bool>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(executor)
        .await
        .context("Failed to delete user")?;

        Ok(result.rows_affected() > 0)
    }
}
