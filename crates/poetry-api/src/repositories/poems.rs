//! Poem repository for database operations

use anyhow::{Context, Result};
use shared::models::{Poem, PoemWithAuthor, UserPoem};
use shared::DbPool;
use sqlx::{Executor, Postgres};

pub struct PoemRepository;

impl PoemRepository {
    /// Create a new poem owned by `user_id`
    pub async fn create(pool: &DbPool, title: &str, content: &str, user_id: i32) -> Result<Poem> {
        let poem = sqlx::query_as::<_, Poem>(
            r#"
            INSERT INTO poems (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, user_id, created_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .context("Failed to create poem")?;

        Ok(poem)
    }

    /// All poems with their author's name, newest first
    pub async fn list_with_authors(pool: &DbPool) -> Result<Vec<PoemWithAuthor>> {
        let poems = sqlx::query_as::<_, PoemWithAuthor>(
            r#"
            SELECT poems.id, poems.title, poems.content, poems.user_id, poems.created_at,
                   users.name
            FROM poems
            JOIN users ON poems.user_id = users.id
            ORDER BY poems.created_at DESC, poems.id DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .context("Failed to list poems")?;

        Ok(poems)
    }

    /// Poems owned by one user, newest first
    pub async fn list_by_user(pool: &DbPool, user_id: i32) -> Result<Vec<UserPoem>> {
        let poems = sqlx::query_as::<_, UserPoem>(
            r#"
            SELECT id, title, content FROM poems
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .context("Failed to list user poems")?;

        Ok(poems)
    }

    /// Owner of a poem, or None if the poem does not exist
    ///
    /// Locks the row, so call it on the transaction that deletes the poem.
    pub async fn find_owner<'e, E>(executor: E, poem_id: i32) -> Result<Option<i32>>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let owner = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT user_id FROM poems
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(poem_id)
        .fetch_optional(executor)
        .await
        .context("Failed to find poem owner")?;

        Ok(owner)
    }

    /// Number of poems authored by a user
    pub async fn count_by_user(pool: &DbPool, user_id: i32) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM poems
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .context("Failed to count user poems")?;

        Ok(count)
    }

    /// Delete a poem row; likes and reports must already be gone
    pub async fn delete<'e, E>(executor: E, poem_id: i32) -> Result<bool>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM poems
            WHERE id = $1
            "#,
        )
        .bind(poem_id)
        .execute(executor)
        .await
        .context("Failed to delete poem")?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every poem owned by a user
    pub async fn delete_by_user<'e, E>(executor: E, user_id: i32) -> Result<u64>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM poems
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(executor)
        .await
        .context("Failed to delete user poems")?;

        Ok(result.rows_affected())
    }
}
