//! Like repository for database operations

use anyhow::{Context, Result};
use shared::models::LikeCount;
use shared::DbPool;
use sqlx::{Executor, Postgres};

pub struct LikeRepository;

impl LikeRepository {
    /// Record a like; returns false when the pair was already liked
    pub async fn insert(pool: &DbPool, poem_id: i32, user_id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO likes (poem_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(poem_id)
        .bind(user_id)
        .execute(pool)
        .await
        .context("Failed to insert like")?;

        Ok(result.rows_affected() > 0)
    }

    /// Like totals per poem; poems without likes are absent
    pub async fn counts(pool: &DbPool) -> Result<Vec<LikeCount>> {
        let counts = sqlx::query_as::<_, LikeCount>(
            r#"
            SELECT poem_id, COUNT(*) AS like_count
            FROM likes
            GROUP BY poem_id
            ORDER BY poem_id
            "#,
        )
        .fetch_all(pool)
        .await
        .context("Failed to count likes")?;

        Ok(counts)
    }

    /// Likes received across all poems owned by a user
    pub async fn count_received_by_user(pool: &DbPool, user_id: i32) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM likes
            JOIN poems ON likes.poem_id = poems.id
            WHERE poems.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .context("Failed to count received likes")?;

        Ok(count)
    }

    /// Delete every like on a poem
    pub async fn delete_by_poem<'e, E>(executor: E, poem_id: i32) -> Result<u64>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE poem_id = $1
            "#,
        )
        .bind(poem_id)
        .execute(executor)
        .await
        .context("Failed to delete poem likes")?;

        Ok(result.rows_affected())
    }

    /// Delete likes given by a user and likes on that user's poems
    pub async fn delete_for_user<'e, E>(executor: E, user_id: i32) -> Result<u64>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE user_id = $1
               OR poem_id IN (SELECT id FROM poems WHERE user_id = $1)
            "#,
        )
        .bind(user_id)
        .execute(executor)
        .await
        .context("Failed to delete user likes")?;

        Ok(result.rows_affected())
    }
}
