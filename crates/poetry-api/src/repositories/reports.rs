//! Report repository for database operations

use anyhow::{Context, Result};
use shared::models::{Report, ReportDetails};
use shared::DbPool;
use sqlx::{Executor, Postgres};

pub struct ReportRepository;

impl ReportRepository {
    /// File a report; the same user may report the same poem repeatedly
    pub async fn create(
        pool: &DbPool,
        poem_id: i32,
        reported_by: i32,
        reason: &str,
    ) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (poem_id, reported_by, reason)
            VALUES ($1, $2, $3)
            RETURNING id, poem_id, reported_by, reason, created_at
            "#,
        )
        .bind(poem_id)
        .bind(reported_by)
        .bind(reason)
        .fetch_one(pool)
        .await
        .context("Failed to create report")?;

        Ok(report)
    }

    /// All reports with reporter name and poem title, newest first
    pub async fn list_with_details(pool: &DbPool) -> Result<Vec<ReportDetails>> {
        let reports = sqlx::query_as::<_, ReportDetails>(
            r#"
            SELECT reports.id,
                   reports.poem_id,
                   reports.reason,
                   reports.created_at,
                   users.name AS reporter,
                   poems.title AS poem_title
            FROM reports
            JOIN users ON reports.reported_by = users.id
            JOIN poems ON reports.poem_id = poems.id
            ORDER BY reports.created_at DESC, reports.id DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .context("Failed to list reports")?;

        Ok(reports)
    }

    /// Delete a single report
    pub async fn delete<'e, E>(executor: E, report_id: i32) -> Result<bool>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM reports
            WHERE id = $1
            "#,
        )
        .bind(report_id)
        .execute(executor)
        .await
        .context("Failed to delete report")?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every report filed against a poem
    pub async fn delete_by_poem<'e, E>(executor: E, poem_id: i32) -> Result<u64>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM reports
            WHERE poem_id = $1
            "#,
        )
        .bind(poem_id)
        .execute(executor)
        .await
        .context("Failed to delete poem reports")?;

        Ok(result.rows_affected())
    }

    /// Delete reports filed by a user and reports against that user's poems
    pub async fn delete_for_user<'e, E>(executor: E, user_id: i32) -> Result<u64>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM reports
            WHERE reported_by = $1
               OR poem_id IN (SELECT id FROM poems WHERE user_id = $1)
            "#,
        )
        .bind(user_id)
        .execute(executor)
        .await
        .context("Failed to delete user reports")?;

        Ok(result.rows_affected())
    }
}
