//! Moderation Service
//!
//! Reports and the administrator's view of users.

use anyhow::Context;
use shared::models::{Report, ReportDetails, UserSummary};
use shared::DbPool;

use super::ServiceError;
use crate::repositories::{
    LikeRepository, PoemRepository, ReportRepository, UserRepository,
};

#[derive(Clone)]
pub struct ModerationService {
    pool: DbPool,
}

impl ModerationService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// File a report; duplicates are allowed
    pub async fn report(
        &self,
        poem_id: i32,
        reported_by: i32,
        reason: &str,
    ) -> Result<Report, ServiceError> {
        let report = ReportRepository::create(&self.pool, poem_id, reported_by, reason).await?;
        tracing::info!(report_id = report.id, poem_id, reported_by, "Poem reported");
        Ok(report)
    }

    pub async fn list_reports(&self) -> Result<Vec<ReportDetails>, ServiceError> {
        Ok(ReportRepository::list_with_details(&self.pool).await?)
    }

    pub async fn delete_report(&self, report_id: i32) -> Result<bool, ServiceError> {
        let deleted = ReportRepository::delete(&self.pool, report_id).await?;
        tracing::info!(report_id, deleted, "Report deleted");
        Ok(deleted)
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ServiceError> {
        Ok(UserRepository::list(&self.pool).await?)
    }

    /// Delete a user with their likes, reports and poems in one transaction
    ///
    /// Likes and reports attached to the user's poems by other users go too,
    /// otherwise the poem rows could not be removed.
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, ServiceError> {
        // Dropping `tx` on an early return rolls everything back
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start transaction")?;

        let likes = LikeRepository::delete_for_user(&mut *tx, user_id).await?;
        let reports = ReportRepository::delete_for_user(&mut *tx, user_id).await?;
        let poems = PoemRepository::delete_by_user(&mut *tx, user_id).await?;
        let deleted = UserRepository::delete(&mut *tx, user_id).await?;

        tx.commit().await.context("Failed to commit transaction")?;

        tracing::info!(user_id, deleted, poems, likes, reports, "User deleted");
        Ok(deleted)
    }
}
