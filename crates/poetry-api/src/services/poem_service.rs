//! Poem Service
//!
//! Poem creation, listing and deletion plus likes.

use anyhow::Context;
use shared::models::{LikeCount, Poem, PoemWithAuthor, UserPoem};
use shared::DbPool;

use super::ServiceError;
use crate::models::Claims;
use crate::repositories::{LikeRepository, PoemRepository, ReportRepository};

#[derive(Clone)]
pub struct PoemService {
    pool: DbPool,
}

impl PoemService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a poem for `user_id`
    ///
    /// `user_id` is not checked against the caller's token.
    pub async fn create_poem(
        &self,
        title: &str,
        content: &str,
        user_id: i32,
    ) -> Result<Poem, ServiceError> {
        let poem = PoemRepository::create(&self.pool, title, content, user_id).await?;
        tracing::debug!(poem_id = poem.id, user_id, "Poem created");
        Ok(poem)
    }

    pub async fn list_poems(&self) -> Result<Vec<PoemWithAuthor>, ServiceError> {
        Ok(PoemRepository::list_with_authors(&self.pool).await?)
    }

    pub async fn list_user_poems(&self, user_id: i32) -> Result<Vec<UserPoem>, ServiceError> {
        Ok(PoemRepository::list_by_user(&self.pool, user_id).await?)
    }

    /// Delete a poem on behalf of `caller`, who must own it or be an admin
    ///
    /// Deleting a poem that no longer exists succeeds.
    pub async fn delete_poem_as(&self, caller: &Claims, poem_id: i32) -> Result<bool, ServiceError> {
        self.delete_poem_checked(Some(caller), poem_id).await
    }

    /// Delete a poem with its reports and likes in one transaction
    pub async fn delete_poem(&self, poem_id: i32) -> Result<bool, ServiceError> {
        self.delete_poem_checked(None, poem_id).await
    }

    async fn delete_poem_checked(
        &self,
        caller: Option<&Claims>,
        poem_id: i32,
    ) -> Result<bool, ServiceError> {
        // Dropping `tx` on an early return rolls everything back
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start transaction")?;

        if let Some(caller) = caller.filter(|c| !c.is_admin()) {
            let owner = PoemRepository::find_owner(&mut *tx, poem_id).await?;
            if owner.is_some_and(|owner| owner != caller.id) {
                tracing::warn!(poem_id, user_id = caller.id, "Poem delete refused");
                return Err(ServiceError::forbidden(
                    "Only the author or an admin can delete this poem",
                ));
            }
        }

        let reports = ReportRepository::delete_by_poem(&mut *tx, poem_id).await?;
        let likes = LikeRepository::delete_by_poem(&mut *tx, poem_id).await?;
        let deleted = PoemRepository::delete(&mut *tx, poem_id).await?;

        tx.commit().await.context("Failed to commit transaction")?;

        tracing::info!(poem_id, deleted, reports, likes, "Poem deleted");
        Ok(deleted)
    }

    /// Like a poem; liking twice is a no-op
    pub async fn like(&self, poem_id: i32, user_id: i32) -> Result<(), ServiceError> {
        let inserted = LikeRepository::insert(&self.pool, poem_id, user_id).await?;
        if !inserted {
            tracing::debug!(poem_id, user_id, "Duplicate like ignored");
        }
        Ok(())
    }

    pub async fn like_counts(&self) -> Result<Vec<LikeCount>, ServiceError> {
        Ok(LikeRepository::counts(&self.pool).await?)
    }
}
