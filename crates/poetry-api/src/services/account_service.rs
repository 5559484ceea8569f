//! Account Service
//!
//! Signup, login and profile lookups. Holds the injected pool and the token
//! service; there is no process-wide state.

use shared::error::is_unique_violation_any;
use shared::DbPool;

use super::password::{hash_password, verify_password};
use super::{ServiceError, TokenService};
use crate::models::{LoginResponse, ProfileResponse};
use crate::repositories::{LikeRepository, PoemRepository, UserRepository};

#[derive(Clone)]
pub struct AccountService {
    pool: DbPool,
    tokens: TokenService,
}

impl AccountService {
    pub fn new(pool: DbPool, tokens: TokenService) -> Self {
        Self { pool, tokens }
    }

    /// Register a new user with the default role
    ///
    /// No token is issued; the client logs in afterwards.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), ServiceError> {
        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| ServiceError::internal(format!("Password hashing task failed: {}", e)))??;

        match UserRepository::create(&self.pool, name, email, &password_hash).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "User signed up");
                Ok(())
            }
            Err(e) if is_unique_violation_any(&e) => Err(ServiceError::DuplicateEmail),
            Err(e) => Err(ServiceError::Store(e)),
        }
    }

    /// Verify credentials and issue a bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        let user = UserRepository::find_by_email(&self.pool, email)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        let password = password.to_string();
        let stored_hash = user.password.clone();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| ServiceError::internal(format!("Password check task failed: {}", e)))??;

        if !valid {
            tracing::warn!(user_id = user.id, "Login rejected: incorrect password");
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id, &user.role)
            .map_err(|e| ServiceError::internal(format!("Failed to generate JWT: {}", e)))?;

        Ok(LoginResponse {
            success: true,
            token,
            role: user.role,
            user_id: user.id,
        })
    }

    /// Public fields plus authored-poem and received-like counts
    pub async fn profile(&self, user_id: i32) -> Result<ProfileResponse, ServiceError> {
        let user = UserRepository::find_public(&self.pool, user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        let poems = PoemRepository::count_by_user(&self.pool, user_id).await?;
        let likes = LikeRepository::count_received_by_user(&self.pool, user_id).await?;

        Ok(ProfileResponse { user, poems, likes })
    }
}
