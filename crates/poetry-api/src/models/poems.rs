//! Poem and like DTOs

use serde::Deserialize;

/// Create poem request; `user_id` is taken as-is from the body
#[derive(Debug, Deserialize)]
pub struct CreatePoemRequest {
    pub title: String,
    pub content: String,
    pub user_id: i32,
}

/// Like request
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub poem_id: i32,
    pub user_id: i32,
}
