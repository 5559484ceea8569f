//! Request handlers for API endpoints

pub mod auth;
pub mod health;
pub mod helpers;
pub mod moderation;
pub mod poems;

// Re-export commonly used handlers
pub use auth::*;
pub use health::*;
pub use moderation::*;
pub use poems::*;
