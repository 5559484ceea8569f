//! Data Transfer Objects (DTOs) for API requests and responses

pub mod auth;
pub mod common;
pub mod poems;
pub mod reports;

// Re-exports
pub use auth::*;
pub use common::*;
pub use poems::*;
pub use reports::*;
