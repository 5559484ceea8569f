//! Repository layer for database access

pub mod likes;
pub mod poems;
pub mod reports;
pub mod users;

// Re-exports
pub use likes::LikeRepository;
pub use poems::PoemRepository;
pub use reports::ReportRepository;
pub use users::UserRepository;
