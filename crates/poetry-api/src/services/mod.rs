//! Business logic services for the poetry API
//!
//! Each service is constructed once at startup with the pool (and, for
//! accounts, the token service) it needs, then shared with handlers through
//! `web::Data`.

pub mod account_service;
pub mod error;
pub mod moderation_service;
pub mod password;
pub mod poem_service;
pub mod token_service;

pub use account_service::AccountService;
pub use error::ServiceError;
pub use moderation_service::ModerationService;
pub use poem_service::PoemService;
pub use token_service::TokenService;
