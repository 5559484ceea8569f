//! Dead Poets API Library
//!
//! Exposes the HTTP layer, services and repositories for the binary and for
//! integration tests.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

use actix_web::web;
use shared::{Config, DbPool};

use services::{AccountService, ModerationService, PoemService, TokenService};

/// Services shared by every worker, built once from the pool and config
#[derive(Clone)]
pub struct AppState {
    pub pool: web::Data<DbPool>,
    pub accounts: web::Data<AccountService>,
    pub poems: web::Data<PoemService>,
    pub moderation: web::Data<ModerationService>,
    pub tokens: TokenService,
    pub api_prefix: String,
}

impl AppState {
    pub fn new(pool: DbPool, config: &Config) -> Self {
        let tokens = TokenService::from_config(&config.auth);

        Self {
            accounts: web::Data::new(AccountService::new(pool.clone(), tokens.clone())),
            poems: web::Data::new(PoemService::new(pool.clone())),
            moderation: web::Data::new(ModerationService::new(pool.clone())),
            pool: web::Data::new(pool),
            tokens,
            api_prefix: config.server.api_prefix.clone(),
        }
    }

    /// Register app data, the JSON error handler and all routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.pool.clone())
            .app_data(self.accounts.clone())
            .app_data(self.poems.clone())
            .app_data(self.moderation.clone())
            .app_data(web::JsonConfig::default().error_handler(handlers::helpers::json_error_handler));

        routes::configure(cfg, &self.api_prefix, &self.tokens);
    }
}
