//! Dead Poets API
//!
//! REST backend for sharing, liking and reporting poems.

use actix_web::{App, HttpServer};
use anyhow::Context;
use poetry_api::{middleware, AppState};
use shared::{db, Config};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    shared::init_tracing();

    tracing::info!("Starting Dead Poets API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Create database connection pool
    let db_pool = db::create_pool(&config.database)
        .await
        .context("Failed to create database pool")?;

    // Run database migrations
    db::run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    // Check database health
    db::check_health(&db_pool)
        .await
        .context("Database health check failed")?;

    let state = AppState::new(db_pool, &config);

    let server_addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(
        prefix = %config.server.api_prefix,
        "Dead Poets API listening on {}",
        server_addr
    );

    // Start HTTP server
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::cors())
            .configure(|cfg| state.configure(cfg))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind to {}", server_addr))?
    .run()
    .await
    .context("Server error")?;

    Ok(())
}
