//! Route configuration for the API

use actix_web::web;

use crate::{handlers, middleware::JwtAuth, services::TokenService};

/// Configure all routes under `api_prefix` ("" mounts at the root)
///
/// Access rules live in the handlers: reads are public, writes need a bearer
/// token, and `/users` plus `/reports` are admin only.
pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, tokens: &TokenService) {
    cfg.service(
        web::scope(api_prefix)
            .wrap(JwtAuth::new(tokens.clone()))
            .route("", web::get().to(handlers::index))
            .route("/", web::get().to(handlers::index))
            .route("/health", web::get().to(handlers::health_check))
            // Authentication
            .route("/signup", web::post().to(handlers::signup))
            .route("/login", web::post().to(handlers::login))
            .route("/profile/{id}", web::get().to(handlers::get_profile))
            // Poems
            .service(
                web::resource("/poems")
                    .route(web::get().to(handlers::list_poems))
                    .route(web::post().to(handlers::create_poem)),
            )
            .route("/poems/{id}", web::delete().to(handlers::delete_poem))
            .route("/user-poems/{id}", web::get().to(handlers::list_user_poems))
            // Likes
            .route("/like", web::post().to(handlers::like_poem))
            .route("/likes", web::get().to(handlers::like_counts))
            // Moderation
            .route("/report", web::post().to(handlers::report_poem))
            .route("/reports", web::get().to(handlers::list_reports))
            .route("/reports/{id}", web::delete().to(handlers::delete_report))
            // Administration
            .route("/users", web::get().to(handlers::list_users))
            .route("/users/{id}", web::delete().to(handlers::delete_user)),
    );
}
