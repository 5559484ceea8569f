//! Report and administration handlers

use actix_web::{web, HttpRequest, HttpResponse, Responder};

use super::helpers::{require_admin, require_claims, service_error_response};
use crate::models::{ReportRequest, StatusResponse};
use crate::services::ModerationService;

/// Report a poem
///
/// POST /report (bearer token required)
pub async fn report_poem(
    moderation: web::Data<ModerationService>,
    req_http: HttpRequest,
    req: web::Json<ReportRequest>,
) -> impl Responder {
    if let Err(resp) = require_claims(&req_http) {
        return resp;
    }

    match moderation
        .report(req.poem_id, req.reported_by, &req.reason)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::ok()),
        Err(e) => service_error_response(e, "report poem"),
    }
}

/// All reports, newest first
///
/// GET /reports (admin)
pub async fn list_reports(
    moderation: web::Data<ModerationService>,
    req_http: HttpRequest,
) -> impl Responder {
    if let Err(resp) = require_admin(&req_http) {
        return resp;
    }

    match moderation.list_reports().await {
        Ok(reports) => HttpResponse::Ok().json(reports),
        Err(e) => service_error_response(e, "load reports"),
    }
}

/// Dismiss a report
///
/// DELETE /reports/{id} (admin)
pub async fn delete_report(
    moderation: web::Data<ModerationService>,
    req_http: HttpRequest,
    path: web::Path<i32>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req_http) {
        return resp;
    }

    match moderation.delete_report(path.into_inner()).await {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::ok()),
        Err(e) => service_error_response(e, "delete report"),
    }
}

/// All users without password hashes
///
/// GET /users (admin)
pub async fn list_users(
    moderation: web::Data<ModerationService>,
    req_http: HttpRequest,
) -> impl Responder {
    if let Err(resp) = require_admin(&req_http) {
        return resp;
    }

    match moderation.list_users().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => service_error_response(e, "load users"),
    }
}

/// Delete a user and everything they own
///
/// DELETE /users/{id} (admin)
pub async fn delete_user(
    moderation: web::Data<ModerationService>,
    req_http: HttpRequest,
    path: web::Path<i32>,
) -> impl Responder {
    let admin = match require_admin(&req_http) {
        Ok(claims) => claims,
        Err(resp) => return resp,
    };

    let user_id = path.into_inner();
    tracing::info!(admin_id = admin.id, user_id, "Admin deleting user");

    match moderation.delete_user(user_id).await {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::ok()),
        Err(e) => service_error_response(e, "delete user"),
    }
}
