//! Poem and like handlers

use actix_web::{web, HttpRequest, HttpResponse, Responder};

use super::helpers::{require_claims, service_error_response};
use crate::models::{CreatePoemRequest, LikeRequest, StatusResponse};
use crate::services::PoemService;

/// Create a poem
///
/// POST /poems (bearer token required)
pub async fn create_poem(
    poems: web::Data<PoemService>,
    req_http: HttpRequest,
    req: web::Json<CreatePoemRequest>,
) -> impl Responder {
    if let Err(resp) = require_claims(&req_http) {
        return resp;
    }

    match poems
        .create_poem(&req.title, &req.content, req.user_id)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::ok()),
        Err(e) => service_error_response(e, "create poem"),
    }
}

/// All poems with author names, newest first
///
/// GET /poems
pub async fn list_poems(poems: web::Data<PoemService>) -> impl Responder {
    match poems.list_poems().await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => service_error_response(e, "load poems"),
    }
}

/// Delete a poem with its reports and likes
///
/// DELETE /poems/{id} (author or admin)
pub async fn delete_poem(
    poems: web::Data<PoemService>,
    req_http: HttpRequest,
    path: web::Path<i32>,
) -> impl Responder {
    let claims = match require_claims(&req_http) {
        Ok(claims) => claims,
        Err(resp) => return resp,
    };

    match poems.delete_poem_as(&claims, path.into_inner()).await {
        Ok(_) => HttpResponse::Ok().json(StatusResponse::ok()),
        Err(e) => service_error_response(e, "delete poem"),
    }
}

/// Poems of one user, newest first
///
/// GET /user-poems/{id}
pub async fn list_user_poems(
    poems: web::Data<PoemService>,
    path: web::Path<i32>,
) -> impl Responder {
    match poems.list_user_poems(path.into_inner()).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => service_error_response(e, "load poems"),
    }
}

/// Like a poem (idempotent)
///
/// POST /like (bearer token required)
pub async fn like_poem(
    poems: web::Data<PoemService>,
    req_http: HttpRequest,
    req: web::Json<LikeRequest>,
) -> impl Responder {
    if let Err(resp) = require_claims(&req_http) {
        return resp;
    }

    match poems.like(req.poem_id, req.user_id).await {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::ok()),
        Err(e) => service_error_response(e, "like poem"),
    }
}

/// Like totals per poem
///
/// GET /likes
pub async fn like_counts(poems: web::Data<PoemService>) -> impl Responder {
    match poems.like_counts().await {
        Ok(counts) => HttpResponse::Ok().json(counts),
        Err(e) => service_error_response(e, "load likes"),
    }
}
