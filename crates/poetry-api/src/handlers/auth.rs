//! Authentication and profile handlers

use actix_web::{web, HttpResponse, Responder};

use super::helpers::service_error_response;
use crate::models::{LoginRequest, SignupRequest, StatusResponse};
use crate::services::{AccountService, ServiceError};

/// Register a new user
///
/// POST /signup
pub async fn signup(
    accounts: web::Data<AccountService>,
    req: web::Json<SignupRequest>,
) -> impl Responder {
    match accounts.signup(&req.name, &req.email, &req.password).await {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::ok()),
        Err(e) => service_error_response(e, "sign up"),
    }
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    accounts: web::Data<AccountService>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    match accounts.login(&req.email, &req.password).await {
        Ok(response) => HttpResponse::Ok().json(response),
        // Unknown email is a credential failure here, not a missing resource
        Err(ServiceError::UserNotFound) => HttpResponse::Unauthorized()
            .json(StatusResponse::failure(ServiceError::UserNotFound.to_string())),
        Err(e) => service_error_response(e, "log in"),
    }
}

/// Public profile with poem and like counts
///
/// GET /profile/{id}
pub async fn get_profile(
    accounts: web::Data<AccountService>,
    path: web::Path<i32>,
) -> impl Responder {
    match accounts.profile(path.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => service_error_response(e, "load profile"),
    }
}
