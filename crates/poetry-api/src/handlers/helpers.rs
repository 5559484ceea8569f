//! Common Handler Helpers
//!
//! - [`require_claims`] / [`require_admin`] - caller identity or 401/403
//! - [`service_error_response`] - map a [`ServiceError`] to a JSON response
//! - [`json_error_handler`] - malformed request bodies become 400

use actix_web::{error, error::JsonPayloadError, HttpRequest, HttpResponse};

use crate::middleware::get_claims;
use crate::models::{Claims, StatusResponse};
use crate::services::ServiceError;

/// Claims of the authenticated caller or 401 Unauthorized
pub fn require_claims(req: &HttpRequest) -> Result<Claims, HttpResponse> {
    get_claims(req).ok_or_else(|| {
        HttpResponse::Unauthorized().json(StatusResponse::failure("Authentication required"))
    })
}

/// Claims of an authenticated admin, 401 without a token, 403 for other roles
pub fn require_admin(req: &HttpRequest) -> Result<Claims, HttpResponse> {
    let claims = require_claims(req)?;
    if !claims.is_admin() {
        tracing::warn!(user_id = claims.id, path = %req.path(), "Admin route refused");
        return Err(HttpResponse::Forbidden().json(StatusResponse::failure("Admin access required")));
    }
    Ok(claims)
}

/// Convert a service failure into a `{ success: false, message }` response
///
/// Store and internal failures are logged with `context` and answered with a
/// generic message; the detail never reaches the client.
pub fn service_error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::DuplicateEmail => {
            HttpResponse::Conflict().json(StatusResponse::failure(err.to_string()))
        }
        ServiceError::UserNotFound => {
            HttpResponse::NotFound().json(StatusResponse::failure(err.to_string()))
        }
        ServiceError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(StatusResponse::failure(err.to_string()))
        }
        ServiceError::Forbidden(message) => {
            HttpResponse::Forbidden().json(StatusResponse::failure(message))
        }
        ServiceError::Store(_) | ServiceError::Internal(_) => {
            tracing::error!("Error during {}: {}", context, err);
            HttpResponse::InternalServerError()
                .json(StatusResponse::failure(format!("Failed to {}", context)))
        }
    }
}

/// `JsonConfig` error handler: unreadable bodies get the usual failure shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(StatusResponse::failure(message)),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode, test::TestRequest, HttpMessage};
    use anyhow::anyhow;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let resp = service_error_response(ServiceError::DuplicateEmail, "sign up");
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Email already exists");
    }

    #[actix_web::test]
    async fn test_store_error_hides_detail() {
        let err = ServiceError::Store(anyhow!("password authentication failed for user"));
        let resp = service_error_response(err, "create poem");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(resp).await;
        assert_eq!(body["message"], "Failed to create poem");
    }

    #[actix_web::test]
    async fn test_forbidden_keeps_message() {
        let resp = service_error_response(ServiceError::forbidden("Not your poem"), "delete poem");
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(resp).await["message"], "Not your poem");
    }

    #[actix_web::test]
    async fn test_require_admin() {
        let anonymous = TestRequest::default().to_http_request();
        assert_eq!(
            require_admin(&anonymous).unwrap_err().status(),
            StatusCode::UNAUTHORIZED
        );

        let user = TestRequest::default().to_http_request();
        user.extensions_mut()
            .insert(Claims::new(2, "user".to_string(), 1));
        assert_eq!(
            require_admin(&user).unwrap_err().status(),
            StatusCode::FORBIDDEN
        );

        let admin = TestRequest::default().to_http_request();
        admin
            .extensions_mut()
            .insert(Claims::new(1, "admin".to_string(), 1));
        assert_eq!(require_admin(&admin).unwrap().id, 1);
    }
}
