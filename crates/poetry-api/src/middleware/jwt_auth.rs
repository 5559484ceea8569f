//! Bearer Token Middleware
//!
//! Validates `Authorization: Bearer <jwt>` and stores the decoded [`Claims`]
//! in the request extensions.
//!
//! Requests without valid claims continue anonymously, whether the header is
//! missing, malformed or carries an expired token. Handlers that need an
//! identity answer 401 themselves (see `handlers::helpers::require_claims`),
//! so a client holding a stale token can still reach `/login`.
//!
//! Public and protected methods share paths (`GET`/`POST /poems`), so the
//! middleware wraps the whole API scope instead of a protected sub-scope.
//!
//! # Usage
//!
//! ```ignore
//! web::scope(prefix)
//!     .wrap(JwtAuth::new(token_service.clone()))
//!     .route("/poems", web::post().to(handlers::create_poem))
//! ```

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};
use tracing::debug;

use crate::models::Claims;
use crate::services::TokenService;

/// Bearer token middleware factory
pub struct JwtAuth {
    tokens: Rc<TokenService>,
}

impl JwtAuth {
    pub fn new(tokens: TokenService) -> Self {
        Self {
            tokens: Rc::new(tokens),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Rc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let tokens = self.tokens.clone();

        Box::pin(async move {
            if req.headers().contains_key(AUTHORIZATION) {
                match bearer_token(req.request()).map(|t| tokens.verify(&t)) {
                    Some(Ok(claims)) => {
                        req.extensions_mut().insert(claims);
                    }
                    Some(Err(e)) => {
                        debug!(path = %req.path(), error = %e, "Ignoring invalid bearer token");
                    }
                    None => {
                        debug!(path = %req.path(), "Ignoring malformed Authorization header");
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// Claims stored by [`JwtAuth`] for this request
pub fn get_claims(req: &HttpRequest) -> Option<Claims> {
    req.extensions().get::<Claims>().cloned()
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
