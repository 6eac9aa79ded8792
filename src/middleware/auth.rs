/// Bearer-token authentication extractor
///
/// Guarded handlers take an `AuthenticatedUser` parameter; extraction runs
/// before the handler body, so an unauthenticated write is rejected before
/// any store operation. List and Get simply omit the parameter.
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::{ready, Ready};

use crate::auth::TokenValidator;
use crate::error::AppError;

/// Acting identity resolved from the Authorization header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}

fn resolve(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let validator = req
        .app_data::<web::Data<TokenValidator>>()
        .ok_or_else(|| AppError::Unauthorized("token validator not configured".into()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing Authorization header".into()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("invalid Authorization header format".into()))?;

    let claims = validator.validate(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        e
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
    })
}
