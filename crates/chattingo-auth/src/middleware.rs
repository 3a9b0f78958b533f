use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::claims::Principal;
use crate::error::AuthError;
use crate::jwt::JwtValidator;

/// Attach the caller's [`Principal`] when a valid bearer token is sent.
///
/// Requests without an `Authorization` header pass through anonymously;
/// a header that fails validation rejects the request with 401.
pub async fn authenticate(
    State(validator): State<Arc<JwtValidator>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if let Some(value) = request.headers().get(AUTHORIZATION) {
        let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
        let principal = validator.validate_header(value)?;
        request.extensions_mut().insert(principal);
    }

    Ok(next.run(request).await)
}

/// Extractor for handlers that require an authenticated caller.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Authenticated)
            .ok_or(AuthError::Unauthenticated)
    }
}
