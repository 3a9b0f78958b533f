use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for any rejected bearer token.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token received";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Signing key too weak: {0} bytes, at least 32 required")]
    WeakKey(usize),

    #[error("Malformed Authorization header")]
    MalformedHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Authentication required")]
    Unauthenticated,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MalformedHeader | AuthError::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, INVALID_TOKEN_MESSAGE.to_string())
            }
            AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::WeakKey(_) | AuthError::Signing(_) => {
                tracing::error!("Auth configuration error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MalformedHeader.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::WeakKey(4).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AuthError::WeakKey(8).to_string(),
            "Signing key too weak: 8 bytes, at least 32 required"
        );
    }
}
