use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use chattingo_auth::{authenticate, Authenticated, JwtValidator, Principal};
use tower_http::trace::TraceLayer;

/// API Router
pub fn create_router(validator: Arc<JwtValidator>) -> Router {
    Router::new()
        .route("/api/users/profile", get(user_profile))
        .layer(from_fn_with_state(validator, authenticate))
        .layer(TraceLayer::new_for_http())
}

async fn user_profile(Authenticated(principal): Authenticated) -> Json<Principal> {
    Json(principal)
}
