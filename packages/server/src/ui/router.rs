//! Route table.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use super::{
    handler::{get_hotel_detail, health_check, list_hotels},
    identity::trusted_user_header,
    state::AppState,
};

/// Build the routes without an identity layer.
///
/// Callers that authenticate requests themselves add their own layer which
/// inserts a `UserId` extension.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/hotels", get(list_hotels))
        .route("/hotels/{hotel_id}", get(get_hotel_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the routes with the trusted `x-user-id` header as identity source.
pub fn build_app(state: Arc<AppState>) -> Router {
    build_router(state).layer(middleware::from_fn(trusted_user_header))
}
