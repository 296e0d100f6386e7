//! Caller identity.
//!
//! Authentication happens upstream. Whatever authenticates the request puts a
//! [`UserId`] into the request extensions, and handlers read it back through
//! [`AuthenticatedUser`] without revalidating it.

use axum::{
    extract::{FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::domain::UserId;

/// Header carrying the user id set by an authenticating gateway
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the user resolved by the upstream identity layer.
///
/// Rejects with `401 Unauthorized` when no identity is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(UserId);

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserId>()
            .copied()
            .map(Self)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// Middleware that trusts the `x-user-id` header.
///
/// Meant to run behind a gateway that authenticates the caller and strips any
/// client-supplied copy of the header. A missing or malformed header leaves
/// the request without an identity.
pub async fn trusted_user_header(mut request: Request, next: Next) -> Response {
    let user_id = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<UserId>().ok());

    match user_id {
        Some(user_id) => {
            request.extensions_mut().insert(user_id);
        }
        None if request.headers().contains_key(USER_ID_HEADER) => {
            tracing::warn!("Ignoring malformed {} header", USER_ID_HEADER);
        }
        None => {}
    }

    next.run(request).await
}
