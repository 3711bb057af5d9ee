//! Caller identity extraction.
//!
//! The store keys layouts by caller, so every data route requires an
//! identity. Session provisioning lives outside this service; callers present
//! their id directly in the `X-User-Id` header.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::http::StatusCode;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller extracted from the `X-User-Id` header.
/// Use as a handler parameter to require an identity.
pub struct AuthUser {
    pub user_id: Uuid,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if raw.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let user_id = Uuid::parse_str(raw).map_err(|_| StatusCode::UNAUTHORIZED)?;
        Ok(Self { user_id })
    }
}
