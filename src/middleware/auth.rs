use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::session;

/// Authenticated user context resolved from the session cookie.
///
/// Every API handler extracts this itself rather than trusting the page
/// guard; the guard only gates page navigation.
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

impl From<Claims> for SessionUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            email: claims.email,
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session::session_from_headers(&parts.headers)
            .map(SessionUser::from)
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))
    }
}
