// POST /api/auth/login - authenticate and set the session cookie
use axum::{extract::Extension, response::Json};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::services::user;
use crate::session;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validates credentials against the stored bcrypt hash, then issues a
/// signed session token in the `token` cookie. Unknown email and wrong
/// password are indistinguishable to the caller.
pub async fn login(
    Extension(pool): Extension<PgPool>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => return Err(ApiError::validation_error("Missing email or password", None)),
    };

    let user = user::find_by_email(&pool, &email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    if !bcrypt::verify(&password, &user.password)? {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(user.id, user.email);
    let token = auth::encrypt(&claims).map_err(|err| {
        tracing::error!("Token signing failed: {}", err);
        ApiError::internal_server_error("Internal Server Error")
    })?;

    let jar = jar.add(session::session_cookie(token));
    Ok((jar, Json(json!({ "message": "Logged in successfully" }))))
}
