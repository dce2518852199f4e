// POST /api/auth/register - create a user account
use axum::{extract::Extension, http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::services::user;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn register(
    Extension(pool): Extension<PgPool>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (name, email, password) = match (payload.name, payload.email, payload.password) {
        (Some(n), Some(e), Some(p)) if !n.is_empty() && !e.is_empty() && !p.is_empty() => (n, e, p),
        _ => {
            return Err(ApiError::validation_error(
                "Missing name, email or password",
                None,
            ))
        }
    };

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
    user::create(&pool, &name, &email, &password_hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}
