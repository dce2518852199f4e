// GET /api/dashboard
use axum::{extract::Extension, response::Json};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::SessionUser;
use crate::services::dashboard::{self, Dashboard};

pub async fn get(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Dashboard>, ApiError> {
    let dashboard = dashboard::get_dashboard(&pool, user.id).await?;
    Ok(Json(dashboard))
}
