// GET/POST /api/income
use axum::{extract::Extension, response::Json};
use sqlx::PgPool;

use crate::database::models::Income;
use crate::error::ApiError;
use crate::middleware::SessionUser;
use crate::services::income::{self, CreateIncome};

pub async fn list(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<Income>>, ApiError> {
    let records = income::list(&pool, user.id).await?;
    Ok(Json(records))
}

pub async fn create(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
    Json(input): Json<CreateIncome>,
) -> Result<Json<Income>, ApiError> {
    let record = income::create(&pool, user.id, input).await?;
    Ok(Json(record))
}
