// GET/POST /api/payables
use axum::{extract::Extension, response::Json};
use sqlx::PgPool;

use crate::database::models::Payable;
use crate::error::ApiError;
use crate::middleware::SessionUser;
use crate::services::payable::{self, CreatePayable};

pub async fn list(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<Payable>>, ApiError> {
    let records = payable::list(&pool, user.id).await?;
    Ok(Json(records))
}

pub async fn create(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
    Json(input): Json<CreatePayable>,
) -> Result<Json<Payable>, ApiError> {
    let record = payable::create(&pool, user.id, input).await?;
    Ok(Json(record))
}
