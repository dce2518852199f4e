// GET/POST /api/expenses
use axum::{extract::Extension, response::Json};
use sqlx::PgPool;

use crate::database::models::Expense;
use crate::error::ApiError;
use crate::middleware::SessionUser;
use crate::services::expense::{self, CreateExpense};

pub async fn list(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let records = expense::list(&pool, user.id).await?;
    Ok(Json(records))
}

pub async fn create(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
    Json(input): Json<CreateExpense>,
) -> Result<Json<Expense>, ApiError> {
    let record = expense::create(&pool, user.id, input).await?;
    Ok(Json(record))
}
