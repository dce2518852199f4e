// GET/POST /api/receivables
use axum::{extract::Extension, response::Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::database::models::Receivable;
use crate::error::ApiError;
use crate::middleware::SessionUser;
use crate::services::receivable::{self, CreateReceivable};

/// Unlike the other list endpoints, receivables return their outstanding
/// total alongside the records.
#[derive(Debug, Serialize)]
pub struct ReceivablesResponse {
    pub receivables: Vec<Receivable>,
    pub total: f64,
}

pub async fn list(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
) -> Result<Json<ReceivablesResponse>, ApiError> {
    let receivables = receivable::list(&pool, user.id).await?;
    let total = receivable::pending_total(&pool, user.id).await?;
    Ok(Json(ReceivablesResponse { receivables, total }))
}

pub async fn create(
    user: SessionUser,
    Extension(pool): Extension<PgPool>,
    Json(input): Json<CreateReceivable>,
) -> Result<Json<Receivable>, ApiError> {
    let record = receivable::create(&pool, user.id, input).await?;
    Ok(Json(record))
}
