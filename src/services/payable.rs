use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Payable;
use crate::error::ApiError;

use super::{is_missing_str, is_missing_value, numeric_amount, parse_date};

/// Client input for creating a payable. The external contract remaps two
/// fields on the way to storage: `title` -> `name`, `description` -> `note`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayable {
    pub title: Option<String>,
    pub amount: Option<Value>,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

fn missing_fields_of(input: &CreatePayable) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if is_missing_str(input.title.as_deref()) {
        missing.push("title");
    }
    if is_missing_value(input.amount.as_ref()) {
        missing.push("amount");
    }
    if is_missing_str(input.due_date.as_deref()) {
        missing.push("dueDate");
    }
    if is_missing_str(input.status.as_deref()) {
        missing.push("status");
    }
    missing
}

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Payable>, ApiError> {
    let records = sqlx::query_as::<_, Payable>(
        "SELECT id, name, amount, due_date, status, note, user_id, created_at, updated_at
         FROM payables WHERE user_id = $1 ORDER BY due_date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: CreatePayable,
) -> Result<Payable, ApiError> {
    let missing = missing_fields_of(&input);
    if !missing.is_empty() {
        return Err(ApiError::missing_fields(missing));
    }

    let amount = numeric_amount(input.amount.as_ref().unwrap_or(&Value::Null))?;
    let due_date = parse_date(input.due_date.as_deref().unwrap_or_default())?;

    let record = sqlx::query_as::<_, Payable>(
        "INSERT INTO payables (name, amount, due_date, status, note, user_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, name, amount, due_date, status, note, user_id, created_at, updated_at",
    )
    .bind(input.title)
    .bind(amount)
    .bind(due_date)
    .bind(input.status)
    .bind(input.description)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(record)
}
