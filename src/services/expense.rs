use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Expense;
use crate::error::ApiError;

use super::{is_missing_str, is_missing_value, numeric_amount, parse_date};

/// Client input for creating an expense. Unlike income, the client sends
/// `description`, which is stored as `note`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpense {
    pub title: Option<String>,
    pub amount: Option<Value>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

fn missing_fields_of(input: &CreateExpense) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if is_missing_str(input.title.as_deref()) {
        missing.push("title");
    }
    if is_missing_value(input.amount.as_ref()) {
        missing.push("amount");
    }
    if is_missing_str(input.date.as_deref()) {
        missing.push("date");
    }
    if is_missing_str(input.category.as_deref()) {
        missing.push("category");
    }
    missing
}

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Expense>, ApiError> {
    let records = sqlx::query_as::<_, Expense>(
        "SELECT id, title, amount, date, category, note, user_id, created_at, updated_at
         FROM expenses WHERE user_id = $1 ORDER BY date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: CreateExpense,
) -> Result<Expense, ApiError> {
    let missing = missing_fields_of(&input);
    if !missing.is_empty() {
        return Err(ApiError::missing_fields(missing));
    }

    let amount = numeric_amount(input.amount.as_ref().unwrap_or(&Value::Null))?;
    let date = parse_date(input.date.as_deref().unwrap_or_default())?;

    let record = sqlx::query_as::<_, Expense>(
        "INSERT INTO expenses (title, amount, date, category, note, user_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, title, amount, date, category, note, user_id, created_at, updated_at",
    )
    .bind(input.title)
    .bind(amount)
    .bind(date)
    .bind(input.category)
    .bind(input.description)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(record)
}
