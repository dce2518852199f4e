use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::Receivable;
use crate::error::ApiError;

use super::{coerce_amount, parse_date};

/// Client input for creating a receivable. Same `title` -> `name` and
/// `description` -> `note` remapping as payables, but this path performs no
/// required-field validation and coerces `amount` leniently from a string
/// or number. Both quirks are fixed external contract, not oversights to
/// repair: absent fields surface as storage errors (500), and a
/// non-numeric amount is stored as NaN.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceivable {
    pub title: Option<String>,
    #[serde(default)]
    pub amount: Value,
    pub due_date: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Receivable>, ApiError> {
    // Ordered by creation time, not due date; the list endpoint has always
    // behaved this way.
    let records = sqlx::query_as::<_, Receivable>(
        "SELECT id, name, amount, due_date, status, note, user_id, created_at, updated_at
         FROM receivables WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Sum of outstanding receivable amounts (status PENDING, any casing).
pub async fn pending_total(pool: &PgPool, user_id: Uuid) -> Result<f64, ApiError> {
    let total = sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(amount), 0)
         FROM receivables WHERE user_id = $1 AND UPPER(status) = 'PENDING'",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: CreateReceivable,
) -> Result<Receivable, ApiError> {
    let amount = coerce_amount(&input.amount);
    let due_date = parse_date(input.due_date.as_deref().unwrap_or_default())?;

    let record = sqlx::query_as::<_, Receivable>(
        "INSERT INTO receivables (name, amount, due_date, status, note, user_id)
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_amounts_are_coerced() {
        let input: CreateReceivable = serde_json::from_value(json!({
            "title": "Invoice #42",
            "amount": "250.50",
            "dueDate": "2024-07-01",
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(coerce_amount(&input.amount), 250.5);
    }

    #[test]
    fn absent_amount_coerces_to_nan() {
        let input: CreateReceivable = serde_json::from_value(json!({
            "title": "Invoice #42"
        }))
        .unwrap();
        assert!(coerce_amount(&input.amount).is_nan());
    }
}
