use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Expense, Income, Payable, Receivable};
use crate::error::ApiError;

/// One response for the dashboard view: the five most recent records of each
/// kind plus the outstanding (non-PAID, any casing) totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub income: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub receivables: Vec<Receivable>,
    pub payables: Vec<Payable>,
    pub receivables_total: f64,
    pub payables_total: f64,
}

/// Fan-out read across six independent queries. They run concurrently and
/// the response is assembled only once all six complete; any failure fails
/// the whole aggregation. Zero records yield totals of 0, not an error.
pub async fn get_dashboard(pool: &PgPool, user_id: Uuid) -> Result<Dashboard, ApiError> {
    let income = sqlx::query_as::<_, Income>(
        "SELECT id, title, amount, date, category, note, user_id, created_at, updated_at
         FROM income WHERE user_id = $1 ORDER BY date DESC LIMIT 5",
    )
    .bind(user_id)
    .fetch_all(pool);

    let expenses = sqlx::query_as::<_, Expense>(
        "SELECT id, title, amount, date, category, note, user_id, created_at, updated_at
         FROM expenses WHERE user_id = $1 ORDER BY date DESC LIMIT 5",
    )
    .bind(user_id)
    .fetch_all(pool);

    let receivables = sqlx::query_as::<_, Receivable>(
        "SELECT id, name, amount, due_date, status, note, user_id, created_at, updated_at
         FROM receivables WHERE user_id = $1 ORDER BY due_date DESC LIMIT 5",
    )
    .bind(user_id)
    .fetch_all(pool);

    let payables = sqlx::query_as::<_, Payable>(
        "SELECT id, name, amount, due_date, status, note, user_id, created_at, updated_at
         FROM payables WHERE user_id = $1 ORDER BY due_date DESC LIMIT 5",
    )
    .bind(user_id)
    .fetch_all(pool);

    let receivables_total = sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(amount), 0)
         FROM receivables WHERE user_id = $1 AND UPPER(status) <> 'PAID'",
    )
    .bind(user_id)
    .fetch_one(pool);

    let payables_total = sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(amount), 0)
         FROM payables WHERE user_id = $1 AND UPPER(status) <> 'PAID'",
    )
    .bind(user_id)
    .fetch_one(pool);

    let (income, expenses, receivables, payables, receivables_total, payables_total) =
        tokio::try_join!(
            income,
            expenses,
            receivables,
            payables,
            receivables_total,
            payables_total
        )?;

    Ok(Dashboard {
        income,
        expenses,
        receivables,
        payables,
        receivables_total,
        payables_total,
    })
}
