use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Money the user owes. Status handling matches [`super::Receivable`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payable {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub status: String,
    pub note: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
