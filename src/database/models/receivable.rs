use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Money owed to the user.
///
/// `status` is free-form text at the storage layer; both "pending" and
/// "PENDING" occur in practice. Aggregations compare case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Receivable {
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
