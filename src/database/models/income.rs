use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An income record. Owned by exactly one user; append-only in this API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub category: String,
    pub note: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
