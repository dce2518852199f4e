// GET /api/auth/session - current session claims, or null
use axum::{http::HeaderMap, response::Json};
use serde_json::Value;

use crate::session;

/// Returns the decoded claims for a valid session cookie, or JSON null for
/// anything else. This endpoint never errors to the caller.
pub async fn session(headers: HeaderMap) -> Json<Value> {
    let claims = session::session_from_headers(&headers);
    Json(serde_json::to_value(claims).unwrap_or(Value::Null))
}
