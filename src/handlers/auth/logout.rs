// POST /api/auth/logout - clear the session cookie
use axum::response::Json;
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};

use crate::session;

/// Overwrites the cookie with an expired empty value. The token itself is
/// not revoked; it stays verifiable until its natural expiry.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.add(session::clear_session_cookie());
    (jar, Json(json!({ "message": "Logged out successfully" })))
}
