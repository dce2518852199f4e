use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

/// Identity payload embedded in a session token.
///
/// Tokens are self-contained: there is no server-side session table, so a
/// token stays valid until `exp` even after logout clears the cookie.
/// Revocation before natural expiry is out of scope by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(id: Uuid, email: String) -> Self {
        let now = Utc::now();
        let ttl_hours = config::config().security.session_ttl_hours;
        Self {
            id,
            email,
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours as i64)).timestamp(),
        }
    }
}

/// Opaque verification failure. Bad signature, malformed token, and elapsed
/// expiry are deliberately indistinguishable: callers treat any failure as
/// "no session".
#[derive(Debug, thiserror::Error)]
#[error("invalid session token")]
pub struct InvalidToken;

/// Sign claims into a compact session token.
pub fn encrypt(claims: &Claims) -> Result<String, InvalidToken> {
    encrypt_with(claims, &config::config().security.session_secret)
}

/// Verify signature and expiry, returning the embedded claims.
pub fn decrypt(token: &str) -> Result<Claims, InvalidToken> {
    decrypt_with(token, &config::config().security.session_secret)
}

fn encrypt_with(claims: &Claims, secret: &str) -> Result<String, InvalidToken> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &key).map_err(|_| InvalidToken)
}

fn decrypt_with(token: &str, secret: &str) -> Result<Claims, InvalidToken> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();
    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| InvalidToken)
}
