use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::auth::{self, Claims};
use crate::config;

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "token";

/// Resolve the current request's identity from its cookie jar.
///
/// Returns `None` when the cookie is absent or the token fails verification
/// for any reason; the cause is never surfaced to callers.
pub fn session_from_headers(headers: &HeaderMap) -> Option<Claims> {
    let token = token_from_headers(headers)?;
    auth::decrypt(&token).ok()
}

/// Extract the raw session token from the Cookie header, if present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let raw = match value.to_str() {
            Ok(s) => s,
            Err(_) => continue,
        };
        for pair in raw.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let name = parts.next()?;
            if name == COOKIE_NAME {
                if let Some(v) = parts.next() {
                    if !v.is_empty() {
                        return Some(v.to_string());
                    }
                }
            }
        }
    }
    None
}

/// Build the session cookie for a freshly issued token.
///
/// Attributes are fixed contract: HttpOnly, SameSite=Strict, path /, max-age
/// equal to the token TTL, Secure outside development.
pub fn session_cookie(token: String) -> Cookie<'static> {
    let security = &config::config().security;
    Cookie::build((COOKIE_NAME, token))
        .http_only(true)
        .secure(security.secure_cookies)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::hours(security.session_ttl_hours as i64))
        .path("/")
        .build()
}

/// Overwrite the session cookie with an immediately-expired empty value.
pub fn clear_session_cookie() -> Cookie<'static> {
    let security = &config::config().security;
    Cookie::build((COOKIE_NAME, ""))
        .http_only(true)
        .secure(security.secure_cookies)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::ZERO)
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; token=abc.def.ghi; lang=en");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_or_empty_token_yields_none() {
        assert!(token_from_headers(&HeaderMap::new()).is_none());
        let headers = headers_with_cookie("token=");
        assert!(token_from_headers(&headers).is_none());
    }

    #[test]
    fn undecodable_token_yields_no_session() {
        let headers = headers_with_cookie("token=garbage");
        assert!(session_from_headers(&headers).is_none());
    }

    #[test]
    fn session_cookie_carries_contract_attributes() {
        let rendered = session_cookie("tok".to_string()).to_string();
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Strict"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=86400"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let rendered = clear_session_cookie().to_string();
        assert!(rendered.starts_with("token=;"));
        assert!(rendered.contains("Max-Age=0"));
    }
}
