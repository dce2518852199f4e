use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::session;

/// Outcome of the page-navigation guard for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToApp,
}

/// Paths the guard never touches: the JSON API (handlers re-check auth
/// themselves) and static assets.
fn is_excluded(path: &str) -> bool {
    path.starts_with("/api") || path.starts_with("/assets") || path == "/favicon.ico"
}

fn is_auth_page(path: &str) -> bool {
    path.starts_with("/login") || path.starts_with("/register")
}

/// Page-gating rules, evaluated in order:
/// 1. no session and not an auth page -> login
/// 2. session and an auth page -> app root
/// 3. otherwise pass through
pub fn decide(path: &str, has_session: bool) -> GuardDecision {
    if is_excluded(path) {
        return GuardDecision::Allow;
    }
    if !has_session && !is_auth_page(path) {
        return GuardDecision::RedirectToLogin;
    }
    if has_session && is_auth_page(path) {
        return GuardDecision::RedirectToApp;
    }
    GuardDecision::Allow
}

/// Middleware applying the guard to every inbound request.
pub async fn page_guard(request: Request, next: Next) -> Response {
    let has_session = session::session_from_headers(request.headers()).is_some();
    match decide(request.uri().path(), has_session) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectToLogin => Redirect::temporary("/login").into_response(),
        GuardDecision::RedirectToApp => Redirect::temporary("/").into_response(),
    }
}
