mod common;

use anyhow::Result;
use axum::http::{header, StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn unauthenticated_root_redirects_to_login() -> Result<()> {
    let app = common::test_app();
    let res = app.oneshot(common::get("/")).await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[header::LOCATION], "/login");
    Ok(())
}

#[tokio::test]
async fn unauthenticated_app_pages_redirect_to_login() -> Result<()> {
    for path in ["/income", "/expenses", "/payables", "/receivables"] {
        let app = common::test_app();
        let res = app.oneshot(common::get(path)).await?;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT, "path {}", path);
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }
    Ok(())
}

#[tokio::test]
async fn unauthenticated_login_page_is_served() -> Result<()> {
    let app = common::test_app();
    let res = app.oneshot(common::get("/login")).await?;

    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn authenticated_login_page_redirects_to_app() -> Result<()> {
    let cookie = common::session_cookie();
    let app = common::test_app();
    let res = app.oneshot(common::get_with_cookie("/login", &cookie)).await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[header::LOCATION], "/");
    Ok(())
}

#[tokio::test]
async fn authenticated_root_is_served() -> Result<()> {
    let cookie = common::session_cookie();
    let app = common::test_app();
    let res = app.oneshot(common::get_with_cookie("/", &cookie)).await?;

    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn expired_session_is_treated_as_no_session() -> Result<()> {
    let cookie = common::expired_session_cookie();
    let app = common::test_app();
    let res = app.oneshot(common::get_with_cookie("/", &cookie)).await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[header::LOCATION], "/login");
    Ok(())
}

#[tokio::test]
async fn api_paths_are_not_redirected_by_the_guard() -> Result<()> {
    // The guard leaves /api alone; the handler itself rejects with 401.
    let app = common::test_app();
    let res = app.oneshot(common::get("/api/income")).await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(res).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn static_paths_are_not_redirected_by_the_guard() -> Result<()> {
    let app = common::test_app();
    let res = app.oneshot(common::get("/favicon.ico")).await?;

    // No such route exists, but the guard must not turn it into a redirect
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
