mod common;

use anyhow::Result;
use axum::http::{header, StatusCode};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn session_without_cookie_is_null() -> Result<()> {
    let app = common::test_app();
    let res = app.oneshot(common::get("/api/auth/session")).await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert!(body.is_null());
    Ok(())
}

#[tokio::test]
async fn session_with_valid_cookie_returns_claims() -> Result<()> {
    let cookie = common::session_cookie();
    let app = common::test_app();
    let res = app
        .oneshot(common::get_with_cookie("/api/auth/session", &cookie))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert_eq!(body["email"], "tester@example.com");
    assert!(body["id"].is_string());
    assert!(body["exp"].as_i64().unwrap() > body["iat"].as_i64().unwrap());
    Ok(())
}

#[tokio::test]
async fn session_with_garbage_cookie_is_null_not_an_error() -> Result<()> {
    let app = common::test_app();
    let res = app
        .oneshot(common::get_with_cookie("/api/auth/session", "token=nonsense"))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert!(body.is_null());
    Ok(())
}

#[tokio::test]
async fn session_with_expired_cookie_is_null() -> Result<()> {
    let cookie = common::expired_session_cookie();
    let app = common::test_app();
    let res = app
        .oneshot(common::get_with_cookie("/api/auth/session", &cookie))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = common::body_json(res).await;
    assert!(body.is_null());
    Ok(())
}

#[tokio::test]
async fn login_without_credentials_is_a_validation_error() -> Result<()> {
    let app = common::test_app();
    let res = app
        .oneshot(common::post_json("/api/auth/login", json!({})))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(res).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "Missing email or password");
    Ok(())
}

#[tokio::test]
async fn logout_clears_the_cookie() -> Result<()> {
    let app = common::test_app();
    let res = app
        .oneshot(common::post_json("/api/auth/logout", json!({})))
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let set_cookie = res.headers()[header::SET_COOKIE].to_str()?.to_string();
    assert!(set_cookie.starts_with("token=;"));
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(set_cookie.contains("HttpOnly"));

    let body = common::body_json(res).await;
    assert_eq!(body["message"], "Logged out successfully");
    Ok(())
}

#[tokio::test]
async fn protected_endpoints_reject_missing_sessions() -> Result<()> {
    for path in [
        "/api/dashboard",
        "/api/income",
        "/api/expenses",
        "/api/payables",
        "/api/receivables",
    ] {
        let app = common::test_app();
        let res = app.oneshot(common::get(path)).await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "path {}", path);
    }
    Ok(())
}

#[tokio::test]
async fn income_create_validates_before_touching_storage() -> Result<()> {
    // Lazy pool never connects: a 400 here proves validation runs first.
    let cookie = common::session_cookie();
    let app = common::test_app();
    let res = app
        .oneshot(common::post_json_with_cookie(
            "/api/income",
            &cookie,
            json!({ "title": "Salary" }),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(res).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field_errors"]["amount"], "This field is required");
    assert_eq!(body["field_errors"]["date"], "This field is required");
    assert_eq!(body["field_errors"]["category"], "This field is required");
    Ok(())
}

#[tokio::test]
async fn payable_create_requires_status_and_due_date() -> Result<()> {
    let cookie = common::session_cookie();
    let app = common::test_app();
    let res = app
        .oneshot(common::post_json_with_cookie(
            "/api/payables",
            &cookie,
            json!({ "title": "Rent", "amount": 1200 }),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(res).await;
    assert_eq!(body["field_errors"]["dueDate"], "This field is required");
    assert_eq!(body["field_errors"]["status"], "This field is required");
    Ok(())
}

#[tokio::test]
async fn zero_amount_is_rejected_as_missing() -> Result<()> {
    let cookie = common::session_cookie();
    let app = common::test_app();
    let res = app
        .oneshot(common::post_json_with_cookie(
            "/api/expenses",
            &cookie,
            json!({
                "title": "Groceries",
                "amount": 0,
                "date": "2024-06-03",
                "category": "food"
            }),
        ))
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(res).await;
    assert_eq!(body["field_errors"]["amount"], "This field is required");
    Ok(())
}
