pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod session;

use axum::{
    extract::Extension,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full application router.
///
/// The page guard wraps everything but excludes `/api` and static paths
/// itself; API handlers re-check the session independently via the
/// [`middleware::SessionUser`] extractor.
pub fn app(pool: PgPool) -> Router {
    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes())
        .layer(axum_middleware::from_fn(middleware::guard::page_guard))
        .layer(Extension(pool))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn page_routes() -> Router {
    use handlers::pages;

    Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        .route("/income", get(pages::income))
        .route("/expenses", get(pages::expenses))
        .route("/payables", get(pages::payables))
        .route("/receivables", get(pages::receivables))
}

fn api_routes() -> Router {
    use handlers::{auth, dashboard, expenses, income, payables, receivables};

    Router::new()
        // Session management
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/session", get(auth::session))
        .route("/auth/register", post(auth::register))
        // Aggregated view
        .route("/dashboard", get(dashboard::get))
        // Per-resource create/list
        .route("/income", get(income::list).post(income::create))
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route("/payables", get(payables::list).post(payables::create))
        .route("/receivables", get(receivables::list).post(receivables::create))
}
