use anyhow::Context;

use fintrack_api::{config, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SESSION_SECRET, etc.
    let _ = dotenvy::dotenv();

    let config = config::config();

    // Signing-key misconfiguration is fatal here, never per-request.
    config
        .validate()
        .map_err(|msg| anyhow::anyhow!(msg))
        .context("invalid configuration")?;

    tracing_subscriber::fmt::init();
    tracing::info!("Starting fintrack-api in {:?} mode", config.environment);

    let pool = database::connect().await.context("database connection")?;
    database::migrate(&pool).await.context("database migration")?;

    let app = fintrack_api::app(pool);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("fintrack-api listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server")?;

    Ok(())
}
