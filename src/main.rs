//! Yatra API server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use yatra_api::api::{create_app, AppState};
use yatra_api::banner;
use yatra_api::config::{AppConfig, LogFormat};
use yatra_api::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    // Connect before binding: a failed connection must never leave a
    // half-started process holding the port.
    let database = db::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    let state = AppState::new(database.map(Arc::new));
    let database_status = state.database_status();
    let app = create_app(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    println!("{}", banner::render(config.server.port, database_status));
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("yatra_api=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
