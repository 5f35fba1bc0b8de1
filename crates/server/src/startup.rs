use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Load config from `config.toml` when present, otherwise from env vars.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}:{}: {e}", server.host, server.port)))
}

/// Build the app from `cfg`: storage location, connection pool, schema, router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    common::env::ensure_db_dir(&cfg.database.url)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    Ok(routes::build_router(ServerState::new(db)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = load_config()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting cafe catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
