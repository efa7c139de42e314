//! nspd-server: standalone REST server for the cadastral gateway.
//!
//! Reads config from flags or env vars (a `.env` file is honored):
//!   NSPD_LISTEN:       listen address (default: 0.0.0.0:8000)
//!   NSPD_BASE_URL:     registry base URL (default: https://nspd.gov.ru)
//!   NSPD_TIMEOUT_SECS: upstream deadline (default: 30)
//!   NSPD_INSECURE_TLS: skip certificate validation (default: false)
//!   NSPD_USE_MOCK:     serve fixture documents (default: false)

use anyhow::Context;
use clap::Parser;
use nspd_server::config::{SERVICE_TITLE, SERVICE_VERSION};
use nspd_server::{AppState, ServerConfig, build_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nspd=debug,tower_http=debug".into()),
        )
        .init();

    let cfg = ServerConfig::parse();
    let gateway = cfg.gateway().context("invalid gateway configuration")?;
    tracing::info!(
        connector = %gateway.connector_key(),
        upstream = %cfg.base_url,
        timeout_secs = cfg.timeout_secs,
        mock = cfg.use_mock,
        "gateway ready"
    );

    let app = build_router(AppState::new(gateway));

    let listener = TcpListener::bind(cfg.listen)
        .await
        .with_context(|| format!("failed to bind to {}", cfg.listen))?;
    tracing::info!("{SERVICE_TITLE} {SERVICE_VERSION} listening on {}", cfg.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
