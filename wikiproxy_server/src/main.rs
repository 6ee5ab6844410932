use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use wikiproxy_lib::{Client, HtmdConverter, RetryConfig};
use wikiproxy_server::config::log_filter;
use wikiproxy_server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_target(false)
        .init();

    let config = ServerConfig::parse();
    let retry = RetryConfig::from_env();

    let client = Client::from_config(config.client_config())
        .with_context(|| format!("failed to build client for {}", config.api_url))?;
    let state = AppState::new(
        client,
        retry.clone(),
        Arc::new(HtmdConverter::default()),
        config.pipeline_options(),
    );
    let app = router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        "server listening on {} (upstream {}, timeout {}s, retries {})",
        listener.local_addr()?,
        config.api_url,
        config.timeout_secs,
        retry.max_retries
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
