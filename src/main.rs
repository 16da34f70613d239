mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod redis_store;
mod routes;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use redis_store::RedisNoteStore;
use state::AppState;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("redis-notes starting");

    let config = Config::from_env()?;
    config.log_startup();

    // No store, no service.
    let store = RedisNoteStore::connect(&config).await.map_err(|e| {
        tracing::error!("Error connecting to Redis at {}: {:#}", config.redis_host, e);
        e
    })?;

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let addr = state.config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app::build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("redis-notes stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("ctrl+c signal received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
