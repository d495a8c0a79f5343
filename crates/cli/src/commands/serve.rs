use anyhow::{Context, Result};
use outliner_auth::{HostedAuthClient, SessionCookie};
use outliner_http::{AppState, create_router};
use outliner_llm::LlmClient;
use outliner_service::OutlineService;
use outliner_storage::StorageBackend;
use std::sync::Arc;

use crate::config::{Config, StorageKind};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let storage = match config.storage {
        StorageKind::Hosted => StorageBackend::new_hosted(&config.data_url, config.data_key.clone())?,
        StorageKind::Postgres => {
            let url = config.database_url.as_deref().context("DATABASE_URL must be set")?;
            StorageBackend::new_postgres(url).await?
        },
        StorageKind::Memory => StorageBackend::new_memory(),
    };
    tracing::info!(backend = storage.kind(), "storage ready");

    let llm = LlmClient::with_timeout(
        config.llm_api_key.clone(),
        config.llm_base_url.clone(),
        config.llm_timeout_secs,
    )?
    .with_model(config.llm_model.clone());
    tracing::info!(model = llm.model(), base_url = llm.base_url(), "text generation client ready");

    let auth = HostedAuthClient::new(&config.data_url, config.data_key.clone())?;

    let state = Arc::new(AppState {
        outlines: Arc::new(OutlineService::new(Arc::new(storage), Arc::new(llm))),
        auth: Arc::new(auth),
        cookie: SessionCookie::new(config.session_cookie.clone(), config.secure_cookie),
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
