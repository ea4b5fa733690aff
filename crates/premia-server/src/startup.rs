//! Process bootstrap: model load, listener bind, serve loop.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use premia_core::config::{PremiaConfig, ServerConfig};
use premia_core::errors::error_code::{self, PremiaErrorCode};
use premia_core::errors::{ConfigError, ModelLoadError};
use premia_model::load_model;
use premia_observability::events;
use premia_prediction::InMemoryPredictionStore;

use crate::router::build_router;
use crate::state::AppState;

/// Failures that stop the process before it serves a request.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ModelLoad(#[from] ModelLoadError),

    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },
}

impl PremiaErrorCode for StartupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::ModelLoad(e) => e.error_code(),
            Self::Bind { .. } => error_code::BIND_ERROR,
        }
    }
}

/// Load the model and build handler state around an empty store.
pub fn load_state(config: &PremiaConfig) -> Result<AppState, StartupError> {
    let path = config.model.path.display().to_string();
    let model = load_model(&config.model.path).inspect_err(|e| {
        events::model_load_failed(&path, e.error_code(), &e.diagnostic());
    })?;
    events::model_loaded(&path, model.kind());

    Ok(AppState::new(model, Arc::new(InMemoryPredictionStore::new())))
}

/// Bind the configured listener.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, StartupError> {
    let addr = config.bind_address();
    TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| StartupError::Bind {
            addr,
            message: e.to_string(),
        })
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState, cors: bool) -> anyhow::Result<()> {
    let addr = listener
        .local_addr()
        .context("reading listener address")?;
    events::server_listening(&addr.to_string(), cors);

    axum::serve(listener, build_router(state, cors))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!(event = "shutdown", "shutting down");
}
