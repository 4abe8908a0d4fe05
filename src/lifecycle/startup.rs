//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging
//! - Bind the listener and serve until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: a missing destination is a startup error, not a per-request 500
//! - Listener binds last (traffic only when ready)

use std::path::PathBuf;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::init_logging;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config_path: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

/// Errors that abort startup or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the relay and block until it has shut down.
pub async fn run(options: StartupOptions) -> Result<(), StartupError> {
    let mut config = load_config(options.config_path.as_deref())?;
    if let Some(address) = options.bind_address {
        config.listener.bind_address = address;
    }
    if let Some(level) = options.log_level {
        config.observability.log_level = level;
    }

    init_logging(&config.observability.log_level)?;

    tracing::info!("form-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        path = %config.listener.path,
        encoding = ?config.relay.encoding,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await.map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
