//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the relay and status handlers
//! - Resolve the destination and build the shared downstream client
//! - Wire up middleware (request ID, tracing, body limit)
//! - Serve on a listener until shutdown is signalled

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::request::{make_span, MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use crate::http::status::{get_status, HEALTH_PATH};
use crate::relay::{relay_handler, Destination, Forwarder, RelayState};

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// A missing or unusable destination does not fail construction; the
    /// relay route then answers every POST with a configuration error.
    pub fn new(config: RelayConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Like [`HttpServer::new`], with a caller-supplied downstream client.
    pub fn with_client(config: RelayConfig, client: reqwest::Client) -> Self {
        let forwarder =
            resolve_destination(&config).map(|destination| Forwarder::new(client, destination));

        let state = RelayState {
            forwarder,
            encoding: config.relay.encoding,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: RelayState) -> Router {
        Router::new()
            .route(&config.listener.path, any(relay_handler))
            .with_state(state)
            .route(HEALTH_PATH, get(get_status))
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(make_span))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// The assembled router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path = %self.config.listener.path,
            encoding = ?self.config.relay.encoding,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

fn resolve_destination(config: &RelayConfig) -> Option<Destination> {
    let raw = match config.destination.url.as_deref() {
        Some(raw) => raw,
        None => {
            tracing::error!(
                env_var = %config.destination.url_env,
                "Destination URL is not set; submissions will fail"
            );
            return None;
        }
    };

    match Destination::parse(raw) {
        Ok(destination) => {
            tracing::info!(destination = %destination, "Destination resolved");
            Some(destination)
        }
        Err(e) => {
            tracing::error!(error = %e, "Destination URL is invalid; submissions will fail");
            None
        }
    }
}
