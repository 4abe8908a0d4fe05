//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use form_relay::config::RelayConfig;
use form_relay::http::HttpServer;
use form_relay::relay::BodyEncoding;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Path the fake destination serves, mimicking an Apps Script deployment.
pub const SCRIPT_PATH: &str = "/macros/s/test-deployment/exec";

/// A relay config pointing at `destination` (or at nothing).
pub fn relay_config(destination: Option<String>, encoding: BodyEncoding) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.destination.url = destination;
    config.relay.encoding = encoding;
    config
}

/// The relay router for a config, ready for `oneshot`.
pub fn relay_app(config: RelayConfig) -> Router {
    relay_server(config).router()
}

/// A relay server whose downstream client ignores proxy settings.
pub fn relay_server(config: RelayConfig) -> HttpServer {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpServer::with_client(config, client)
}

/// Response captured from the relay.
pub struct Captured {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Captured {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("relay body is JSON")
    }
}

/// Drive one request through the router.
pub async fn call(app: Router, method: Method, path: &str, body: impl Into<Body>) -> Captured {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    Captured {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// POST to the default relay route.
pub async fn submit(app: Router, body: impl Into<Body>) -> Captured {
    call(app, Method::POST, "/contact", body).await
}

/// A URL on localhost where nothing is listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, SCRIPT_PATH)
}

/// Formatted log output captured for the current thread.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

struct LogWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing events into a buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let sink = buffer.0.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || LogWriter(sink.clone()))
        .finish();

    (buffer, tracing::subscriber::set_default(subscriber))
}
