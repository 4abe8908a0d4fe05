//! Outbound call to the destination.
//!
//! # Responsibilities
//! - POST the prepared payload with its content type
//! - Map a non-2xx status to a forwarding failure, logging the reply body
//! - Decode a 2xx reply as JSON
//!
//! # Design Decisions
//! - One shared `reqwest::Client` (connection pooling across requests)
//! - No timeout and no retries on the downstream call
//! - Redirects are followed, Apps Script answers POSTs with a 302

use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use crate::relay::{Destination, Payload, RelayError};

/// Sends payloads to a single destination.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    destination: Destination,
}

impl Forwarder {
    pub fn new(client: reqwest::Client, destination: Destination) -> Self {
        Self {
            client,
            destination,
        }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Forward one payload and return the destination's JSON reply.
    pub async fn forward(&self, payload: Payload) -> Result<Value, RelayError> {
        let response = self
            .client
            .post(self.destination.as_url().clone())
            .header(CONTENT_TYPE, payload.content_type)
            .body(payload.body)
            .send()
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                destination = %self.destination,
                status = status.as_u16(),
                body = %detail,
                "Destination returned an error"
            );
            return Err(RelayError::ForwardingFailure { status });
        }

        response.json::<Value>().await.map_err(RelayError::MalformedReply)
    }
}
