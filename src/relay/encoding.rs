//! How the inbound body is passed on to the destination.

use axum::body::Bytes;
use serde::{Deserialize, Serialize};

use crate::relay::RelayError;

/// Content type used for raw passthrough.
pub const TEXT_PLAIN_UTF8: &str = "text/plain;charset=utf-8";
/// Content type used for re-encoded JSON.
pub const APPLICATION_JSON: &str = "application/json";

/// Forwarding mode for the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyEncoding {
    /// Forward the bytes untouched as `text/plain`.
    Raw,
    /// Parse as JSON and forward the compact re-serialisation.
    #[default]
    Json,
}

/// A body ready to be sent downstream.
#[derive(Debug, Clone)]
pub struct Payload {
    pub body: Bytes,
    pub content_type: &'static str,
}

impl BodyEncoding {
    pub fn content_type(self) -> &'static str {
        match self {
            BodyEncoding::Raw => TEXT_PLAIN_UTF8,
            BodyEncoding::Json => APPLICATION_JSON,
        }
    }

    /// Turn an inbound body into the outbound payload.
    ///
    /// Fails only in JSON mode, when the body does not parse.
    pub fn prepare(self, body: Bytes) -> Result<Payload, RelayError> {
        let body = match self {
            BodyEncoding::Raw => body,
            BodyEncoding::Json => {
                let value: serde_json::Value =
                    serde_json::from_slice(&body).map_err(RelayError::MalformedPayload)?;
                Bytes::from(serde_json::to_vec(&value).map_err(RelayError::MalformedPayload)?)
            }
        };

        Ok(Payload {
            body,
            content_type: self.content_type(),
        })
    }
}
