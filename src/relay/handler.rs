//! The relay endpoint.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::relay::{BodyEncoding, ErrorKind, Forwarder, RelayError};

/// Per-server relay state. Cloned into every request; holds no mutable data.
#[derive(Debug, Clone)]
pub struct RelayState {
    /// `None` when the server was assembled without a destination.
    pub forwarder: Option<Forwarder>,
    pub encoding: BodyEncoding,
}

/// Handle one submission.
///
/// Routed for every method so that non-POST requests get the relay's
/// JSON error shape rather than axum's default 405. The body is only
/// buffered once the method has been accepted.
pub async fn relay_handler(
    State(state): State<RelayState>,
    method: Method,
    request: Request,
) -> Response {
    match relay(&state, &method, request).await {
        Ok(reply) => {
            tracing::info!(
                encoding = ?state.encoding,
                "Submission forwarded to destination"
            );
            (StatusCode::OK, Json(reply)).into_response()
        }
        Err(err) => {
            match err.kind() {
                ErrorKind::MethodNotAllowed => tracing::warn!(
                    kind = err.kind().as_str(),
                    method = %method,
                    "Rejected request"
                ),
                kind => tracing::error!(
                    kind = kind.as_str(),
                    error = %err,
                    source = ?std::error::Error::source(&err),
                    "Relay failed"
                ),
            }
            err.into_response()
        }
    }
}

async fn relay(state: &RelayState, method: &Method, request: Request) -> Result<Value, RelayError> {
    if *method != Method::POST {
        return Err(RelayError::MethodNotAllowed(method.clone()));
    }

    let body = Bytes::from_request(request, &())
        .await
        .map_err(RelayError::UnreadableBody)?;

    let forwarder = state
        .forwarder
        .as_ref()
        .ok_or(RelayError::ConfigurationMissing)?;

    let payload = state.encoding.prepare(body)?;

    tracing::debug!(
        destination = %forwarder.destination(),
        content_type = payload.content_type,
        bytes = payload.body.len(),
        "Forwarding submission"
    );

    forwarder.forward(payload).await
}
