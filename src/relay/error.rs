//! Error types for the relay.

use axum::{
    extract::rejection::BytesRejection,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error response body: `{"status":"error","message":...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Coarse failure category, used as a log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MethodNotAllowed,
    ConfigurationMissing,
    ForwardingFailure,
    UnexpectedFailure,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MethodNotAllowed => "method_not_allowed",
            ErrorKind::ConfigurationMissing => "configuration_missing",
            ErrorKind::ForwardingFailure => "forwarding_failure",
            ErrorKind::UnexpectedFailure => "unexpected_failure",
        }
    }
}

/// Everything that can go wrong while relaying one submission.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Anything but POST.
    #[error("Only POST requests are allowed.")]
    MethodNotAllowed(Method),

    /// No destination URL was available.
    #[error("Server configuration error: destination URL is not configured.")]
    ConfigurationMissing,

    /// The destination answered with a non-2xx status.
    #[error("Destination returned an error: {}", status_text(.status))]
    ForwardingFailure { status: StatusCode },

    /// The inbound body could not be read (over the size limit, aborted).
    #[error("{}", .0.body_text())]
    UnreadableBody(BytesRejection),

    /// The inbound body is not valid JSON (JSON mode only).
    #[error("Server error: invalid JSON payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// The destination could not be reached.
    #[error("Server error: failed to reach destination")]
    Transport(#[source] reqwest::Error),

    /// The destination answered 2xx with a body that is not JSON.
    #[error("Server error: destination reply is not valid JSON")]
    MalformedReply(#[source] reqwest::Error),
}

fn status_text(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => status.as_u16().to_string(),
    }
}

impl RelayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::MethodNotAllowed(_) => ErrorKind::MethodNotAllowed,
            RelayError::ConfigurationMissing => ErrorKind::ConfigurationMissing,
            RelayError::ForwardingFailure { .. } => ErrorKind::ForwardingFailure,
            RelayError::UnreadableBody(_)
            | RelayError::MalformedPayload(_)
            | RelayError::Transport(_)
            | RelayError::MalformedReply(_) => ErrorKind::UnexpectedFailure,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::UnreadableBody(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(ErrorBody::new(self.to_string()))).into_response();

        if let RelayError::MethodNotAllowed(_) = self {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let response = RelayError::MethodNotAllowed(Method::GET).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Only POST requests are allowed.");
    }

    #[tokio::test]
    async fn test_forwarding_failure_carries_status_text() {
        let err = RelayError::ForwardingFailure {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.kind(), ErrorKind::ForwardingFailure);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Destination returned an error: Service Unavailable");
        assert_eq!(body.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_status_falls_back_to_code() {
        let err = RelayError::ForwardingFailure {
            status: StatusCode::from_u16(599).unwrap(),
        };
        assert!(err.to_string().ends_with("599"));
    }

    #[test]
    fn test_kinds() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RelayError::MalformedPayload(parse_err);
        assert_eq!(err.kind(), ErrorKind::UnexpectedFailure);
        assert_eq!(err.kind().as_str(), "unexpected_failure");
        assert!(err.to_string().starts_with("Server error: invalid JSON payload"));

        assert_eq!(RelayError::ConfigurationMissing.kind(), ErrorKind::ConfigurationMissing);
        assert_eq!(
            RelayError::ConfigurationMissing.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
