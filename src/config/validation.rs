//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require a usable destination URL
//! - Validate the bind address, route path and body limit
//! - Route path must be a literal axum path (no captures, no wildcards)
//! - Keep the relay route off the status endpoint
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::http::status::HEALTH_PATH;
use crate::relay::Destination;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("destination URL is not configured (set {env_var})")]
    MissingDestination { env_var: String },

    #[error("destination URL is invalid: {0}")]
    InvalidDestination(String),

    #[error("bind address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("route path {0:?} must start with '/' and contain no route captures or wildcards")]
    InvalidPath(String),

    #[error("route path {0:?} is reserved")]
    ReservedPath(String),

    #[error("max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check the configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.destination.url.as_deref() {
        None => errors.push(ValidationError::MissingDestination {
            env_var: config.destination.url_env.clone(),
        }),
        Some(raw) => {
            if let Err(e) = Destination::parse(raw) {
                errors.push(ValidationError::InvalidDestination(e.to_string()));
            }
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let path = &config.listener.path;
    if !path.starts_with('/') || path.contains(['{', '}', '*']) {
        errors.push(ValidationError::InvalidPath(config.listener.path.clone()));
    } else if config.listener.path == HEALTH_PATH {
        errors.push(ValidationError::ReservedPath(config.listener.path.clone()));
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
