//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! relay / http subsystems produce:
//!     → tracing events (structured fields: kind, status, destination host)
//!     → request spans (method, path, request ID) from the http layer
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every event of a request via its span
//! - Destination URLs are logged redacted (scheme + host)

pub mod logging;

pub use logging::init_logging;
