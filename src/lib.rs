//! Form submission relay.
//!
//! Accepts form submissions over HTTP POST and forwards them to a
//! destination URL (typically a Google Apps Script web app) that is kept
//! server-side, then relays the destination's JSON reply.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser                 ┌────────────────────────────────────────┐
//!   POST /contact ─────────▶│ http (request id, trace, body limit)   │
//!                           │        │                               │
//!                           │        ▼                               │
//!                           │ relay::handler ──▶ relay::encoding     │
//!                           │        │                               │
//!                           │        ▼                               │
//!   200 + reply  ◀──────────│ relay::forwarder ─────────────────────┼──▶ Destination
//!   500 + error             │                                        │
//!                           │  config · observability · lifecycle    │
//!                           └────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{BodyEncoding, RelayError};
