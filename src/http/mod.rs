//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, tracing span)
//!     → relay handler / status handler
//!     → Send to client
//! ```

pub mod request;
pub mod server;
pub mod status;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
