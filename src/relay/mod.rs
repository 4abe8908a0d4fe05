//! Form submission relay.
//!
//! # Data Flow
//! ```text
//! POST {path}
//!     → handler.rs (method check, destination lookup)
//!     → encoding.rs (raw passthrough or JSON re-encode)
//!     → forwarder.rs (POST to destination, await reply)
//!     → 200 + destination JSON
//!
//! Any failure:
//!     → error.rs (RelayError → 405/500 + {"status":"error","message"})
//! ```
//!
//! # Design Decisions
//! - One handler for both encodings, selected by config
//! - Failures are tagged variants; the caller sees a uniform body
//! - Destination URL never appears in responses or in full in logs

pub mod destination;
pub mod encoding;
pub mod error;
pub mod forwarder;
pub mod handler;

pub use destination::{Destination, DestinationError};
pub use encoding::{BodyEncoding, Payload};
pub use error::{ErrorBody, ErrorKind, RelayError};
pub use forwarder::Forwarder;
pub use handler::{relay_handler, RelayState};
