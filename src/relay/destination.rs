//! The secret downstream address.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Why a destination URL was refused.
#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("{0}")]
    Parse(#[from] url::ParseError),

    #[error("unsupported scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// An absolute http(s) URL that submissions are forwarded to.
///
/// `Debug` and `Display` only show scheme and host; the full URL is
/// reachable through [`Destination::as_url`] and nowhere else.
#[derive(Clone, PartialEq, Eq)]
pub struct Destination(Url);

impl Destination {
    pub fn parse(raw: &str) -> Result<Self, DestinationError> {
        let url = Url::parse(raw.trim())?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(DestinationError::UnsupportedScheme(other.to_string())),
        }
        if url.host_str().is_none() {
            return Err(DestinationError::MissingHost);
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/…", self.0.scheme(), self.host())
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Destination").field(&self.to_string()).finish()
    }
}
