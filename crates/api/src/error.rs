use thiserror::Error;

/// Errors surfaced by the Dashboard API client.
///
/// Callers in the MCP layer treat every variant as an opaque, displayable
/// failure; the variants exist for logging and for tests.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection refused, DNS failure, timeout, etc.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API key could not be encoded as a header value.
    #[error("Invalid API key header value: {0}")]
    InvalidHeader(String),

    /// The Dashboard rejected the API key (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    /// HTTP 429. Includes the server's retry-after hint in seconds.
    #[error("Rate limited -- retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Any other non-success status.
    #[error("Meraki API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status associated with this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::InvalidApiKey => Some(401),
            Error::RateLimited { .. } => Some(429),
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the upstream reported that the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
