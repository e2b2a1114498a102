use thiserror::Error;

/// Top-level error type for the `sunco-api` crate.
///
/// HTTP status codes are never turned into errors: a 4xx/5xx response is
/// handled like any other as long as its body decodes. Callers must not treat
/// `Ok(())` from an update or delete as proof the server applied the change.
#[derive(Debug, Error)]
pub enum Error {
    // ── Request construction ────────────────────────────────────────
    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The templated endpoint URL did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An app or integration id would be dropped from the path by URL
    /// normalization (a `.` or `..` segment, plain or percent-encoded).
    #[error("'{value}' cannot be used as a URL path segment")]
    InvalidPathSegment { value: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but its body could not be read to the end.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the request never produced a response
    /// (bad URL, connection failure, DNS, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::InvalidPathSegment { .. } | Self::Transport(_)
        )
    }

    /// Returns `true` for connect and timeout failures.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// The raw response body, when decoding failed.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Deserialization { body, .. } => Some(body),
            _ => None,
        }
    }
}
