use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum RdpError {
    /// A required argument was absent or empty. Raised before any network
    /// call is attempted.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The token endpoint returned a non-success HTTP status.
    #[error("authentication failure: {status} {reason}")]
    Authentication {
        /// The HTTP status code.
        status: u16,
        /// The HTTP reason phrase (e.g. "Unauthorized").
        reason: String,
        /// The raw response body, usually a JSON error envelope.
        body: String,
    },

    /// A data endpoint returned a non-success HTTP status.
    ///
    /// Callers should branch on [`status`](RdpError::status): 401 means the
    /// access token expired (refresh or re-login), 400 means the request
    /// itself was malformed and is not retryable as-is.
    #[error("request failure: {status} {reason}")]
    Request {
        /// The HTTP status code.
        status: u16,
        /// The HTTP reason phrase.
        reason: String,
        /// The raw response body.
        body: String,
    },

    /// The transport failed before any HTTP response was obtained
    /// (DNS, connection refused, timeout, interrupted body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be parsed as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Table conversion received a null or empty payload.
    #[error("received invalid (null or empty) input")]
    InvalidInput,

    /// A structurally successful response could not be interpreted as the
    /// expected tabular shape. This is how an HTTP-200 error envelope from
    /// the ESG service ultimately surfaces.
    #[error("cannot convert payload to a table: {0}")]
    Conversion(String),
}

impl RdpError {
    /// The HTTP status code carried by [`Authentication`](Self::Authentication)
    /// and [`Request`](Self::Request) errors, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when this error is an HTTP 401, i.e. the access token expired.
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        self.status() == Some(401)
    }
}
