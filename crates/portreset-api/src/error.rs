use thiserror::Error;

/// Top-level error type for the `portreset-api` crate.
///
/// Each variant is a distinct failure kind; the caller decides which
/// controller step it came from. Non-2xx responses keep the raw body so
/// operators see what the controller actually said.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Controller returned a non-2xx status.
    #[error("controller returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body was not valid JSON or missed expected fields.
    #[error("Deserialization error: {message}")]
    Schema { message: String, body: String },
}

impl Error {
    /// Returns `true` for failures reaching the controller at all,
    /// as opposed to the controller answering with an error.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The upstream HTTP status, when the controller did respond.
    pub fn upstream_status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
