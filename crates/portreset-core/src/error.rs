// ── Reset errors ──
//
// Operator-facing errors from the reset flow. Each variant names the
// controller step that failed; `Display` renders the exact message the
// HTTP caller sees. The api-level kind decides the suffix: transport
// failures echo the underlying error, upstream non-2xx responses echo
// the status line and body, schema failures echo the decode error.

use portreset_api::Error as ApiError;
use thiserror::Error;

/// Why a reset request failed.
#[derive(Debug, Error)]
pub enum ResetError {
    #[error("Error logging in to UniFi server{}", step_detail(.0))]
    Login(#[source] ApiError),

    #[error("Error getting list of available sites from UniFi server{}", step_detail(.0))]
    Sites(#[source] ApiError),

    #[error("Error getting list of clients from UniFi server{}", step_detail(.0))]
    Clients(#[source] ApiError),

    #[error("Error requesting reset of switch port{}", step_detail(.0))]
    Command(#[source] ApiError),

    /// No wired client on any site matched the requested MAC.
    #[error("No devices found on UniFi server with mac address {mac}")]
    NoMatch { mac: String },
}

/// Render the step-message suffix for an api-level failure.
fn step_detail(err: &ApiError) -> String {
    match err {
        ApiError::Status { status, body } => {
            format!(", returned status code: {status}. Returned message: {body}")
        }
        ApiError::Schema { message, .. } => format!(" - processing JSON: {message}"),
        other => format!(": {other}"),
    }
}

impl ResetError {
    /// `true` when the MAC simply wasn't found (no upstream fault).
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }
}
