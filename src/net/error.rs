//! Client-side error taxonomy for remote operations.
//!
//! DESIGN
//! ======
//! Every remote call resolves to exactly one of four terminal outcomes.
//! Validation failures never reach the network; authentication failures are
//! always routed back to the login entry point; API and transport failures
//! are converted to user-visible notices at the controller boundary. No
//! operation is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Fallback notice when the server response carries no usable message.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Terminal outcome of a failed remote operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// No session, a stale session, or a server-side auth rejection.
    /// Callers abandon the operation and return to the login entry point.
    Unauthenticated,
    /// Rejected locally before any network traffic.
    Validation(String),
    /// Well-formed non-2xx response with a server-provided (or fallback)
    /// message.
    Api { status: u16, message: String },
    /// Network or parse failure; the raw cause is logged, the user sees a
    /// generic notice.
    Transport(String),
}

impl ApiError {
    /// The user-facing message for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "Your session has expired. Please log in again.".to_owned(),
            ApiError::Validation(message) | ApiError::Api { message, .. } => message.clone(),
            ApiError::Transport(_) => GENERIC_FAILURE.to_owned(),
        }
    }

    /// HTTP status for API failures, `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthenticated => write!(f, "unauthenticated"),
            ApiError::Validation(message) => write!(f, "validation: {message}"),
            ApiError::Api { status, message } => write!(f, "api {status}: {message}"),
            ApiError::Transport(cause) => write!(f, "transport: {cause}"),
        }
    }
}

/// Extract the server's `message` field from a response body, falling back to
/// the generic notice when absent or unparseable.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_owned())
}

/// Map a non-2xx status plus body to the appropriate error.
///
/// Server-side auth rejections are treated the same as local expiry rather
/// than as generic API failures: the client-computed expiry is advisory only.
#[must_use]
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    if status == 401 || status == 403 {
        return ApiError::Unauthenticated;
    }
    ApiError::Api {
        status,
        message: error_message(body),
    }
}
