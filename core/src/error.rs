//! Error types for the call executor.
//!
//! # Design
//! The taxonomy is flat. Four variants describe failures before or during
//! dispatch, and `Status` covers a non-2xx response rejected under the
//! default policy. Variants that saw a response keep it so the caller can
//! still inspect the body.

use thiserror::Error;

use crate::http::HttpResponse;
use crate::status::StatusKind;

/// Errors returned by `CallExecutor::execute`.
#[derive(Debug, Error)]
pub enum CallError {
    /// Unsupported verb or otherwise malformed call parameters.
    #[error("request creation failed: {0}")]
    BuildFailed(String),

    /// The transport could not complete the round-trip.
    #[error("transport failure: {message}")]
    Transport {
        message: String,
        response: Option<HttpResponse>,
    },

    /// The transport reported no error but produced no response.
    #[error("response was empty")]
    EmptyResponse,

    /// An explicit expected status was supplied and not matched.
    #[error("expected status code ({expected}) does not match returned status code ({actual})")]
    StatusMismatch {
        expected: i64,
        actual: u16,
        response: HttpResponse,
    },

    /// A non-2xx response with no explicit expectation.
    #[error("{kind} (HTTP {status}): {}", .kind.description(), status = .response.status)]
    Status {
        kind: StatusKind,
        response: HttpResponse,
    },
}

impl CallError {
    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> String {
        match self {
            CallError::BuildFailed(_) => "ERR_BUILD_FAILED".to_string(),
            CallError::Transport { .. } => "ERR_TRANSPORT".to_string(),
            CallError::EmptyResponse => "ERR_EMPTY_RESPONSE".to_string(),
            CallError::StatusMismatch { .. } => "ERR_STATUS_MISMATCH".to_string(),
            CallError::Status { kind, .. } => kind.code(),
        }
    }

    /// The response that accompanied the failure, if any.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            CallError::Transport { response, .. } => response.as_ref(),
            CallError::StatusMismatch { response, .. } | CallError::Status { response, .. } => {
                Some(response)
            }
            CallError::BuildFailed(_) | CallError::EmptyResponse => None,
        }
    }
}
