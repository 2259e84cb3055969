//! Classification of HTTP status codes into a fixed error-kind taxonomy.
//!
//! Downstream pipeline steps key off the `StatusKind` code strings, so the
//! table below must stay stable. Every `u16` maps to exactly one kind.

use strum::{Display, EnumIter, EnumString};

/// Error kind derived from an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    InvalidArgument,
    Unauthenticated,
    PermissionDenied,
    NotFound,
    Aborted,
    OutOfRange,
    ResourceExhausted,
    Canceled,
    Unimplemented,
    Unavailable,
    DeadlineExceeded,
    FailedPrecondition,
    Internal,
    Unknown,
}

impl StatusKind {
    /// Map a status code to its kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidArgument,
            401 => Self::Unauthenticated,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::Aborted,
            416 => Self::OutOfRange,
            429 => Self::ResourceExhausted,
            499 => Self::Canceled,
            501 => Self::Unimplemented,
            503 => Self::Unavailable,
            504 => Self::DeadlineExceeded,
            400..=499 => Self::FailedPrecondition,
            500..=599 => Self::Internal,
            _ => Self::Unknown,
        }
    }

    /// Stable machine-readable code, e.g. `NOT_FOUND`.
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Human-readable explanation of the kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "the client provided an invalid argument",
            Self::Unauthenticated => "the request does not have valid authentication credentials",
            Self::PermissionDenied => {
                "the caller does not have permission to perform the operation"
            }
            Self::NotFound => "the requested entity or resource was not found",
            Self::Aborted => "the operation was aborted, typically due to a concurrency issue",
            Self::OutOfRange => "the operation was attempted past the valid range",
            Self::ResourceExhausted => "the resource limits have been exceeded",
            Self::Canceled => "the operation was cancelled, usually by the client",
            Self::Unimplemented => "the requested operation is not implemented or not supported",
            Self::Unavailable => "the service is currently unavailable",
            Self::DeadlineExceeded => "the deadline for the operation has expired",
            Self::FailedPrecondition => {
                "the operation was rejected due to the current state of the resource"
            }
            Self::Internal => "an external server error occurred",
            Self::Unknown => "the error is unknown or unspecified",
        }
    }
}
