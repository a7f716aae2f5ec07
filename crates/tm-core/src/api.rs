//! Backend call outcome.
//! 后端调用结果。
//!
//! Every backend call ends in exactly one of three shapes:
//!
//! - `Ok(T)`: the call succeeded
//! - `Err(ApiError::Known { .. })`: the backend answered with a structured error code
//! - `Err(ApiError::Unknown { .. })`: the failure could not be classified
//!   (network error, non-JSON error body, ...)

use thiserror::Error;

/// Result of a backend call.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Structured application error reported by the backend.
    #[error("backend error {code} (status {status})")]
    Known { status: u16, code: String },

    /// Unclassified transport failure. `status` is absent when no response arrived.
    #[error("unknown transport error (status {status:?}): {message}")]
    Unknown {
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    pub fn known(status: u16, code: impl Into<String>) -> Self {
        Self::Known {
            status,
            code: code.into(),
        }
    }

    pub fn unknown(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Unknown {
            status,
            message: message.into(),
        }
    }

    /// HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Known { status, .. } => Some(*status),
            Self::Unknown { status, .. } => *status,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}
