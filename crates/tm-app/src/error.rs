use thiserror::Error;
use tm_core::{ApiError, DecodeError};

/// Localization key shown for every pipeline failure.
pub const FAILED_TO_LOAD_SNAPSHOT: &str = "error-failed-to-load-snapshot";

/// Failure of one navigation pipeline run.
/// 一次导航流水线运行的失败。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("snapshot metadata unavailable: {0}")]
    MetadataUnavailable(#[source] ApiError),

    #[error("snapshot content unavailable: {0}")]
    ContentUnavailable(#[source] ApiError),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] DecodeError),
}

impl NavigationError {
    /// Stable message key for the notifier. All failures share one key.
    pub fn message_key(&self) -> &'static str {
        FAILED_TO_LOAD_SNAPSHOT
    }

    /// True when the underlying transport failure could not be classified.
    pub fn is_unknown_transport(&self) -> bool {
        match self {
            Self::MetadataUnavailable(err) | Self::ContentUnavailable(err) => err.is_unknown(),
            Self::Decode(_) => false,
        }
    }
}
