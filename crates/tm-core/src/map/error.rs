use thiserror::Error;

/// Raised when a content blob is not a valid snapshot container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid snapshot container: {0}")]
    InvalidContainer(String),

    #[error("unsupported snapshot container version {0}")]
    UnsupportedVersion(u32),

    #[error("malformed tile ({x}, {y}): expected {expected} bytes, got {actual}")]
    MalformedTile {
        x: u16,
        y: u16,
        expected: usize,
        actual: usize,
    },
}
