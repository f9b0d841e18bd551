//! Store-specific error types and conversions.

use identia_core::error::IdentiaError;

/// Storage-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<StoreError> for IdentiaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Encode(e) => IdentiaError::Serialization(e.to_string()),
            other => IdentiaError::Storage(other.to_string()),
        }
    }
}
