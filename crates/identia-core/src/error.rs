//! Error types for the Identia system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentiaError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type IdentiaResult<T> = Result<T, IdentiaError>;
