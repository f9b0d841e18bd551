//! Identia Core — domain models shared across all crates, the core
//! error type, and the key-value persistence abstraction.

pub mod error;
pub mod models;
pub mod storage;
