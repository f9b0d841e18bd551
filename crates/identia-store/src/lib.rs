//! Identia Store — concrete [`KeyValueStore`] implementations.
//!
//! This crate provides:
//! - An in-memory store ([`MemoryStore`]) for tests and ephemeral runs
//! - A JSON-file-backed store ([`FileStore`]) standing in for the
//!   local-storage slot of the hosted product
//! - Error types ([`StoreError`])
//!
//! [`KeyValueStore`]: identia_core::storage::KeyValueStore

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
