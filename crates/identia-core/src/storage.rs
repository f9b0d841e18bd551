//! Key-value persistence abstraction.
//!
//! The session slot is the only thing persisted in this system, so the
//! storage seam is a minimal string-keyed store. Implementations live
//! in `identia-store` so that the core and service crates carry no
//! dependency on any specific storage medium.

use crate::error::IdentiaResult;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> IdentiaResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> IdentiaResult<()>;
    fn delete(&mut self, key: &str) -> IdentiaResult<()>;
}
