//! Domain models for Identia.
//!
//! These are the core types shared across all crates.

pub mod account;
pub mod card;
