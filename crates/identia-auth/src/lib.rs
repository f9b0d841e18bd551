//! Identia Auth — session lifecycle: login, registration, logout,
//! and the single persisted session slot.

pub mod accounts;
pub mod config;
pub mod session;

pub use accounts::DemoAccount;
pub use config::SessionConfig;
pub use session::SessionStore;
