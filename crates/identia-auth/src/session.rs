//! Session store — login, registration, and logout orchestration.

use chrono::Utc;
use identia_core::models::account::{PlanTier, RegisterInput, Role, SessionRecord};
use identia_core::storage::KeyValueStore;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounts;
use crate::config::SessionConfig;

type Observer = Box<dyn Fn(Option<&SessionRecord>)>;

/// Single source of truth for "who is logged in".
///
/// Generic over the storage implementation so that the session layer
/// has no dependency on any specific storage medium. Holds at most one
/// [`SessionRecord`], mirrored to one persisted slot.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    config: SessionConfig,
    current: Option<SessionRecord>,
    observers: Vec<Observer>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Open the store, restoring any persisted session.
    ///
    /// A malformed or unreadable slot yields "no session" with a
    /// warning; persisted state must never fail startup.
    pub fn open(storage: S, config: SessionConfig) -> Self {
        let current = match storage.get(&config.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<SessionRecord>(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "discarding malformed persisted session");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read persisted session");
                None
            }
        };
        Self {
            storage,
            config,
            current,
            observers: Vec::new(),
        }
    }

    /// Authenticate with an email/password pair.
    ///
    /// A credential mismatch is a normal `false`, not an error; there
    /// is no lockout and no rate limiting. Success unconditionally
    /// overwrites any existing session.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        // 1. Exact match against the demo-account catalog.
        if let Some(account) = accounts::find(email, password) {
            self.commit(account.to_record());
            return true;
        }

        // 2. Fallback: any other non-empty pair gets a generic
        //    professional-plan account.
        if email.is_empty() || password.is_empty() {
            return false;
        }
        let record = SessionRecord {
            id: Uuid::new_v4().to_string(),
            username: local_part(email),
            email: email.to_owned(),
            name: self.config.fallback_name.clone(),
            role: Role::User,
            plan: self.config.fallback_plan,
            avatar: Some(self.config.default_avatar.clone()),
            company: None,
            title: None,
            domains: Vec::new(),
            email_accounts: Vec::new(),
            permissions: Vec::new(),
            created_at: Utc::now(),
        };
        self.commit(record);
        true
    }

    /// Create an account and sign it in. Requires non-empty email,
    /// password, and display name; otherwise returns `false` and
    /// leaves any existing session untouched.
    pub fn register(&mut self, input: RegisterInput) -> bool {
        if input.email.is_empty() || input.password.is_empty() || input.name.is_empty() {
            return false;
        }
        let record = SessionRecord {
            id: Uuid::new_v4().to_string(),
            username: local_part(&input.email),
            email: input.email,
            name: input.name,
            role: Role::User,
            plan: PlanTier::Basic,
            avatar: input
                .avatar
                .or_else(|| Some(self.config.default_avatar.clone())),
            company: input.company,
            title: input.title,
            domains: Vec::new(),
            email_accounts: Vec::new(),
            permissions: Vec::new(),
            created_at: Utc::now(),
        };
        self.commit(record);
        true
    }

    /// Clear the session from memory and the persisted slot.
    /// Idempotent; a logout with no active session changes nothing
    /// and notifies nobody.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.delete(&self.config.storage_key) {
            warn!(error = %e, "could not clear persisted session");
        }
        if self.current.take().is_some() {
            self.notify();
        }
    }

    pub fn current(&self) -> Option<&SessionRecord> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(SessionRecord::is_admin)
    }

    /// Register an observer invoked with the new session state after
    /// every committed change (login, register, logout).
    pub fn subscribe(&mut self, observer: impl Fn(Option<&SessionRecord>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the current session: memory first, then the slot.
    ///
    /// A slot write failure downgrades to a warning — the in-memory
    /// commit stands and the worst case is re-authentication on the
    /// next start.
    fn commit(&mut self, record: SessionRecord) {
        info!(user = %record.username, role = ?record.role, "session committed");
        match serde_json::to_string(&record) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(&self.config.storage_key, &raw) {
                    warn!(error = %e, "could not persist session");
                }
            }
            Err(e) => warn!(error = %e, "could not encode session"),
        }
        self.current = Some(record);
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(self.current.as_ref());
        }
    }
}

/// Local part of an email address (`juan` from `juan@juan.pro`).
fn local_part(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}

#[cfg(test)]
mod tests {
    use super::local_part;

    #[test]
    fn local_part_splits_on_the_first_at_sign() {
        assert_eq!(local_part("juan@juan.pro"), "juan");
        assert_eq!(local_part("a@b@c"), "a");
        assert_eq!(local_part("no-at-sign"), "no-at-sign");
    }
}
