//! Account and session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Basic,
    Professional,
    Enterprise,
}

/// The currently authenticated user, if any.
///
/// At most one record exists at a time; it is the sole source of
/// "is a user authenticated". Mirrored to a single persisted slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub email: String,
    pub username: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    pub plan: PlanTier,
    pub avatar: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    /// Domain names owned by this account.
    #[serde(default)]
    pub domains: Vec<String>,
    /// Mailbox addresses provisioned for this account.
    #[serde(default)]
    pub email_accounts: Vec<String>,
    /// Meaningful only when `role` is [`Role::Admin`].
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Input for the registration flow. `email`, `password`, and `name`
/// are required; the rest is copied onto the record when present.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub avatar: Option<String>,
}
