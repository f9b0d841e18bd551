//! Fixed demo-account seed consulted by the login flow.
//!
//! Read-only at runtime. Credentials are plaintext by design: these
//! are published demo accounts, not real users.

use chrono::Utc;
use identia_core::models::account::{PlanTier, Role, SessionRecord};

#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub name: &'static str,
    pub username: &'static str,
    pub plan: PlanTier,
    pub avatar: &'static str,
    pub company: Option<&'static str>,
    pub title: Option<&'static str>,
    pub domains: &'static [&'static str],
    pub email_accounts: &'static [&'static str],
    pub permissions: &'static [&'static str],
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: "admin-001",
        email: "admin@miidentidad.com",
        password: "admin123",
        role: Role::Admin,
        name: "Administrador Sistema",
        username: "admin",
        plan: PlanTier::Enterprise,
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
        company: None,
        title: None,
        domains: &[],
        email_accounts: &[],
        permissions: &[
            "manage_users",
            "view_analytics",
            "system_settings",
            "billing_management",
        ],
    },
    DemoAccount {
        id: "user-001",
        email: "juan.perez@juan.pro",
        password: "demo123",
        role: Role::User,
        name: "Juan Pérez",
        username: "juanperez",
        plan: PlanTier::Professional,
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
        company: Some("Tech Solutions"),
        title: Some("Desarrollador Full Stack"),
        domains: &["juan.pro", "juanperez.me"],
        email_accounts: &["juan@juan.pro", "contact@juan.pro", "dev@juanperez.me"],
        permissions: &[],
    },
    DemoAccount {
        id: "user-002",
        email: "maria.garcia@maria.dev",
        password: "demo123",
        role: Role::User,
        name: "María García",
        username: "mariagarcia",
        plan: PlanTier::Basic,
        avatar: "/images/UXUIDesigner.jpg",
        company: Some("Design Studio"),
        title: Some("UX/UI Designer"),
        domains: &["maria.dev"],
        email_accounts: &["maria@maria.dev"],
        permissions: &[],
    },
];

/// Look up a demo account by exact (email, password) pair.
pub fn find(email: &str, password: &str) -> Option<&'static DemoAccount> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.email == email && account.password == password)
}

impl DemoAccount {
    /// Materialize a session record from this seed entry.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            id: self.id.to_owned(),
            email: self.email.to_owned(),
            username: self.username.to_owned(),
            name: self.name.to_owned(),
            role: self.role,
            plan: self.plan,
            avatar: Some(self.avatar.to_owned()),
            company: self.company.map(str::to_owned),
            title: self.title.map(str::to_owned),
            domains: self.domains.iter().map(|d| d.to_string()).collect(),
            email_accounts: self.email_accounts.iter().map(|a| a.to_string()).collect(),
            permissions: self.permissions.iter().map(|p| p.to_string()).collect(),
            created_at: Utc::now(),
        }
    }
}
