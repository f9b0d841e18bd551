//! Session store configuration.

use identia_core::models::account::PlanTier;

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Key of the persisted session slot.
    pub storage_key: String,
    /// Plan granted to logins that miss the demo catalog.
    pub fallback_plan: PlanTier,
    /// Display name for such fallback logins.
    pub fallback_name: String,
    /// Avatar assigned to fallback logins and to registrations that
    /// supply none.
    pub default_avatar: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "identia_user".into(),
            fallback_plan: PlanTier::Professional,
            fallback_name: "Demo User".into(),
            default_avatar:
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face"
                    .into(),
        }
    }
}
