use serde::{Deserialize, Serialize};

use crate::types::domain::Capability;

/// JWT Claims structure
///
/// Carries identity plus the four capability claims computed at login.
/// Claims are immutable for the token's lifetime; a changed group takes
/// effect only on the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Numeric user id
    #[serde(rename = "UserID")]
    pub user_id: i64,

    /// Group id at login time, absent for unassigned users
    #[serde(rename = "UserGroupID")]
    pub user_group_id: Option<i32>,

    /// Display label of the group ("Admin", "Editor", ...)
    pub role: String,

    #[serde(rename = "CanCreate")]
    pub can_create: String,

    #[serde(rename = "CanEdit")]
    pub can_edit: String,

    #[serde(rename = "CanDelete")]
    pub can_delete: String,

    #[serde(rename = "CanView")]
    pub can_view: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// The stringified claim value for a capability.
    pub fn capability_claim(&self, capability: Capability) -> &str {
        match capability {
            Capability::Create => &self.can_create,
            Capability::Edit => &self.can_edit,
            Capability::Delete => &self.can_delete,
            Capability::View => &self.can_view,
        }
    }
}
