use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as persisted in the data file.
///
/// Field names are PascalCase on disk to stay compatible with the existing
/// data file format. The password is stored in plaintext; see DESIGN.md.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub password: String,
    pub active: bool,
    pub user_group_id: Option<i32>,
    pub profile: UserProfile,
}

/// Nested profile data on a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    pub creation_date: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// The entire persisted data set: one top-level `"Users"` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "Users", default)]
    pub users: Vec<User>,
}

impl UserDocument {
    /// Next id to assign: one past the highest id ever present, so ids are
    /// never reused after a deletion.
    pub fn next_id(&self) -> i64 {
        self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn find_by_username(&self, user_name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.user_name == user_name)
    }
}

/// Input for create and update operations. Updates overwrite every field
/// here; id and creation date are never client-controlled.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub user_name: String,
    pub password: String,
    pub active: bool,
    pub user_group_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}
