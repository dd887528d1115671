use serde::{Deserialize, Serialize};

/// The four fixed user groups.
///
/// Group ids are stable and stored on the user record; any id outside the
/// known range (or no id at all) is treated as unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Group {
    Admin,
    Editor,
    RegularUser,
    ViewOnly,
}

impl Group {
    /// Resolve a stored group id. Unknown and missing ids both resolve to
    /// `None` (the unassigned state).
    pub fn from_id(id: Option<i32>) -> Option<Group> {
        match id {
            Some(1) => Some(Group::Admin),
            Some(2) => Some(Group::Editor),
            Some(3) => Some(Group::RegularUser),
            Some(4) => Some(Group::ViewOnly),
            _ => None,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Group::Admin => 1,
            Group::Editor => 2,
            Group::RegularUser => 3,
            Group::ViewOnly => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Group::Admin => "Admin",
            Group::Editor => "Editor",
            Group::RegularUser => "Regular User",
            Group::ViewOnly => "View-Only",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Role label for a stored group id, including the unassigned fallback.
pub fn role_label(group_id: Option<i32>) -> &'static str {
    Group::from_id(group_id)
        .map(|group| group.display_name())
        .unwrap_or("Unassigned")
}
