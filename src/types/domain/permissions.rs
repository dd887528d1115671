use crate::types::domain::group::Group;

/// The four capabilities a token can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Create,
    Edit,
    Delete,
    View,
}

impl Capability {
    /// Claim name as embedded in the token.
    pub fn claim_name(&self) -> &'static str {
        match self {
            Capability::Create => "CanCreate",
            Capability::Edit => "CanEdit",
            Capability::Delete => "CanDelete",
            Capability::View => "CanView",
        }
    }
}

/// Value of a single capability claim.
///
/// `SelfOnly` is only ever produced for [`Capability::Edit`]: it allows the
/// operation when the caller is the target record's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    Granted,
    Denied,
    SelfOnly,
}

impl Grant {
    /// String form carried in the token claims.
    pub fn as_claim(&self) -> &'static str {
        match self {
            Grant::Granted => "true",
            Grant::Denied => "false",
            Grant::SelfOnly => "self",
        }
    }

    /// Parse a claim value. Anything that is not exactly `"true"` or
    /// `"self"` denies, so a missing or mangled claim never grants access.
    pub fn from_claim(value: &str) -> Grant {
        match value {
            "true" => Grant::Granted,
            "self" => Grant::SelfOnly,
            _ => Grant::Denied,
        }
    }
}

/// The capability profile computed for a group at login time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    pub create: Grant,
    pub edit: Grant,
    pub delete: Grant,
    pub view: Grant,
}

impl PermissionSet {
    /// The fixed policy table. Total over every group state, including
    /// unassigned, so there is no error path.
    pub fn for_group(group: Option<Group>) -> PermissionSet {
        match group {
            Some(Group::Admin) => PermissionSet {
                create: Grant::Granted,
                edit: Grant::Granted,
                delete: Grant::Granted,
                view: Grant::Granted,
            },
            Some(Group::Editor) => PermissionSet {
                create: Grant::Granted,
                edit: Grant::Granted,
                delete: Grant::Denied,
                view: Grant::Granted,
            },
            Some(Group::RegularUser) | Some(Group::ViewOnly) => PermissionSet {
                create: Grant::Denied,
                edit: Grant::SelfOnly,
                delete: Grant::Denied,
                view: Grant::Granted,
            },
            None => PermissionSet {
                create: Grant::Denied,
                edit: Grant::Denied,
                delete: Grant::Denied,
                view: Grant::Denied,
            },
        }
    }

    pub fn grant(&self, capability: Capability) -> Grant {
        match capability {
            Capability::Create => self.create,
            Capability::Edit => self.edit,
            Capability::Delete => self.delete,
            Capability::View => self.view,
        }
    }
}

/// Capability profile for a stored group id.
pub fn capabilities_for(group_id: Option<i32>) -> PermissionSet {
    PermissionSet::for_group(Group::from_id(group_id))
}
