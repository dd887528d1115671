// Domain types - user records, groups, and the permission policy table
pub mod group;
pub mod permissions;
pub mod user;

pub use group::{role_label, Group};
pub use permissions::{capabilities_for, Capability, Grant, PermissionSet};
pub use user::{User, UserDocument, UserDraft, UserProfile};
