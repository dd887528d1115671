// Internal types - not exposed on the wire or on disk
pub mod auth;

pub use auth::Claims;
