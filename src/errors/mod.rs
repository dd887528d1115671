// Errors layer - Error type definitions
pub mod api;
pub mod domain;

// Re-exports for convenience
pub use api::{LoginError, UserApiError};
pub use domain::{AccessError, CredentialError, StoreError, TokenError, UserError};
