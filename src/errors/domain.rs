use thiserror::Error;

/// Store-level failure: the data file could not be read, written, or parsed.
///
/// These are infrastructure errors. They are never exposed directly via the
/// API; endpoints convert them to a generic 500 after logging.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the data file failed
    #[error("Store I/O error: {operation} failed: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be encoded or decoded as JSON
    #[error("Store format error: {operation} failed: {source}")]
    Format {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    pub fn format(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Format {
            operation: operation.into(),
            source,
        }
    }
}

/// Login failure.
///
/// The first three variants are the client-facing reasons, produced by three
/// distinct ordered checks (existence, password, active flag) so the caller
/// always learns which check failed. The display strings are part of the
/// wire contract.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Username not found")]
    UsernameNotFound,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Account is inactive. Please contact an administrator")]
    AccountInactive,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// User CRUD failure.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User {0} not found")]
    NotFound(i64),

    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Token issue or validation failure.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("JWT has expired")]
    Expired,

    #[error("Invalid or malformed JWT")]
    Invalid,

    #[error("Failed to sign JWT: {0}")]
    Signing(String),
}

/// Authorization decision against a validated token.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccessError {
    #[error("Insufficient permissions for this operation")]
    Forbidden,
}
