use std::path::PathBuf;

use async_trait::async_trait;

use crate::errors::domain::StoreError;
use crate::types::domain::UserDocument;

/// Repository abstraction over the persisted user set.
///
/// The contract is whole-document: implementations load the entire
/// collection and overwrite it on save. Nothing above this trait sees file
/// paths or any other storage detail.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn load(&self) -> Result<UserDocument, StoreError>;

    async fn save(&self, document: &UserDocument) -> Result<(), StoreError>;
}

/// JSON-file-backed user repository.
///
/// The store itself is stateless between calls; serialized access for
/// read-modify-write cycles is the caller's concern (see `UserService`).
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl UserRepository for JsonFileUserStore {
    /// Read and parse the whole data file.
    ///
    /// A missing file is an empty collection, so the first run needs no
    /// seed step and the first created user gets id 1.
    async fn load(&self) -> Result<UserDocument, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(UserDocument::default());
            }
            Err(e) => return Err(StoreError::io("read data file", e)),
        };

        serde_json::from_str(&raw).map_err(|e| StoreError::format("parse data file", e))
    }

    /// Serialize and overwrite the whole data file.
    async fn save(&self, document: &UserDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::format("serialize data file", e))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| StoreError::io("write data file", e))
    }
}

impl std::fmt::Debug for JsonFileUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileUserStore")
            .field("path", &self.path)
            .finish()
    }
}
