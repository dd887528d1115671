use std::sync::Arc;

use chrono::Utc;
use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};

use crate::stores::UserRepository;
use crate::types::dto::common::HealthResponse;

/// Health check API
///
/// Probes the user store along with the process: this service is only as
/// alive as its data file.
pub struct HealthApi {
    repository: Arc<dyn UserRepository>,
}

impl HealthApi {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum HealthTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// "healthy" means the user store loaded and the response carries its
    /// record count; "degraded" means the data file could not be read or
    /// parsed.
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    pub async fn health(&self) -> Json<HealthResponse> {
        let (status, user_count) = match self.repository.load().await {
            Ok(document) => ("healthy", Some(document.users.len() as i64)),
            Err(e) => {
                tracing::warn!(error = %e, "health probe could not load the user store");
                ("degraded", None)
            }
        };

        Json(HealthResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            user_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::stores::JsonFileUserStore;

    #[tokio::test]
    async fn test_health_is_healthy_with_no_data_file_yet() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileUserStore::new(dir.path().join("users.json")));
        let api = HealthApi::new(store);

        let response = api.health().await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.user_count, Some(0));
        assert!(!response.timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_health_reports_degraded_when_the_data_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not valid json").unwrap();
        let api = HealthApi::new(Arc::new(JsonFileUserStore::new(path)));

        let response = api.health().await;

        assert_eq!(response.status, "degraded");
        assert_eq!(response.user_count, None);
    }
}
