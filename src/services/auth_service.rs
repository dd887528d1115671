use std::sync::Arc;

use crate::errors::domain::CredentialError;
use crate::stores::UserRepository;
use crate::types::domain::User;

/// Validates presented credentials against the stored user set.
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Check a username/password pair and return the matching user.
    ///
    /// Three distinct checks, in order: the username must exist
    /// (case-sensitive exact match), the password must match exactly, and
    /// the account must be active. Each failure carries its own reason so
    /// the client learns which check failed. No side effects.
    ///
    /// # Returns
    /// * `Ok(User)` - snapshot of the authenticated user
    /// * `Err(CredentialError)` - the first check that failed
    pub async fn authenticate(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<User, CredentialError> {
        let document = self.repository.load().await?;

        let user = document
            .find_by_username(user_name)
            .ok_or(CredentialError::UsernameNotFound)?;

        if user.password != password {
            return Err(CredentialError::IncorrectPassword);
        }

        if !user.active {
            return Err(CredentialError::AccountInactive);
        }

        Ok(user.clone())
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    use crate::stores::{JsonFileUserStore, UserRepository};
    use crate::types::domain::{UserDocument, UserProfile};

    fn user(id: i64, user_name: &str, password: &str, active: bool) -> User {
        User {
            id,
            user_name: user_name.to_string(),
            password: password.to_string(),
            active,
            user_group_id: Some(3),
            profile: UserProfile {
                creation_date: Utc::now(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                phone: String::new(),
                email: String::new(),
            },
        }
    }

    async fn setup(users: Vec<User>) -> (TempDir, AuthService) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileUserStore::new(dir.path().join("users.json")));
        store.save(&UserDocument { users }).await.unwrap();
        let service = AuthService::new(store);
        (dir, service)
    }

    #[tokio::test]
    async fn test_authenticate_succeeds_with_correct_credentials() {
        let (_dir, service) = setup(vec![user(1, "alice", "secret", true)]).await;

        let result = service.authenticate("alice", "secret").await;

        let authenticated = result.unwrap();
        assert_eq!(authenticated.id, 1);
        assert_eq!(authenticated.user_name, "alice");
    }

    #[tokio::test]
    async fn test_unknown_username_fails_before_password_is_considered() {
        // Another user shares the presented password; the existence check
        // still wins.
        let (_dir, service) = setup(vec![user(1, "alice", "secret", true)]).await;

        let result = service.authenticate("bob", "secret").await;

        match result {
            Err(CredentialError::UsernameNotFound) => {}
            other => panic!("Expected UsernameNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_password_on_existing_user_is_incorrect_password() {
        let (_dir, service) = setup(vec![user(1, "alice", "secret", true)]).await;

        let result = service.authenticate("alice", "wrong").await;

        match result {
            Err(CredentialError::IncorrectPassword) => {}
            other => panic!("Expected IncorrectPassword, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_username_match_is_case_sensitive() {
        let (_dir, service) = setup(vec![user(1, "alice", "secret", true)]).await;

        let result = service.authenticate("Alice", "secret").await;

        match result {
            Err(CredentialError::UsernameNotFound) => {}
            other => panic!("Expected UsernameNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_inactive_account_fails_after_password_check() {
        let (_dir, service) = setup(vec![user(1, "alice", "secret", false)]).await;

        let result = service.authenticate("alice", "secret").await;

        match result {
            Err(CredentialError::AccountInactive) => {}
            other => panic!("Expected AccountInactive, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_inactive_account_with_wrong_password_reports_password_first() {
        // The checks are ordered: password before active flag.
        let (_dir, service) = setup(vec![user(1, "alice", "secret", false)]).await;

        let result = service.authenticate("alice", "wrong").await;

        match result {
            Err(CredentialError::IncorrectPassword) => {}
            other => panic!("Expected IncorrectPassword, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_messages_are_the_wire_contract() {
        assert_eq!(
            CredentialError::UsernameNotFound.to_string(),
            "Username not found"
        );
        assert_eq!(
            CredentialError::IncorrectPassword.to_string(),
            "Incorrect password"
        );
        assert_eq!(
            CredentialError::AccountInactive.to_string(),
            "Account is inactive. Please contact an administrator"
        );
    }
}
