use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::errors::domain::UserError;
use crate::stores::UserRepository;
use crate::types::domain::{User, UserDraft, UserProfile};

/// The single CRUD service over the user collection.
///
/// Every front end goes through this service; the unique-username and
/// id-assignment invariants are enforced here and nowhere else. Writes
/// serialize on one async mutex held across the whole load-mutate-save
/// cycle. Between processes the last write wins.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    write_lock: Mutex<()>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// All users, in stored order.
    pub async fn list(&self) -> Result<Vec<User>, UserError> {
        let document = self.repository.load().await?;
        Ok(document.users)
    }

    /// A single user by id.
    pub async fn get(&self, id: i64) -> Result<User, UserError> {
        let document = self.repository.load().await?;
        document.find(id).cloned().ok_or(UserError::NotFound(id))
    }

    /// Users whose first and last names contain the given patterns,
    /// case-insensitively. An empty pattern matches every record on that
    /// field, so ("John", "") finds "Johnny Smith" but not "Jon Doe".
    pub async fn search(&self, first_name: &str, last_name: &str) -> Result<Vec<User>, UserError> {
        let first_name = first_name.to_lowercase();
        let last_name = last_name.to_lowercase();

        let document = self.repository.load().await?;
        Ok(document
            .users
            .into_iter()
            .filter(|user| {
                user.profile.first_name.to_lowercase().contains(&first_name)
                    && user.profile.last_name.to_lowercase().contains(&last_name)
            })
            .collect())
    }

    /// Create a user, assigning the next id and the creation date.
    ///
    /// Ids grow monotonically (`max + 1`) and are never reused after a
    /// deletion. The duplicate-username check runs before anything is
    /// written; on conflict the store is untouched.
    pub async fn create(&self, draft: UserDraft) -> Result<User, UserError> {
        validate(&draft)?;

        let _guard = self.write_lock.lock().await;
        let mut document = self.repository.load().await?;

        if document.find_by_username(&draft.user_name).is_some() {
            return Err(UserError::DuplicateUsername(draft.user_name));
        }

        let user = User {
            id: document.next_id(),
            user_name: draft.user_name,
            password: draft.password,
            active: draft.active,
            user_group_id: draft.user_group_id,
            profile: UserProfile {
                creation_date: Utc::now(),
                first_name: draft.first_name,
                last_name: draft.last_name,
                phone: draft.phone,
                email: draft.email,
            },
        };

        document.users.push(user.clone());
        self.repository.save(&document).await?;

        tracing::info!(user_id = user.id, user_name = %user.user_name, "user created");
        Ok(user)
    }

    /// Overwrite every mutable field of an existing user.
    ///
    /// Id and creation date survive; everything else comes from the draft.
    /// Renaming onto another user's name is a duplicate; keeping one's own
    /// name is not.
    pub async fn update(&self, id: i64, draft: UserDraft) -> Result<User, UserError> {
        validate(&draft)?;

        let _guard = self.write_lock.lock().await;
        let mut document = self.repository.load().await?;

        if document.find(id).is_none() {
            return Err(UserError::NotFound(id));
        }

        let taken = document
            .users
            .iter()
            .any(|user| user.user_name == draft.user_name && user.id != id);
        if taken {
            return Err(UserError::DuplicateUsername(draft.user_name));
        }

        let user = match document.users.iter_mut().find(|user| user.id == id) {
            Some(user) => user,
            None => return Err(UserError::NotFound(id)),
        };

        user.user_name = draft.user_name;
        user.password = draft.password;
        user.active = draft.active;
        user.user_group_id = draft.user_group_id;
        user.profile.first_name = draft.first_name;
        user.profile.last_name = draft.last_name;
        user.profile.phone = draft.phone;
        user.profile.email = draft.email;

        let updated = user.clone();
        self.repository.save(&document).await?;

        tracing::info!(user_id = id, "user updated");
        Ok(updated)
    }

    /// Remove a user by id.
    pub async fn delete(&self, id: i64) -> Result<(), UserError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.repository.load().await?;

        let before = document.users.len();
        document.users.retain(|user| user.id != id);
        if document.users.len() == before {
            return Err(UserError::NotFound(id));
        }

        self.repository.save(&document).await?;

        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}

fn validate(draft: &UserDraft) -> Result<(), UserError> {
    if draft.user_name.trim().is_empty() {
        return Err(UserError::Validation("Username is required".to_string()));
    }
    if draft.password.is_empty() {
        return Err(UserError::Validation("Password is required".to_string()));
    }
    Ok(())
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::stores::JsonFileUserStore;

    fn draft(user_name: &str, first_name: &str, last_name: &str) -> UserDraft {
        UserDraft {
            user_name: user_name.to_string(),
            password: "secret".to_string(),
            active: true,
            user_group_id: Some(3),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: "555-0100".to_string(),
            email: format!("{}@example.com", user_name),
        }
    }

    fn setup() -> (TempDir, UserService) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileUserStore::new(dir.path().join("users.json")));
        let service = UserService::new(store);
        (dir, service)
    }

    #[tokio::test]
    async fn test_first_user_gets_id_one() {
        let (_dir, service) = setup();

        let user = service.create(draft("alice", "Alice", "Smith")).await.unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_deletion() {
        let (_dir, service) = setup();

        service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        let bob = service.create(draft("bob", "Bob", "Jones")).await.unwrap();
        let carol = service.create(draft("carol", "Carol", "White")).await.unwrap();
        assert_eq!(carol.id, 3);

        // Deleting id 2 leaves {1, 3}; the next id is 4, not 2.
        service.delete(bob.id).await.unwrap();
        let dave = service.create(draft("dave", "Dave", "Brown")).await.unwrap();
        assert_eq!(dave.id, 4);
    }

    #[tokio::test]
    async fn test_create_sets_creation_date() {
        let (_dir, service) = setup();

        let before = Utc::now();
        let user = service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        let after = Utc::now();

        assert!(user.profile.creation_date >= before);
        assert!(user.profile.creation_date <= after);
    }

    #[tokio::test]
    async fn test_duplicate_username_fails_and_writes_nothing() {
        let (_dir, service) = setup();

        service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        let result = service.create(draft("alice", "Other", "Person")).await;

        match result {
            Err(UserError::DuplicateUsername(name)) => assert_eq!(name, "alice"),
            other => panic!("Expected DuplicateUsername, got {:?}", other),
        }
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_check_is_case_sensitive() {
        let (_dir, service) = setup();

        service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        let result = service.create(draft("Alice", "Alice", "Smith")).await;

        assert!(result.is_ok());
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_username_and_password() {
        let (_dir, service) = setup();

        let mut no_name = draft("", "A", "B");
        no_name.user_name = String::new();
        match service.create(no_name).await {
            Err(UserError::Validation(_)) => {}
            other => panic!("Expected Validation, got {:?}", other),
        }

        let mut no_password = draft("alice", "A", "B");
        no_password.password = String::new();
        match service.create(no_password).await {
            Err(UserError::Validation(_)) => {}
            other => panic!("Expected Validation, got {:?}", other),
        }

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_returns_not_found_for_missing_id() {
        let (_dir, service) = setup();

        match service.get(42).await {
            Err(UserError::NotFound(42)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_but_keeps_id_and_creation_date() {
        let (_dir, service) = setup();

        let created = service.create(draft("alice", "Alice", "Smith")).await.unwrap();

        let mut change = draft("alice2", "Alicia", "Smythe");
        change.active = false;
        change.user_group_id = Some(2);
        let updated = service.update(created.id, change).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user_name, "alice2");
        assert_eq!(updated.profile.first_name, "Alicia");
        assert!(!updated.active);
        assert_eq!(updated.user_group_id, Some(2));
        assert_eq!(updated.profile.creation_date, created.profile.creation_date);
    }

    #[tokio::test]
    async fn test_update_keeping_own_username_is_not_a_conflict() {
        let (_dir, service) = setup();

        let created = service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        let result = service.update(created.id, draft("alice", "Alicia", "Smith")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_renaming_onto_another_user_is_a_conflict() {
        let (_dir, service) = setup();

        service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        let bob = service.create(draft("bob", "Bob", "Jones")).await.unwrap();

        let result = service.update(bob.id, draft("alice", "Bob", "Jones")).await;

        match result {
            Err(UserError::DuplicateUsername(name)) => assert_eq!(name, "alice"),
            other => panic!("Expected DuplicateUsername, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let (_dir, service) = setup();

        match service.update(42, draft("ghost", "G", "H")).await {
            Err(UserError::NotFound(42)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_the_record() {
        let (_dir, service) = setup();

        let created = service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        service.delete(created.id).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let (_dir, service) = setup();

        match service.delete(42).await {
            Err(UserError::NotFound(42)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_matches_substring_case_insensitively() {
        let (_dir, service) = setup();

        service.create(draft("johnny", "Johnny", "Smith")).await.unwrap();
        service.create(draft("jon", "Jon", "Doe")).await.unwrap();

        let matches = service.search("John", "").await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].profile.first_name, "Johnny");
    }

    #[tokio::test]
    async fn test_search_applies_both_fields() {
        let (_dir, service) = setup();

        service.create(draft("johnny", "Johnny", "Smith")).await.unwrap();
        service.create(draft("johanna", "Johanna", "Jones")).await.unwrap();

        let matches = service.search("joh", "smi").await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].user_name, "johnny");
    }

    #[tokio::test]
    async fn test_search_with_empty_patterns_returns_everyone() {
        let (_dir, service) = setup();

        service.create(draft("alice", "Alice", "Smith")).await.unwrap();
        service.create(draft("bob", "Bob", "Jones")).await.unwrap();

        let matches = service.search("", "").await.unwrap();

        assert_eq!(matches.len(), 2);
    }
}
