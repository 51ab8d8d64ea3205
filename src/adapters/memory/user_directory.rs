//! In-memory implementation of UserDirectory.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{UserDirectory, UserProfile};

/// In-memory user directory for tests.
///
/// Stores a map of user IDs to public profiles; unknown IDs return `None`.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUserDirectory {
    /// Creates a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user profile.
    pub fn with_user(self, profile: UserProfile) -> Self {
        self.users
            .write()
            .unwrap()
            .insert(profile.id.as_str().to_string(), profile);
        self
    }

    /// Adds a user with fields derived from the ID.
    pub fn with_test_user(self, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let profile = UserProfile {
            id: UserId::new(&user_id).unwrap(),
            email: format!("{}@test.example.com", user_id),
            name: Some(user_id.clone()),
        };
        self.with_user(profile)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.users.read().unwrap().get(id.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_registered_user() {
        let directory = InMemoryUserDirectory::new().with_test_user("alice");
        let profile = directory
            .find_by_id(&UserId::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.email, "alice@test.example.com");
    }

    #[tokio::test]
    async fn unknown_user_returns_none() {
        let directory = InMemoryUserDirectory::new();
        let result = directory
            .find_by_id(&UserId::new("ghost").unwrap())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
