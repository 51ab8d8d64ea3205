//! User directory port.
//!
//! Users are owned externally; this core only projects their public
//! fields when returning couple data.

use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Public projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
}

/// Lookup port for user public fields.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user's public profile by ID.
    ///
    /// Returns `None` if the directory has no such user.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn UserDirectory) {}
    }

    #[test]
    fn user_profile_serializes_public_fields_only() {
        let profile = UserProfile {
            id: UserId::new("user-1").unwrap(),
            email: "a@example.com".to_string(),
            name: Some("Alice".to_string()),
        };
        let json = serde_json::to_value(&profile).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        for key in ["id", "email", "name"] {
            assert!(object.contains_key(key), "missing key: {}", key);
        }
    }
}
