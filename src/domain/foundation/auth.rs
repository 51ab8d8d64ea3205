//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a validated
//! JWT. They carry no provider dependencies; any token issuer can populate
//! them through the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier (subject claim).
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if present in the claims.
    pub name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name,
        }
    }
}

/// Token validation failures.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Token is missing a required claim: {0}")]
    MissingClaim(&'static str),

    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_carries_claims() {
        let user = AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            "alice@example.com",
            Some("Alice".to_string()),
        );
        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn auth_error_displays() {
        assert_eq!(format!("{}", AuthError::TokenExpired), "Token is expired");
        assert_eq!(
            format!("{}", AuthError::MissingClaim("sub")),
            "Token is missing a required claim: sub"
        );
    }
}
