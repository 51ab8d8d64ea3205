//! Session validation port for access-token validation.
//!
//! Token issuance lives outside this service; this port only validates
//! inbound bearer tokens and extracts the caller's identity. HTTP
//! middleware is the sole consumer.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Return `AuthError::InvalidToken` for malformed/bad-signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a bearer token (without the `Bearer ` prefix) and return
    /// the authenticated user.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
