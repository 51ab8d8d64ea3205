//! JWT implementation of SessionValidator.
//!
//! Validates HS256 bearer tokens issued by the identity service. Token
//! issuance (login, refresh) is not part of this backend.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims this backend reads from an access token.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// HS256 JWT validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Creates a validator for tokens signed with the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = SecretString::new(secret.into());
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            },
        )?;

        let id = UserId::new(data.claims.sub).map_err(|_| AuthError::MissingClaim("sub"))?;
        let email = data.claims.email.ok_or(AuthError::MissingClaim("email"))?;

        Ok(AuthenticatedUser::new(id, email, data.claims.name))
    }
}
