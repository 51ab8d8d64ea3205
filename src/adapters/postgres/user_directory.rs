//! PostgreSQL implementation of UserDirectory.
//!
//! Reads only the public columns of the users table; credentials and the
//! rest of the account record belong to the identity service.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{UserDirectory, UserProfile};

/// PostgreSQL implementation of UserDirectory.
#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Creates a new PostgresUserDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query("SELECT id, email, name FROM users WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch user: {}", e),
                )
            })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let column_error = |e: sqlx::Error| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to read user row: {}", e),
            )
        };

        let id: String = row.try_get("id").map_err(column_error)?;
        let email: String = row.try_get("email").map_err(column_error)?;
        let name: Option<String> = row.try_get("name").map_err(column_error)?;

        Ok(Some(UserProfile {
            id: UserId::new(id).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid user row: {}", e),
                )
            })?,
            email,
            name,
        }))
    }
}
