//! Session repository port.

use crate::domain::foundation::{CoupleId, DomainError, SessionId};
use crate::domain::session::Session;
use async_trait::async_trait;

/// Repository port for Session aggregate persistence.
///
/// Implementations must enforce the one-active-session-per-couple
/// invariant at the store boundary (partial unique index or equivalent)
/// and surface a violation as `ActiveSessionExists`.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `ActiveSessionExists` if the couple already has a non-terminal session
    /// - `DatabaseError` on persistence failure
    async fn create(&self, session: &Session) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Find a session by its ID.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Find the couple's session outside the terminal set, if any.
    async fn find_active_by_couple(
        &self,
        couple_id: &CoupleId,
    ) -> Result<Option<Session>, DomainError>;

    /// Find all sessions for a couple, most recently created first.
    async fn find_by_couple(&self, couple_id: &CoupleId) -> Result<Vec<Session>, DomainError>;
}
