//! Interview repository port.

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::Interview;
use async_trait::async_trait;

/// Repository port for Interview persistence.
///
/// At most one interview exists per `(session_id, user_id)` pair; the
/// store carries a unique constraint on that pair, and resubmission goes
/// through `update`.
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Save a new interview.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (including a duplicate
    ///   `(session_id, user_id)` pair racing past the lookup)
    async fn create(&self, interview: &Interview) -> Result<(), DomainError>;

    /// Update an existing interview.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn update(&self, interview: &Interview) -> Result<(), DomainError>;

    /// Find a member's interview for a session.
    async fn find_by_session_and_user(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<Option<Interview>, DomainError>;

    /// Find all interviews for a session.
    async fn find_by_session(&self, session_id: &SessionId)
        -> Result<Vec<Interview>, DomainError>;
}
