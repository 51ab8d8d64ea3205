//! Session aggregate entity.
//!
//! A session is one mediation engagement owned by a couple. Its status is
//! driven two ways: interview submission advances it through the derived
//! rule in [`super::progress`], and explicit updates may set any recognized
//! status until a terminal one is reached.
//!
//! # Invariants
//!
//! - A couple has at most one session outside the terminal set at a time
//!   (enforced at the store boundary).
//! - `topic` is at most 200 characters, `context` at most 500.
//! - Terminal status is immutable except for same-value no-op writes.

use crate::domain::foundation::{
    CoupleId, DomainError, ErrorCode, SessionId, SessionStatus, Timestamp, UserId, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Maximum length for the session topic.
pub const MAX_TOPIC_LENGTH: usize = 200;

/// Maximum length for the session context.
pub const MAX_CONTEXT_LENGTH: usize = 500;

/// Session aggregate - one mediation engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// Couple that owns this session.
    couple_id: CoupleId,

    /// Current lifecycle status.
    status: SessionStatus,

    /// Member who started the session.
    initiated_by: UserId,

    /// Optional topic, copied verbatim from the start request.
    topic: Option<String>,

    /// Optional context, copied verbatim from the start request.
    context: Option<String>,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last updated.
    updated_at: Timestamp,
}

impl Session {
    /// Create a new session in the `initiated` status.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if topic or context exceeds its length cap
    pub fn new(
        id: SessionId,
        couple_id: CoupleId,
        initiated_by: UserId,
        topic: Option<String>,
        context: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_field("topic", topic.as_deref(), MAX_TOPIC_LENGTH)?;
        Self::validate_field("context", context.as_deref(), MAX_CONTEXT_LENGTH)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            couple_id,
            status: SessionStatus::Initiated,
            initiated_by,
            topic,
            context,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        couple_id: CoupleId,
        status: SessionStatus,
        initiated_by: UserId,
        topic: Option<String>,
        context: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            couple_id,
            status,
            initiated_by,
            topic,
            context,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owning couple's ID.
    pub fn couple_id(&self) -> &CoupleId {
        &self.couple_id
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the member who started the session.
    pub fn initiated_by(&self) -> &UserId {
        &self.initiated_by
    }

    /// Returns the topic, if provided.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns the context, if provided.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks whether the session has reached a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a derived status computed from interview completion.
    ///
    /// Returns `true` if the status actually changed. The caller is
    /// expected to pass the output of [`super::progress::derive_status`],
    /// which never moves the session backward.
    pub fn apply_derived(&mut self, next: SessionStatus) -> bool {
        if next == self.status {
            return false;
        }
        self.status = next;
        self.updated_at = Timestamp::now();
        true
    }

    /// Explicitly set the session status.
    ///
    /// Any recognized status is accepted from a non-terminal state; a
    /// terminal session only accepts a same-value no-op write.
    ///
    /// # Errors
    ///
    /// - `SessionCompleted` if the session is terminal and the target differs
    pub fn update_status(&mut self, new_status: SessionStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&new_status) {
            return Err(DomainError::new(
                ErrorCode::SessionCompleted,
                "Cannot update status of a completed session",
            ));
        }

        self.status = new_status;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_field(
        field: &str,
        value: Option<&str>,
        max: usize,
    ) -> Result<(), ValidationError> {
        if let Some(value) = value {
            let len = value.chars().count();
            if len > max {
                return Err(ValidationError::too_long(field, max, len));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new(
            SessionId::new(),
            CoupleId::new(),
            UserId::new("alice").unwrap(),
            Some("Chores".to_string()),
            None,
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_session_is_initiated() {
        let session = test_session();
        assert_eq!(session.status(), SessionStatus::Initiated);
        assert!(!session.is_terminal());
    }

    #[test]
    fn new_session_copies_fields_verbatim() {
        let session = Session::new(
            SessionId::new(),
            CoupleId::new(),
            UserId::new("alice").unwrap(),
            Some("  topic  ".to_string()),
            Some("context".to_string()),
        )
        .unwrap();
        // No trimming or defaulting.
        assert_eq!(session.topic(), Some("  topic  "));
        assert_eq!(session.context(), Some("context"));
    }

    #[test]
    fn new_session_allows_missing_topic_and_context() {
        let session = Session::new(
            SessionId::new(),
            CoupleId::new(),
            UserId::new("alice").unwrap(),
            None,
            None,
        )
        .unwrap();
        assert!(session.topic().is_none());
        assert!(session.context().is_none());
    }

    #[test]
    fn new_session_rejects_long_topic() {
        let result = Session::new(
            SessionId::new(),
            CoupleId::new(),
            UserId::new("alice").unwrap(),
            Some("x".repeat(MAX_TOPIC_LENGTH + 1)),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_session_rejects_long_context() {
        let result = Session::new(
            SessionId::new(),
            CoupleId::new(),
            UserId::new("alice").unwrap(),
            None,
            Some("x".repeat(MAX_CONTEXT_LENGTH + 1)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn topic_at_cap_is_accepted() {
        let result = Session::new(
            SessionId::new(),
            CoupleId::new(),
            UserId::new("alice").unwrap(),
            Some("x".repeat(MAX_TOPIC_LENGTH)),
            None,
        );
        assert!(result.is_ok());
    }

    // Derived status tests

    #[test]
    fn apply_derived_reports_change() {
        let mut session = test_session();
        assert!(session.apply_derived(SessionStatus::InProgress));
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn apply_derived_same_value_reports_no_change() {
        let mut session = test_session();
        assert!(!session.apply_derived(SessionStatus::Initiated));
    }

    // Explicit update tests

    #[test]
    fn update_status_allows_stage_skips() {
        let mut session = test_session();
        session.update_status(SessionStatus::Reconnection).unwrap();
        assert_eq!(session.status(), SessionStatus::Reconnection);
    }

    #[test]
    fn update_status_allows_reaching_terminal() {
        let mut session = test_session();
        session.update_status(SessionStatus::Resolved).unwrap();
        assert!(session.is_terminal());
    }

    #[test]
    fn update_status_rejects_change_from_terminal() {
        let mut session = test_session();
        session.update_status(SessionStatus::Abandoned).unwrap();
        let result = session.update_status(SessionStatus::InProgress);
        assert_eq!(result.unwrap_err().code, ErrorCode::SessionCompleted);
    }

    #[test]
    fn update_status_allows_terminal_noop() {
        let mut session = test_session();
        session.update_status(SessionStatus::Resolved).unwrap();
        assert!(session.update_status(SessionStatus::Resolved).is_ok());
        assert_eq!(session.status(), SessionStatus::Resolved);
    }
}
