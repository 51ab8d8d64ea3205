//! Interview entity - one partner's responses for a session.

use crate::domain::foundation::{
    DomainError, InterviewId, SessionId, Timestamp, UserId, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Free-form question-key to answer mapping.
///
/// The shape is not validated beyond being a non-empty JSON object.
pub type InterviewResponses = serde_json::Map<String, serde_json::Value>;

/// One partner's interview for a session.
///
/// At most one interview exists per `(session_id, user_id)` pair;
/// resubmission overwrites the existing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    /// Unique identifier for this interview.
    id: InterviewId,

    /// Session this interview belongs to.
    session_id: SessionId,

    /// Member who submitted it.
    user_id: UserId,

    /// Question-key to answer mapping.
    responses: InterviewResponses,

    /// Optional free-text notes.
    notes: Option<String>,

    /// When the interview was (last) completed.
    completed_at: Timestamp,

    /// When the interview row was created.
    created_at: Timestamp,
}

impl Interview {
    /// Create a new interview from a first submission.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `responses` is empty
    pub fn new(
        id: InterviewId,
        session_id: SessionId,
        user_id: UserId,
        responses: InterviewResponses,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_responses(&responses)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            session_id,
            user_id,
            responses,
            notes,
            completed_at: now,
            created_at: now,
        })
    }

    /// Reconstitute an interview from persistence (no validation).
    pub fn reconstitute(
        id: InterviewId,
        session_id: SessionId,
        user_id: UserId,
        responses: InterviewResponses,
        notes: Option<String>,
        completed_at: Timestamp,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            user_id,
            responses,
            notes,
            completed_at,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the interview ID.
    pub fn id(&self) -> &InterviewId {
        &self.id
    }

    /// Returns the owning session's ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the submitting member's ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the responses mapping.
    pub fn responses(&self) -> &InterviewResponses {
        &self.responses
    }

    /// Returns the notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns when the interview was last completed.
    pub fn completed_at(&self) -> &Timestamp {
        &self.completed_at
    }

    /// Returns when the interview row was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Overwrite responses and notes on resubmission.
    ///
    /// `completed_at` is refreshed to the current time.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `responses` is empty
    pub fn resubmit(
        &mut self,
        responses: InterviewResponses,
        notes: Option<String>,
    ) -> Result<(), DomainError> {
        Self::validate_responses(&responses)?;

        self.responses = responses;
        self.notes = notes;
        self.completed_at = Timestamp::now();
        Ok(())
    }

    fn validate_responses(responses: &InterviewResponses) -> Result<(), ValidationError> {
        if responses.is_empty() {
            return Err(ValidationError::empty_field("responses"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn responses(pairs: &[(&str, &str)]) -> InterviewResponses {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    fn test_interview() -> Interview {
        Interview::new(
            InterviewId::new(),
            SessionId::new(),
            UserId::new("alice").unwrap(),
            responses(&[("q1", "we argue about chores")]),
            None,
        )
        .unwrap()
    }

    #[test]
    fn new_interview_stamps_completed_at() {
        let interview = test_interview();
        assert_eq!(interview.completed_at(), interview.created_at());
    }

    #[test]
    fn new_interview_rejects_empty_responses() {
        let result = Interview::new(
            InterviewId::new(),
            SessionId::new(),
            UserId::new("alice").unwrap(),
            InterviewResponses::new(),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn responses_accept_arbitrary_value_shapes() {
        let mut map = InterviewResponses::new();
        map.insert("scale".to_string(), json!(7));
        map.insert("list".to_string(), json!(["a", "b"]));
        map.insert("nested".to_string(), json!({"x": {"y": true}}));
        let interview = Interview::new(
            InterviewId::new(),
            SessionId::new(),
            UserId::new("alice").unwrap(),
            map,
            None,
        );
        assert!(interview.is_ok());
    }

    #[test]
    fn resubmit_overwrites_responses_and_notes() {
        let mut interview = test_interview();
        interview
            .resubmit(
                responses(&[("q1", "updated answer")]),
                Some("calmer now".to_string()),
            )
            .unwrap();
        assert_eq!(
            interview.responses().get("q1"),
            Some(&json!("updated answer"))
        );
        assert_eq!(interview.notes(), Some("calmer now"));
    }

    #[test]
    fn resubmit_rejects_empty_responses() {
        let mut interview = test_interview();
        let result = interview.resubmit(InterviewResponses::new(), None);
        assert!(result.is_err());
        // Original content untouched on failure.
        assert!(!interview.responses().is_empty());
    }

    #[test]
    fn resubmit_clears_notes_when_absent() {
        let mut interview = test_interview();
        interview
            .resubmit(responses(&[("q1", "a")]), Some("note".to_string()))
            .unwrap();
        interview.resubmit(responses(&[("q1", "b")]), None).unwrap();
        assert!(interview.notes().is_none());
    }
}
