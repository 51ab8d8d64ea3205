//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::session::{
    SessionContext, SessionStatusReport, SessionWithInterviews, SubmitInterviewResult,
};
use crate::domain::couple::Couple;
use crate::domain::foundation::SessionStatus;
use crate::domain::session::{Interview, InterviewResponses, Session};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a session.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

/// Request to submit an interview.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitInterviewRequest {
    pub responses: InterviewResponses,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to explicitly update a session's status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Raw couple record as embedded in session payloads.
#[derive(Debug, Clone, Serialize)]
pub struct CoupleRecordResponse {
    pub id: String,
    pub user_a_id: String,
    pub user_b_id: Option<String>,
    pub invite_token: Option<String>,
    pub agreement_signed_at: Option<String>,
}

impl From<&Couple> for CoupleRecordResponse {
    fn from(couple: &Couple) -> Self {
        Self {
            id: couple.id().to_string(),
            user_a_id: couple.user_a_id().to_string(),
            user_b_id: couple.user_b_id().map(|u| u.to_string()),
            invite_token: couple.invite_token().map(|t| t.as_str().to_string()),
            agreement_signed_at: couple.agreement_signed_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// Session fields common to every session payload.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub couple_id: String,
    pub status: SessionStatus,
    pub initiated_by: String,
    pub topic: Option<String>,
    pub context: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            couple_id: session.couple_id().to_string(),
            status: session.status(),
            initiated_by: session.initiated_by().to_string(),
            topic: session.topic().map(str::to_string),
            context: session.context().map(str::to_string),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// One interview row.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewResponse {
    pub id: String,
    pub session_id: String,
    pub user_id: String,
    pub responses: InterviewResponses,
    pub notes: Option<String>,
    pub completed_at: String,
    pub created_at: String,
}

impl From<&Interview> for InterviewResponse {
    fn from(interview: &Interview) -> Self {
        Self {
            id: interview.id().to_string(),
            session_id: interview.session_id().to_string(),
            user_id: interview.user_id().to_string(),
            responses: interview.responses().clone(),
            notes: interview.notes().map(str::to_string),
            completed_at: interview.completed_at().to_rfc3339(),
            created_at: interview.created_at().to_rfc3339(),
        }
    }
}

/// Session with its interviews (list and start payloads).
#[derive(Debug, Clone, Serialize)]
pub struct SessionWithInterviewsResponse {
    #[serde(flatten)]
    pub session: SessionResponse,
    pub interviews: Vec<InterviewResponse>,
}

impl From<SessionWithInterviews> for SessionWithInterviewsResponse {
    fn from(value: SessionWithInterviews) -> Self {
        Self {
            session: (&value.session).into(),
            interviews: value.interviews.iter().map(Into::into).collect(),
        }
    }
}

/// Session with couple and interviews (detail payloads).
#[derive(Debug, Clone, Serialize)]
pub struct SessionDetailResponse {
    #[serde(flatten)]
    pub session: SessionResponse,
    pub couple: CoupleRecordResponse,
    pub interviews: Vec<InterviewResponse>,
}

impl From<SessionContext> for SessionDetailResponse {
    fn from(ctx: SessionContext) -> Self {
        Self {
            session: (&ctx.session).into(),
            couple: (&ctx.couple).into(),
            interviews: ctx.interviews.iter().map(Into::into).collect(),
        }
    }
}

/// Response for interview submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitInterviewResponse {
    pub interview: InterviewResponse,
    pub session: SessionDetailResponse,
}

impl From<SubmitInterviewResult> for SubmitInterviewResponse {
    fn from(result: SubmitInterviewResult) -> Self {
        Self {
            interview: (&result.interview).into(),
            session: result.session.into(),
        }
    }
}

/// Per-member completion flags.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerStatusResponse {
    pub user_a_id: String,
    pub user_b_id: Option<String>,
    pub user_a_complete: bool,
    pub user_b_complete: bool,
}

/// Completion report payload.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub status: SessionStatus,
    pub partner_status: PartnerStatusResponse,
}

impl From<SessionStatusReport> for SessionStatusResponse {
    fn from(report: SessionStatusReport) -> Self {
        Self {
            session_id: report.session_id.to_string(),
            status: report.status,
            partner_status: PartnerStatusResponse {
                user_a_id: report.partner_status.user_a_id.to_string(),
                user_b_id: report.partner_status.user_b_id.map(|u| u.to_string()),
                user_a_complete: report.partner_status.user_a_complete,
                user_b_complete: report.partner_status.user_b_complete,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CoupleId, SessionId, UserId};
    use serde_json::json;

    #[test]
    fn start_session_request_fields_are_optional() {
        let req: StartSessionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.topic.is_none());
        assert!(req.context.is_none());

        let req: StartSessionRequest =
            serde_json::from_str(r#"{"topic": "Chores"}"#).unwrap();
        assert_eq!(req.topic.as_deref(), Some("Chores"));
    }

    #[test]
    fn submit_interview_request_requires_responses() {
        let result: Result<SubmitInterviewRequest, _> =
            serde_json::from_str(r#"{"notes": "no answers"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn submit_interview_request_rejects_non_object_responses() {
        let result: Result<SubmitInterviewRequest, _> =
            serde_json::from_str(r#"{"responses": ["a", "b"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_status_request_deserializes() {
        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"status": "resolved"}"#).unwrap();
        assert_eq!(req.status, "resolved");
    }

    #[test]
    fn session_response_flattens_into_detail_payload() {
        let session = Session::new(
            SessionId::new(),
            CoupleId::new(),
            UserId::new("alice").unwrap(),
            Some("Chores".to_string()),
            None,
        )
        .unwrap();

        let response = SessionWithInterviewsResponse {
            session: (&session).into(),
            interviews: Vec::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], json!("initiated"));
        assert_eq!(value["topic"], json!("Chores"));
        assert_eq!(value["interviews"], json!([]));
    }
}
