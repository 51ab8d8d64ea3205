//! GetSessionStatusHandler - per-member interview completion report.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, SessionStatus, UserId};
use crate::domain::session::progress::interview_completion;
use crate::domain::session::SessionError;

use super::access::SessionAccess;

/// Query for a session's completion report.
#[derive(Debug, Clone)]
pub struct GetSessionStatusQuery {
    pub session_id: SessionId,
    pub user_id: UserId,
}

/// Which member occupies which slot and who has completed an interview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerStatus {
    pub user_a_id: UserId,
    pub user_b_id: Option<UserId>,
    pub user_a_complete: bool,
    pub user_b_complete: bool,
}

/// Completion report for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatusReport {
    pub session_id: SessionId,
    pub status: SessionStatus,
    pub partner_status: PartnerStatus,
}

/// Handler for the completion report.
pub struct GetSessionStatusHandler {
    access: Arc<SessionAccess>,
}

impl GetSessionStatusHandler {
    pub fn new(access: Arc<SessionAccess>) -> Self {
        Self { access }
    }

    pub async fn handle(
        &self,
        query: GetSessionStatusQuery,
    ) -> Result<SessionStatusReport, SessionError> {
        let ctx = self.access.load(&query.session_id, &query.user_id).await?;
        let completion = interview_completion(&ctx.couple, &ctx.interviews);

        Ok(SessionStatusReport {
            session_id: query.session_id,
            status: ctx.session.status(),
            partner_status: PartnerStatus {
                user_a_id: ctx.couple.user_a_id().clone(),
                user_b_id: ctx.couple.user_b_id().cloned(),
                user_a_complete: completion.user_a_complete,
                user_b_complete: completion.user_b_complete,
            },
        })
    }
}
