//! ListSessionsHandler - all of a couple's sessions, newest first.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::session::SessionError;
use crate::ports::{CoupleRepository, InterviewRepository, SessionRepository};

use super::start_session::SessionWithInterviews;

/// Query for the caller's session history.
#[derive(Debug, Clone)]
pub struct ListSessionsQuery {
    pub user_id: UserId,
}

/// Handler for session history.
pub struct ListSessionsHandler {
    sessions: Arc<dyn SessionRepository>,
    couples: Arc<dyn CoupleRepository>,
    interviews: Arc<dyn InterviewRepository>,
}

impl ListSessionsHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        couples: Arc<dyn CoupleRepository>,
        interviews: Arc<dyn InterviewRepository>,
    ) -> Self {
        Self {
            sessions,
            couples,
            interviews,
        }
    }

    pub async fn handle(
        &self,
        query: ListSessionsQuery,
    ) -> Result<Vec<SessionWithInterviews>, SessionError> {
        let couple = self
            .couples
            .find_by_member(&query.user_id)
            .await?
            .ok_or(SessionError::CoupleNotFound)?;

        let sessions = self.sessions.find_by_couple(couple.id()).await?;

        let mut result = Vec::with_capacity(sessions.len());
        for session in sessions {
            let interviews = self.interviews.find_by_session(session.id()).await?;
            result.push(SessionWithInterviews {
                session,
                interviews,
            });
        }
        Ok(result)
    }
}
