//! Shared session access control.
//!
//! Every session-scoped operation resolves the session together with its
//! couple and interviews, then checks that the caller occupies one of the
//! couple's two slots. Anything else is Forbidden.

use std::sync::Arc;

use crate::domain::couple::Couple;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{Interview, Session, SessionError};
use crate::ports::{CoupleRepository, InterviewRepository, SessionRepository};

/// A session loaded with its couple and interviews.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session: Session,
    pub couple: Couple,
    pub interviews: Vec<Interview>,
}

/// Loader used by all session-scoped handlers.
pub struct SessionAccess {
    sessions: Arc<dyn SessionRepository>,
    couples: Arc<dyn CoupleRepository>,
    interviews: Arc<dyn InterviewRepository>,
}

impl SessionAccess {
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

    /// Load a session with its relations, enforcing couple membership.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session id is unknown
    /// - `Forbidden` if the caller is in neither couple slot
    pub async fn load(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<SessionContext, SessionError> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or(SessionError::NotFound(*session_id))?;

        let couple = self
            .couples
            .find_by_id(session.couple_id())
            .await?
            .ok_or_else(|| {
                SessionError::Infrastructure(format!(
                    "Couple missing for session {}",
                    session_id
                ))
            })?;

        if !couple.is_member(user_id) {
            return Err(SessionError::Forbidden);
        }

        let interviews = self.interviews.find_by_session(session_id).await?;

        Ok(SessionContext {
            session,
            couple,
            interviews,
        })
    }
}
