//! UpdateSessionStatusHandler - explicit status override.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, SessionStatus, UserId};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

use super::access::{SessionAccess, SessionContext};

/// Command to explicitly set a session's status.
///
/// The status arrives as an untrusted string; unrecognized values are a
/// Conflict, matching the interview-driven transitions' error surface.
#[derive(Debug, Clone)]
pub struct UpdateSessionStatusCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub status: String,
}

/// Handler for explicit status updates.
pub struct UpdateSessionStatusHandler {
    access: Arc<SessionAccess>,
    sessions: Arc<dyn SessionRepository>,
}

impl UpdateSessionStatusHandler {
    pub fn new(access: Arc<SessionAccess>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { access, sessions }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSessionStatusCommand,
    ) -> Result<SessionContext, SessionError> {
        let ctx = self.access.load(&cmd.session_id, &cmd.user_id).await?;

        let new_status: SessionStatus = cmd
            .status
            .parse()
            .map_err(|_| SessionError::InvalidStatus(cmd.status.clone()))?;

        let mut session = ctx.session;
        session.update_status(new_status)?;
        self.sessions.update(&session).await?;

        Ok(SessionContext {
            session,
            couple: ctx.couple,
            interviews: ctx.interviews,
        })
    }
}
