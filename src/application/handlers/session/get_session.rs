//! GetSessionHandler - load one session with its relations.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::SessionError;

use super::access::{SessionAccess, SessionContext};

/// Query for a single session.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
    pub user_id: UserId,
}

/// Handler for session lookup.
///
/// Thin alias over the shared access loader; the access check is the
/// whole operation.
pub struct GetSessionHandler {
    access: Arc<SessionAccess>,
}

impl GetSessionHandler {
    pub fn new(access: Arc<SessionAccess>) -> Self {
        Self { access }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionContext, SessionError> {
        self.access.load(&query.session_id, &query.user_id).await
    }
}
