//! In-memory implementation of SessionRepository.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{CoupleId, DomainError, ErrorCode, SessionId};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// In-memory session store.
///
/// Sessions are kept in insertion order; `find_by_couple` reverses it,
/// which matches created-at descending.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<Vec<Session>>,
}

impl InMemorySessionRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().unwrap();

        // Same constraint the database enforces with a partial unique index.
        let active_exists = sessions
            .iter()
            .any(|s| s.couple_id() == session.couple_id() && !s.is_terminal());
        if active_exists {
            return Err(DomainError::new(
                ErrorCode::ActiveSessionExists,
                "There is already an active session",
            ));
        }

        sessions.push(session.clone());
        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.iter().position(|s| s.id() == session.id()) {
            Some(pos) => {
                sessions[pos] = session.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn find_active_by_couple(
        &self,
        couple_id: &CoupleId,
    ) -> Result<Option<Session>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.couple_id() == couple_id && !s.is_terminal())
            .cloned())
    }

    async fn find_by_couple(&self, couple_id: &CoupleId) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.lock().unwrap();
        let mut matching: Vec<Session> = sessions
            .iter()
            .filter(|s| s.couple_id() == couple_id)
            .cloned()
            .collect();
        matching.reverse();
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionStatus, UserId};

    fn session_for(couple_id: CoupleId) -> Session {
        Session::new(
            SessionId::new(),
            couple_id,
            UserId::new("alice").unwrap(),
            None,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_rejects_second_active_session() {
        let repo = InMemorySessionRepository::new();
        let couple_id = CoupleId::new();
        repo.create(&session_for(couple_id)).await.unwrap();

        let err = repo.create(&session_for(couple_id)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ActiveSessionExists);
    }

    #[tokio::test]
    async fn terminal_sessions_do_not_block_creation() {
        let repo = InMemorySessionRepository::new();
        let couple_id = CoupleId::new();
        let mut first = session_for(couple_id);
        repo.create(&first).await.unwrap();

        first.update_status(SessionStatus::Resolved).unwrap();
        repo.update(&first).await.unwrap();

        assert!(repo.create(&session_for(couple_id)).await.is_ok());
    }

    #[tokio::test]
    async fn find_by_couple_returns_newest_first() {
        let repo = InMemorySessionRepository::new();
        let couple_id = CoupleId::new();

        let mut first = session_for(couple_id);
        repo.create(&first).await.unwrap();
        first.update_status(SessionStatus::Resolved).unwrap();
        repo.update(&first).await.unwrap();

        let second = session_for(couple_id);
        repo.create(&second).await.unwrap();

        let all = repo.find_by_couple(&couple_id).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id(), second.id());
        assert_eq!(all[1].id(), first.id());
    }

    #[tokio::test]
    async fn find_active_skips_terminal_sessions() {
        let repo = InMemorySessionRepository::new();
        let couple_id = CoupleId::new();
        let mut session = session_for(couple_id);
        repo.create(&session).await.unwrap();

        assert!(repo
            .find_active_by_couple(&couple_id)
            .await
            .unwrap()
            .is_some());

        session.update_status(SessionStatus::Abandoned).unwrap();
        repo.update(&session).await.unwrap();

        assert!(repo
            .find_active_by_couple(&couple_id)
            .await
            .unwrap()
            .is_none());
    }
}
