//! In-memory implementation of InterviewRepository.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserId};
use crate::domain::session::Interview;
use crate::ports::InterviewRepository;

/// In-memory interview store.
#[derive(Debug, Default)]
pub struct InMemoryInterviewRepository {
    interviews: Mutex<Vec<Interview>>,
}

impl InMemoryInterviewRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviewRepository {
    async fn create(&self, interview: &Interview) -> Result<(), DomainError> {
        let mut interviews = self.interviews.lock().unwrap();

        // Unique (session_id, user_id), same as the database index.
        let duplicate = interviews.iter().any(|existing| {
            existing.session_id() == interview.session_id()
                && existing.user_id() == interview.user_id()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Interview already exists for this session and user",
            ));
        }

        interviews.push(interview.clone());
        Ok(())
    }

    async fn update(&self, interview: &Interview) -> Result<(), DomainError> {
        let mut interviews = self.interviews.lock().unwrap();
        match interviews.iter().position(|i| i.id() == interview.id()) {
            Some(pos) => {
                interviews[pos] = interview.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Interview not found: {}", interview.id()),
            )),
        }
    }

    async fn find_by_session_and_user(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<Option<Interview>, DomainError> {
        Ok(self
            .interviews
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.session_id() == session_id && i.user_id() == user_id)
            .cloned())
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Interview>, DomainError> {
        Ok(self
            .interviews
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.session_id() == session_id)
            .cloned()
            .collect())
    }
}
