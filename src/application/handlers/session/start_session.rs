//! StartSessionHandler - open a new mediation session for a couple.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{Interview, Session, SessionError};
use crate::ports::{CoupleRepository, SessionRepository};

/// Command to start a session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub user_id: UserId,
    pub topic: Option<String>,
    pub context: Option<String>,
}

/// A session returned with its (possibly empty) interview list.
#[derive(Debug, Clone)]
pub struct SessionWithInterviews {
    pub session: Session,
    pub interviews: Vec<Interview>,
}

/// Handler for session creation.
pub struct StartSessionHandler {
    sessions: Arc<dyn SessionRepository>,
    couples: Arc<dyn CoupleRepository>,
}

impl StartSessionHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>, couples: Arc<dyn CoupleRepository>) -> Self {
        Self { sessions, couples }
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<SessionWithInterviews, SessionError> {
        let couple = self
            .couples
            .find_by_member(&cmd.user_id)
            .await?
            .ok_or(SessionError::CoupleNotFound)?;

        // Ordered checks: partnership before agreement.
        if !couple.has_partner() {
            return Err(SessionError::PartnerNotJoined);
        }
        if !couple.agreement_signed() {
            return Err(SessionError::AgreementNotSigned);
        }

        if self
            .sessions
            .find_active_by_couple(couple.id())
            .await?
            .is_some()
        {
            return Err(SessionError::ActiveSessionExists);
        }

        let session = Session::new(
            SessionId::new(),
            *couple.id(),
            cmd.user_id,
            cmd.topic,
            cmd.context,
        )?;
        self.sessions.create(&session).await?;

        Ok(SessionWithInterviews {
            session,
            interviews: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCoupleRepository, InMemorySessionRepository};
    use crate::domain::couple::Couple;
    use crate::domain::foundation::{CoupleId, InviteToken, SessionStatus};
    use crate::domain::session::MAX_TOPIC_LENGTH;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    struct Fixture {
        couples: Arc<InMemoryCoupleRepository>,
        sessions: Arc<InMemorySessionRepository>,
        handler: StartSessionHandler,
    }

    fn fixture() -> Fixture {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let sessions = Arc::new(InMemorySessionRepository::new());
        Fixture {
            couples: couples.clone(),
            sessions: sessions.clone(),
            handler: StartSessionHandler::new(sessions, couples),
        }
    }

    async fn seed_couple(fixture: &Fixture, joined: bool, signed: bool) -> Couple {
        let mut couple = Couple::invite(CoupleId::new(), user("alice"), InviteToken::generate());
        if joined {
            couple.accept(user("bob")).unwrap();
        }
        if signed {
            couple.sign_agreement().unwrap();
        }
        fixture.couples.create(&couple).await.unwrap();
        couple
    }

    fn start_cmd() -> StartSessionCommand {
        StartSessionCommand {
            user_id: user("alice"),
            topic: Some("Chores".to_string()),
            context: None,
        }
    }

    #[tokio::test]
    async fn starts_session_in_initiated_status() {
        let fixture = fixture();
        seed_couple(&fixture, true, true).await;

        let result = fixture.handler.handle(start_cmd()).await.unwrap();
        assert_eq!(result.session.status(), SessionStatus::Initiated);
        assert_eq!(result.session.initiated_by(), &user("alice"));
        assert_eq!(result.session.topic(), Some("Chores"));
        assert!(result.interviews.is_empty());
    }

    #[tokio::test]
    async fn fails_without_a_couple() {
        let fixture = fixture();
        let result = fixture.handler.handle(start_cmd()).await;
        assert_eq!(result.unwrap_err(), SessionError::CoupleNotFound);
    }

    #[tokio::test]
    async fn fails_before_partner_joins() {
        let fixture = fixture();
        seed_couple(&fixture, false, false).await;

        let result = fixture.handler.handle(start_cmd()).await;
        assert_eq!(result.unwrap_err(), SessionError::PartnerNotJoined);
    }

    #[tokio::test]
    async fn fails_before_agreement_is_signed() {
        let fixture = fixture();
        seed_couple(&fixture, true, false).await;

        let result = fixture.handler.handle(start_cmd()).await;
        assert_eq!(result.unwrap_err(), SessionError::AgreementNotSigned);
    }

    #[tokio::test]
    async fn fails_while_a_session_is_active() {
        let fixture = fixture();
        seed_couple(&fixture, true, true).await;

        fixture.handler.handle(start_cmd()).await.unwrap();
        let result = fixture.handler.handle(start_cmd()).await;
        assert_eq!(result.unwrap_err(), SessionError::ActiveSessionExists);
    }

    #[tokio::test]
    async fn terminal_session_does_not_block_a_new_one() {
        let fixture = fixture();
        seed_couple(&fixture, true, true).await;

        let first = fixture.handler.handle(start_cmd()).await.unwrap();
        let mut session = first.session;
        session.update_status(SessionStatus::Resolved).unwrap();
        fixture.sessions.update(&session).await.unwrap();

        assert!(fixture.handler.handle(start_cmd()).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_over_long_topic() {
        let fixture = fixture();
        seed_couple(&fixture, true, true).await;

        let result = fixture
            .handler
            .handle(StartSessionCommand {
                user_id: user("alice"),
                topic: Some("x".repeat(MAX_TOPIC_LENGTH + 1)),
                context: None,
            })
            .await;
        assert!(matches!(
            result.unwrap_err(),
            SessionError::ValidationFailed(_)
        ));
    }
}
