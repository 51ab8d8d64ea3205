//! SubmitInterviewHandler - record a partner's interview and advance the
//! session through the derived-status rule.

use std::sync::Arc;

use crate::domain::foundation::{InterviewId, SessionId, UserId};
use crate::domain::session::progress::derive_status;
use crate::domain::session::{Interview, InterviewResponses, SessionError};
use crate::ports::{InterviewRepository, SessionRepository};

use super::access::{SessionAccess, SessionContext};

/// Command to submit (or resubmit) an interview.
#[derive(Debug, Clone)]
pub struct SubmitInterviewCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub responses: InterviewResponses,
    pub notes: Option<String>,
}

/// Result of an interview submission.
#[derive(Debug, Clone)]
pub struct SubmitInterviewResult {
    /// The just-written interview row.
    pub interview: Interview,
    /// The session after any derived transition, with relations.
    pub session: SessionContext,
}

/// Handler for interview submission.
pub struct SubmitInterviewHandler {
    access: Arc<SessionAccess>,
    sessions: Arc<dyn SessionRepository>,
    interviews: Arc<dyn InterviewRepository>,
}

impl SubmitInterviewHandler {
    pub fn new(
        access: Arc<SessionAccess>,
        sessions: Arc<dyn SessionRepository>,
        interviews: Arc<dyn InterviewRepository>,
    ) -> Self {
        Self {
            access,
            sessions,
            interviews,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitInterviewCommand,
    ) -> Result<SubmitInterviewResult, SessionError> {
        let ctx = self.access.load(&cmd.session_id, &cmd.user_id).await?;

        // One row per (session, user): resubmission overwrites.
        let interview = match self
            .interviews
            .find_by_session_and_user(&cmd.session_id, &cmd.user_id)
            .await?
        {
            Some(mut existing) => {
                existing.resubmit(cmd.responses, cmd.notes)?;
                self.interviews.update(&existing).await?;
                existing
            }
            None => {
                let interview = Interview::new(
                    InterviewId::new(),
                    cmd.session_id,
                    cmd.user_id.clone(),
                    cmd.responses,
                    cmd.notes,
                )?;
                self.interviews.create(&interview).await?;
                interview
            }
        };

        let interviews = self.interviews.find_by_session(&cmd.session_id).await?;
        let next = derive_status(ctx.session.status(), &ctx.couple, &interviews);

        let mut session = ctx.session;
        if session.apply_derived(next) {
            self.sessions.update(&session).await?;
        }

        Ok(SubmitInterviewResult {
            interview,
            session: SessionContext {
                session,
                couple: ctx.couple,
                interviews,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCoupleRepository, InMemoryInterviewRepository, InMemorySessionRepository,
    };
    use crate::domain::couple::Couple;
    use crate::domain::foundation::{CoupleId, InviteToken, SessionStatus};
    use crate::domain::session::Session;
    use crate::ports::CoupleRepository;
    use serde_json::json;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn responses(answer: &str) -> InterviewResponses {
        let mut map = InterviewResponses::new();
        map.insert("q1".to_string(), json!(answer));
        map
    }

    struct Fixture {
        handler: SubmitInterviewHandler,
        sessions: Arc<InMemorySessionRepository>,
        session_id: SessionId,
    }

    async fn fixture() -> Fixture {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let sessions = Arc::new(InMemorySessionRepository::new());
        let interviews = Arc::new(InMemoryInterviewRepository::new());

        let mut couple = Couple::invite(CoupleId::new(), user("alice"), InviteToken::generate());
        couple.accept(user("bob")).unwrap();
        couple.sign_agreement().unwrap();
        couples.create(&couple).await.unwrap();

        let session =
            Session::new(SessionId::new(), *couple.id(), user("alice"), None, None).unwrap();
        sessions.create(&session).await.unwrap();

        let access = Arc::new(SessionAccess::new(
            sessions.clone(),
            couples,
            interviews.clone(),
        ));

        Fixture {
            handler: SubmitInterviewHandler::new(access, sessions.clone(), interviews),
            sessions,
            session_id: *session.id(),
        }
    }

    fn submit(fixture: &Fixture, caller: &str, answer: &str) -> SubmitInterviewCommand {
        SubmitInterviewCommand {
            session_id: fixture.session_id,
            user_id: user(caller),
            responses: responses(answer),
            notes: None,
        }
    }

    #[tokio::test]
    async fn first_interview_moves_session_to_in_progress() {
        let fixture = fixture().await;
        let result = fixture
            .handler
            .handle(submit(&fixture, "alice", "we argue"))
            .await
            .unwrap();

        assert_eq!(result.session.session.status(), SessionStatus::InProgress);
        assert_eq!(result.interview.user_id(), &user("alice"));
        assert_eq!(result.session.interviews.len(), 1);
    }

    #[tokio::test]
    async fn second_interview_moves_session_to_unpacking_ready() {
        let fixture = fixture().await;
        fixture
            .handler
            .handle(submit(&fixture, "alice", "a"))
            .await
            .unwrap();
        let result = fixture
            .handler
            .handle(submit(&fixture, "bob", "b"))
            .await
            .unwrap();

        assert_eq!(
            result.session.session.status(),
            SessionStatus::UnpackingReady
        );
        assert_eq!(result.session.interviews.len(), 2);
    }

    #[tokio::test]
    async fn resubmission_updates_row_without_duplicating() {
        let fixture = fixture().await;
        let first = fixture
            .handler
            .handle(submit(&fixture, "alice", "first"))
            .await
            .unwrap();
        let second = fixture
            .handler
            .handle(submit(&fixture, "alice", "second"))
            .await
            .unwrap();

        assert_eq!(first.interview.id(), second.interview.id());
        assert_eq!(
            second.interview.responses().get("q1"),
            Some(&json!("second"))
        );
        assert_eq!(second.session.interviews.len(), 1);
    }

    #[tokio::test]
    async fn resubmission_never_moves_status_backward() {
        let fixture = fixture().await;
        fixture
            .handler
            .handle(submit(&fixture, "alice", "a"))
            .await
            .unwrap();
        fixture
            .handler
            .handle(submit(&fixture, "bob", "b"))
            .await
            .unwrap();

        let result = fixture
            .handler
            .handle(submit(&fixture, "alice", "revised"))
            .await
            .unwrap();
        assert_eq!(
            result.session.session.status(),
            SessionStatus::UnpackingReady
        );
    }

    #[tokio::test]
    async fn unchanged_status_skips_the_session_write() {
        let fixture = fixture().await;
        fixture
            .handler
            .handle(submit(&fixture, "alice", "a"))
            .await
            .unwrap();
        let before = fixture
            .sessions
            .find_by_id(&fixture.session_id)
            .await
            .unwrap()
            .unwrap();

        fixture
            .handler
            .handle(submit(&fixture, "alice", "revised"))
            .await
            .unwrap();
        let after = fixture
            .sessions
            .find_by_id(&fixture.session_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(before.updated_at(), after.updated_at());
    }

    #[tokio::test]
    async fn empty_responses_are_rejected() {
        let fixture = fixture().await;
        let result = fixture
            .handler
            .handle(SubmitInterviewCommand {
                session_id: fixture.session_id,
                user_id: user("alice"),
                responses: InterviewResponses::new(),
                notes: None,
            })
            .await;
        assert!(matches!(
            result.unwrap_err(),
            SessionError::ValidationFailed(_)
        ));
    }

    #[tokio::test]
    async fn outsider_cannot_submit() {
        let fixture = fixture().await;
        let result = fixture
            .handler
            .handle(submit(&fixture, "carol", "intruding"))
            .await;
        assert_eq!(result.unwrap_err(), SessionError::Forbidden);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let fixture = fixture().await;
        let missing = SessionId::new();
        let result = fixture
            .handler
            .handle(SubmitInterviewCommand {
                session_id: missing,
                user_id: user("alice"),
                responses: responses("a"),
                notes: None,
            })
            .await;
        assert_eq!(result.unwrap_err(), SessionError::NotFound(missing));
    }
}
