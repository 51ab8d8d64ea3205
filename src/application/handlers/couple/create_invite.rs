//! CreateInviteHandler - issue or regenerate a pairing invite.

use std::sync::Arc;

use crate::domain::couple::{Couple, CoupleError};
use crate::domain::foundation::{CoupleId, InviteToken, UserId};
use crate::ports::{CoupleRepository, UserDirectory};

use super::view::{project_couple, CoupleView};

/// Command to create (or regenerate) an invite.
#[derive(Debug, Clone)]
pub struct CreateInviteCommand {
    pub user_id: UserId,
}

/// Handler for invite creation.
pub struct CreateInviteHandler {
    couples: Arc<dyn CoupleRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl CreateInviteHandler {
    pub fn new(couples: Arc<dyn CoupleRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { couples, directory }
    }

    pub async fn handle(&self, cmd: CreateInviteCommand) -> Result<CoupleView, CoupleError> {
        let token = InviteToken::generate();

        match self.couples.find_by_member(&cmd.user_id).await? {
            Some(mut couple) => {
                // Re-invite is allowed only while the inviter is still waiting.
                if couple.user_a_id() == &cmd.user_id && !couple.has_partner() {
                    couple.regenerate_invite(token)?;
                    self.couples.update(&couple).await?;
                    Ok(project_couple(&couple, self.directory.as_ref()).await?)
                } else {
                    Err(CoupleError::AlreadyPaired)
                }
            }
            None => {
                let couple = Couple::invite(CoupleId::new(), cmd.user_id, token);
                self.couples.create(&couple).await?;
                Ok(project_couple(&couple, self.directory.as_ref()).await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCoupleRepository, InMemoryUserDirectory};
    use crate::ports::CoupleRepository;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn handler(
        couples: Arc<InMemoryCoupleRepository>,
    ) -> CreateInviteHandler {
        let directory = Arc::new(
            InMemoryUserDirectory::new()
                .with_test_user("alice")
                .with_test_user("bob"),
        );
        CreateInviteHandler::new(couples, directory)
    }

    #[tokio::test]
    async fn creates_couple_with_open_invite() {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let handler = handler(couples.clone());

        let view = handler
            .handle(CreateInviteCommand {
                user_id: user("alice"),
            })
            .await
            .unwrap();

        assert_eq!(view.user_a.id, user("alice"));
        assert!(view.user_b.is_none());
        assert!(view.invite_token.is_some());
        assert_eq!(couples.len(), 1);
    }

    #[tokio::test]
    async fn second_invite_regenerates_token_on_same_couple() {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let handler = handler(couples.clone());
        let cmd = CreateInviteCommand {
            user_id: user("alice"),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_ne!(first.invite_token, second.invite_token);
        assert_eq!(couples.len(), 1);
    }

    #[tokio::test]
    async fn fails_when_caller_is_fully_paired_inviter() {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let handler = handler(couples.clone());

        let view = handler
            .handle(CreateInviteCommand {
                user_id: user("alice"),
            })
            .await
            .unwrap();
        let mut couple = couples.find_by_id(&view.id).await.unwrap().unwrap();
        couple.accept(user("bob")).unwrap();
        couples.update(&couple).await.unwrap();

        let result = handler
            .handle(CreateInviteCommand {
                user_id: user("alice"),
            })
            .await;
        assert_eq!(result.unwrap_err(), CoupleError::AlreadyPaired);
    }

    #[tokio::test]
    async fn fails_when_caller_is_the_joined_partner() {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let handler = handler(couples.clone());

        let view = handler
            .handle(CreateInviteCommand {
                user_id: user("alice"),
            })
            .await
            .unwrap();
        let mut couple = couples.find_by_id(&view.id).await.unwrap().unwrap();
        couple.accept(user("bob")).unwrap();
        couples.update(&couple).await.unwrap();

        let result = handler
            .handle(CreateInviteCommand {
                user_id: user("bob"),
            })
            .await;
        assert_eq!(result.unwrap_err(), CoupleError::AlreadyPaired);
    }
}
