//! SignAgreementHandler - record the mediation agreement signature.

use std::sync::Arc;

use crate::domain::couple::CoupleError;
use crate::domain::foundation::UserId;
use crate::ports::{CoupleRepository, UserDirectory};

use super::view::{project_couple, CoupleView};

/// Command to sign the mediation agreement.
#[derive(Debug, Clone)]
pub struct SignAgreementCommand {
    pub user_id: UserId,
}

/// Handler for agreement signing.
pub struct SignAgreementHandler {
    couples: Arc<dyn CoupleRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl SignAgreementHandler {
    pub fn new(couples: Arc<dyn CoupleRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { couples, directory }
    }

    pub async fn handle(&self, cmd: SignAgreementCommand) -> Result<CoupleView, CoupleError> {
        let mut couple = self
            .couples
            .find_by_member(&cmd.user_id)
            .await?
            .ok_or(CoupleError::NotFound)?;

        // Repeat signing keeps the original timestamp and skips the write.
        if couple.sign_agreement()? {
            self.couples.update(&couple).await?;
        }

        Ok(project_couple(&couple, self.directory.as_ref()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCoupleRepository, InMemoryUserDirectory};
    use crate::domain::couple::Couple;
    use crate::domain::foundation::{CoupleId, InviteToken};
    use crate::ports::CoupleRepository as _;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn directory() -> Arc<InMemoryUserDirectory> {
        Arc::new(
            InMemoryUserDirectory::new()
                .with_test_user("alice")
                .with_test_user("bob"),
        )
    }

    #[tokio::test]
    async fn signing_before_partner_joins_is_a_conflict() {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let couple = Couple::invite(CoupleId::new(), user("alice"), InviteToken::generate());
        couples.create(&couple).await.unwrap();

        let handler = SignAgreementHandler::new(couples, directory());
        let result = handler
            .handle(SignAgreementCommand {
                user_id: user("alice"),
            })
            .await;
        assert_eq!(result.unwrap_err(), CoupleError::PartnerNotJoined);
    }

    #[tokio::test]
    async fn first_signature_sets_timestamp_second_is_noop() {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let mut couple = Couple::invite(CoupleId::new(), user("alice"), InviteToken::generate());
        couple.accept(user("bob")).unwrap();
        couples.create(&couple).await.unwrap();

        let handler = SignAgreementHandler::new(couples, directory());
        let cmd = SignAgreementCommand {
            user_id: user("alice"),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let signed_at = first.agreement_signed_at.unwrap();

        let second = handler.handle(cmd).await.unwrap();
        assert_eq!(second.agreement_signed_at, Some(signed_at));
    }

    #[tokio::test]
    async fn signing_without_a_couple_is_not_found() {
        let couples = Arc::new(InMemoryCoupleRepository::new());
        let handler = SignAgreementHandler::new(couples, directory());

        let result = handler
            .handle(SignAgreementCommand {
                user_id: user("alice"),
            })
            .await;
        assert_eq!(result.unwrap_err(), CoupleError::NotFound);
    }
}
