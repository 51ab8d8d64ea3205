//! AcceptInviteHandler - join a couple through an invite token.

use std::sync::Arc;

use crate::domain::couple::CoupleError;
use crate::domain::foundation::{InviteToken, UserId};
use crate::ports::{CoupleRepository, UserDirectory};

use super::view::{project_couple, CoupleView};

/// Command to accept a pairing invite.
///
/// The token arrives as an untrusted string and is shape-checked before
/// any lookup.
#[derive(Debug, Clone)]
pub struct AcceptInviteCommand {
    pub user_id: UserId,
    pub invite_token: String,
}

/// Handler for invite acceptance.
pub struct AcceptInviteHandler {
    couples: Arc<dyn CoupleRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl AcceptInviteHandler {
    pub fn new(couples: Arc<dyn CoupleRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { couples, directory }
    }

    pub async fn handle(&self, cmd: AcceptInviteCommand) -> Result<CoupleView, CoupleError> {
        let token = InviteToken::parse(&cmd.invite_token)?;

        let mut couple = self
            .couples
            .find_by_token(&token)
            .await?
            .ok_or(CoupleError::InviteNotFound)?;

        // Rejects self-acceptance and an already-filled slot B.
        couple.accept(cmd.user_id.clone())?;

        if let Some(existing) = self.couples.find_by_member(&cmd.user_id).await? {
            if existing.id() != couple.id() {
                return Err(CoupleError::AlreadyPaired);
            }
        }

        self.couples.update(&couple).await?;
        Ok(project_couple(&couple, self.directory.as_ref()).await?)
    }
}
