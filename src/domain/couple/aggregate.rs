//! Couple aggregate entity.
//!
//! A couple pairs exactly two users. The creator occupies slot A; slot B is
//! filled when a partner accepts the invite token. Both members must be
//! present before the mediation agreement can be signed.
//!
//! # Invariants
//!
//! - A user belongs to at most one couple (either slot) at a time; the
//!   store enforces this across rows, the aggregate within its own row.
//! - `invite_token` is present only while slot B is empty, and is cleared
//!   in the same write that fills slot B.
//! - Slot B never transitions back to empty and is never reassigned.
//! - `agreement_signed_at` is set once and never re-timestamped.

use crate::domain::foundation::{
    CoupleId, DomainError, ErrorCode, InviteToken, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

/// Couple aggregate - a pairing between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
    /// Unique identifier for this couple.
    id: CoupleId,

    /// Creator of the couple (inviter).
    user_a_id: UserId,

    /// Partner, once the invite has been accepted.
    user_b_id: Option<UserId>,

    /// Pending invite token; present only while slot B is empty.
    invite_token: Option<InviteToken>,

    /// When both partners signed the mediation agreement.
    agreement_signed_at: Option<Timestamp>,

    /// When the couple was created.
    created_at: Timestamp,

    /// When the couple was last updated.
    updated_at: Timestamp,
}

impl Couple {
    /// Create a new couple with an open invite.
    pub fn invite(id: CoupleId, user_a_id: UserId, token: InviteToken) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_a_id,
            user_b_id: None,
            invite_token: Some(token),
            agreement_signed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a couple from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CoupleId,
        user_a_id: UserId,
        user_b_id: Option<UserId>,
        invite_token: Option<InviteToken>,
        agreement_signed_at: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_a_id,
            user_b_id,
            invite_token,
            agreement_signed_at,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the couple ID.
    pub fn id(&self) -> &CoupleId {
        &self.id
    }

    /// Returns the inviter's user ID.
    pub fn user_a_id(&self) -> &UserId {
        &self.user_a_id
    }

    /// Returns the partner's user ID, if joined.
    pub fn user_b_id(&self) -> Option<&UserId> {
        self.user_b_id.as_ref()
    }

    /// Returns the pending invite token, if any.
    pub fn invite_token(&self) -> Option<&InviteToken> {
        self.invite_token.as_ref()
    }

    /// Returns when the agreement was signed, if it has been.
    pub fn agreement_signed_at(&self) -> Option<&Timestamp> {
        self.agreement_signed_at.as_ref()
    }

    /// Returns when the couple was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the couple was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks whether the partner slot is filled.
    pub fn has_partner(&self) -> bool {
        self.user_b_id.is_some()
    }

    /// Checks whether the agreement has been signed.
    pub fn agreement_signed(&self) -> bool {
        self.agreement_signed_at.is_some()
    }

    /// Checks whether the given user occupies either slot.
    pub fn is_member(&self, user_id: &UserId) -> bool {
        &self.user_a_id == user_id || self.user_b_id.as_ref() == Some(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the pending invite token (re-invite before the partner joins).
    ///
    /// # Errors
    ///
    /// - `AlreadyPaired` if the partner slot is already filled
    pub fn regenerate_invite(&mut self, token: InviteToken) -> Result<(), DomainError> {
        if self.has_partner() {
            return Err(DomainError::new(
                ErrorCode::AlreadyPaired,
                "User is already part of a couple",
            ));
        }

        self.invite_token = Some(token);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Fill the partner slot and consume the invite token.
    ///
    /// Accepting again with the user already in slot B is a no-op rewrite;
    /// any other occupant is a conflict.
    ///
    /// # Errors
    ///
    /// - `SelfAcceptance` if the acceptor is the inviter
    /// - `InviteAlreadyAccepted` if slot B holds a different user
    pub fn accept(&mut self, user_id: UserId) -> Result<(), DomainError> {
        if self.user_a_id == user_id {
            return Err(DomainError::new(
                ErrorCode::SelfAcceptance,
                "You cannot accept your own invite",
            ));
        }

        if let Some(existing) = &self.user_b_id {
            if existing != &user_id {
                return Err(DomainError::new(
                    ErrorCode::InviteAlreadyAccepted,
                    "Invite already accepted by another user",
                ));
            }
        }

        self.user_b_id = Some(user_id);
        self.invite_token = None;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Record the agreement signature.
    ///
    /// Returns `true` if the signature was recorded now, `false` if the
    /// agreement was already signed (the original timestamp is kept).
    ///
    /// # Errors
    ///
    /// - `PartnerNotJoined` if slot B is still empty
    pub fn sign_agreement(&mut self) -> Result<bool, DomainError> {
        if !self.has_partner() {
            return Err(DomainError::new(
                ErrorCode::PartnerNotJoined,
                "Your partner must join before signing",
            ));
        }

        if self.agreement_signed() {
            return Ok(false);
        }

        self.agreement_signed_at = Some(Timestamp::now());
        self.updated_at = Timestamp::now();
        Ok(true)
    }
}
