//! Couple repository port.
//!
//! Defines the contract for persisting and retrieving Couple aggregates.
//!
//! # Consistency
//!
//! The one-couple-per-user and one-token invariants span rows, so they are
//! enforced by the store (unique constraints / transactional
//! check-then-write), not by in-process locking. Implementations surface a
//! unique-constraint hit as the Conflict code it models.

use crate::domain::couple::Couple;
use crate::domain::foundation::{CoupleId, DomainError, InviteToken, UserId};
use async_trait::async_trait;

/// Repository port for Couple aggregate persistence.
#[async_trait]
pub trait CoupleRepository: Send + Sync {
    /// Save a new couple.
    ///
    /// # Errors
    ///
    /// - `AlreadyPaired` if the creator already occupies a slot elsewhere
    /// - `DatabaseError` on persistence failure
    async fn create(&self, couple: &Couple) -> Result<(), DomainError>;

    /// Update an existing couple.
    ///
    /// # Errors
    ///
    /// - `CoupleNotFound` if the couple doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, couple: &Couple) -> Result<(), DomainError>;

    /// Find a couple by its ID.
    async fn find_by_id(&self, id: &CoupleId) -> Result<Option<Couple>, DomainError>;

    /// Find the couple a user belongs to, in either slot.
    async fn find_by_member(&self, user_id: &UserId) -> Result<Option<Couple>, DomainError>;

    /// Find a couple by its pending invite token.
    ///
    /// Returns `None` for tokens that were never issued or already consumed.
    async fn find_by_token(&self, token: &InviteToken) -> Result<Option<Couple>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn couple_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CoupleRepository) {}
    }
}
