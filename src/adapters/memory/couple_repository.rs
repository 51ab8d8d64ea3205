//! In-memory implementation of CoupleRepository.
//!
//! Backs unit and integration tests without a database. Mirrors the
//! store-level uniqueness rules so tests exercise the same Conflict
//! surfaces as the PostgreSQL adapter.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::couple::Couple;
use crate::domain::foundation::{CoupleId, DomainError, ErrorCode, InviteToken, UserId};
use crate::ports::CoupleRepository;

/// In-memory couple store.
#[derive(Debug, Default)]
pub struct InMemoryCoupleRepository {
    couples: Mutex<Vec<Couple>>,
}

impl InMemoryCoupleRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored couples.
    pub fn len(&self) -> usize {
        self.couples.lock().unwrap().len()
    }

    /// Returns true if no couples are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CoupleRepository for InMemoryCoupleRepository {
    async fn create(&self, couple: &Couple) -> Result<(), DomainError> {
        let mut couples = self.couples.lock().unwrap();

        // Same constraint the database enforces with unique indexes.
        let member_taken = couples.iter().any(|existing| {
            existing.is_member(couple.user_a_id())
                || couple
                    .user_b_id()
                    .map(|b| existing.is_member(b))
                    .unwrap_or(false)
        });
        if member_taken {
            return Err(DomainError::new(
                ErrorCode::AlreadyPaired,
                "User is already part of a couple",
            ));
        }

        couples.push(couple.clone());
        Ok(())
    }

    async fn update(&self, couple: &Couple) -> Result<(), DomainError> {
        let mut couples = self.couples.lock().unwrap();
        match couples.iter().position(|c| c.id() == couple.id()) {
            Some(pos) => {
                couples[pos] = couple.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::CoupleNotFound,
                format!("Couple not found: {}", couple.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &CoupleId) -> Result<Option<Couple>, DomainError> {
        Ok(self
            .couples
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn find_by_member(&self, user_id: &UserId) -> Result<Option<Couple>, DomainError> {
        Ok(self
            .couples
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.is_member(user_id))
            .cloned())
    }

    async fn find_by_token(&self, token: &InviteToken) -> Result<Option<Couple>, DomainError> {
        Ok(self
            .couples
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.invite_token() == Some(token))
            .cloned())
    }
}
