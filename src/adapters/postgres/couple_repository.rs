//! PostgreSQL implementation of CoupleRepository.
//!
//! The one-couple-per-user and one-token invariants live on unique
//! indexes; a violation racing past the in-process checks surfaces as the
//! Conflict it models.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::couple::Couple;
use crate::domain::foundation::{
    CoupleId, DomainError, ErrorCode, InviteToken, Timestamp, UserId,
};
use crate::ports::CoupleRepository;

/// PostgreSQL implementation of CoupleRepository.
#[derive(Clone)]
pub struct PostgresCoupleRepository {
    pool: PgPool,
}

impl PostgresCoupleRepository {
    /// Creates a new PostgresCoupleRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoupleRepository for PostgresCoupleRepository {
    async fn create(&self, couple: &Couple) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO couples (
                id, user_a_id, user_b_id, invite_token, agreement_signed_at,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(couple.id().as_uuid())
        .bind(couple.user_a_id().as_str())
        .bind(couple.user_b_id().map(|u| u.as_str()))
        .bind(couple.invite_token().map(|t| t.as_str()))
        .bind(couple.agreement_signed_at().map(|t| *t.as_datetime()))
        .bind(couple.created_at().as_datetime())
        .bind(couple.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::new(
                ErrorCode::AlreadyPaired,
                "User is already part of a couple",
            ),
            _ => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert couple: {}", e),
            ),
        })?;

        Ok(())
    }

    async fn update(&self, couple: &Couple) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE couples SET
                user_b_id = $2,
                invite_token = $3,
                agreement_signed_at = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(couple.id().as_uuid())
        .bind(couple.user_b_id().map(|u| u.as_str()))
        .bind(couple.invite_token().map(|t| t.as_str()))
        .bind(couple.agreement_signed_at().map(|t| *t.as_datetime()))
        .bind(couple.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // Filling slot B with a user another row already holds.
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::new(
                ErrorCode::AlreadyPaired,
                "User is already part of a couple",
            ),
            _ => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update couple: {}", e),
            ),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CoupleNotFound,
                format!("Couple not found: {}", couple.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CoupleId) -> Result<Option<Couple>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_a_id, user_b_id, invite_token, agreement_signed_at,
                   created_at, updated_at
            FROM couples
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch couple: {}", e),
            )
        })?;

        row.map(row_to_couple).transpose()
    }

    async fn find_by_member(&self, user_id: &UserId) -> Result<Option<Couple>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_a_id, user_b_id, invite_token, agreement_signed_at,
                   created_at, updated_at
            FROM couples
            WHERE user_a_id = $1 OR user_b_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch couple by member: {}", e),
            )
        })?;

        row.map(row_to_couple).transpose()
    }

    async fn find_by_token(&self, token: &InviteToken) -> Result<Option<Couple>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_a_id, user_b_id, invite_token, agreement_signed_at,
                   created_at, updated_at
            FROM couples
            WHERE invite_token = $1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch couple by token: {}", e),
            )
        })?;

        row.map(row_to_couple).transpose()
    }
}

fn row_to_couple(row: sqlx::postgres::PgRow) -> Result<Couple, DomainError> {
    let column_error = |e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read couple row: {}", e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(column_error)?;
    let user_a_id: String = row.try_get("user_a_id").map_err(column_error)?;
    let user_b_id: Option<String> = row.try_get("user_b_id").map_err(column_error)?;
    let invite_token: Option<String> = row.try_get("invite_token").map_err(column_error)?;
    let agreement_signed_at: Option<chrono::DateTime<chrono::Utc>> =
        row.try_get("agreement_signed_at").map_err(column_error)?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(column_error)?;
    let updated_at: chrono::DateTime<chrono::Utc> =
        row.try_get("updated_at").map_err(column_error)?;

    let invalid = |e: crate::domain::foundation::ValidationError| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid couple row: {}", e),
        )
    };

    Ok(Couple::reconstitute(
        CoupleId::from_uuid(id),
        UserId::new(user_a_id).map_err(invalid)?,
        user_b_id.map(UserId::new).transpose().map_err(invalid)?,
        invite_token
            .as_deref()
            .map(InviteToken::parse)
            .transpose()
            .map_err(invalid)?,
        agreement_signed_at.map(Timestamp::from_datetime),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
