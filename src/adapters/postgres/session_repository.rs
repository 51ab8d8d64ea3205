//! PostgreSQL implementation of SessionRepository.
//!
//! A partial unique index on `couple_id` (over non-terminal rows) backs
//! the one-active-session-per-couple invariant.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    CoupleId, DomainError, ErrorCode, SessionId, SessionStatus, Timestamp, UserId,
};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn create(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, couple_id, status, initiated_by, topic, context,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.couple_id().as_uuid())
        .bind(session.status().as_str())
        .bind(session.initiated_by().as_str())
        .bind(session.topic())
        .bind(session.context())
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::new(
                ErrorCode::ActiveSessionExists,
                "There is already an active session",
            ),
            _ => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert session: {}", e),
            ),
        })?;

        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                status = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.status().as_str())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::new(
                ErrorCode::ActiveSessionExists,
                "There is already an active session",
            ),
            _ => DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update session: {}", e),
            ),
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, couple_id, status, initiated_by, topic, context,
                   created_at, updated_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session: {}", e),
            )
        })?;

        row.map(row_to_session).transpose()
    }

    async fn find_active_by_couple(
        &self,
        couple_id: &CoupleId,
    ) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, couple_id, status, initiated_by, topic, context,
                   created_at, updated_at
            FROM sessions
            WHERE couple_id = $1 AND status NOT IN ('resolved', 'abandoned')
            "#,
        )
        .bind(couple_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch active session: {}", e),
            )
        })?;

        row.map(row_to_session).transpose()
    }

    async fn find_by_couple(&self, couple_id: &CoupleId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, couple_id, status, initiated_by, topic, context,
                   created_at, updated_at
            FROM sessions
            WHERE couple_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(couple_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch sessions by couple: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<Session, DomainError> {
    let column_error = |e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read session row: {}", e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(column_error)?;
    let couple_id: uuid::Uuid = row.try_get("couple_id").map_err(column_error)?;
    let status_str: String = row.try_get("status").map_err(column_error)?;
    let initiated_by: String = row.try_get("initiated_by").map_err(column_error)?;
    let topic: Option<String> = row.try_get("topic").map_err(column_error)?;
    let context: Option<String> = row.try_get("context").map_err(column_error)?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(column_error)?;
    let updated_at: chrono::DateTime<chrono::Utc> =
        row.try_get("updated_at").map_err(column_error)?;

    let status: SessionStatus = status_str.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", status_str),
        )
    })?;

    Ok(Session::reconstitute(
        SessionId::from_uuid(id),
        CoupleId::from_uuid(couple_id),
        status,
        UserId::new(initiated_by).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid session row: {}", e),
            )
        })?,
        topic,
        context,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
