//! PostgreSQL implementation of InterviewRepository.
//!
//! Responses are stored as jsonb; a unique index on
//! `(session_id, user_id)` guarantees one row per member per session.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, InterviewId, SessionId, Timestamp, UserId,
};
use crate::domain::session::{Interview, InterviewResponses};
use crate::ports::InterviewRepository;

/// PostgreSQL implementation of InterviewRepository.
#[derive(Clone)]
pub struct PostgresInterviewRepository {
    pool: PgPool,
}

impl PostgresInterviewRepository {
    /// Creates a new PostgresInterviewRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewRepository for PostgresInterviewRepository {
    async fn create(&self, interview: &Interview) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO interviews (
                id, session_id, user_id, responses, notes, completed_at, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(interview.id().as_uuid())
        .bind(interview.session_id().as_uuid())
        .bind(interview.user_id().as_str())
        .bind(serde_json::Value::Object(interview.responses().clone()))
        .bind(interview.notes())
        .bind(interview.completed_at().as_datetime())
        .bind(interview.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert interview: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, interview: &Interview) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE interviews SET
                responses = $2,
                notes = $3,
                completed_at = $4
            WHERE id = $1
            "#,
        )
        .bind(interview.id().as_uuid())
        .bind(serde_json::Value::Object(interview.responses().clone()))
        .bind(interview.notes())
        .bind(interview.completed_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update interview: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Interview not found: {}", interview.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_session_and_user(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<Option<Interview>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, session_id, user_id, responses, notes, completed_at, created_at
            FROM interviews
            WHERE session_id = $1 AND user_id = $2
            "#,
        )
        .bind(session_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch interview: {}", e),
            )
        })?;

        row.map(row_to_interview).transpose()
    }

    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Interview>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, user_id, responses, notes, completed_at, created_at
            FROM interviews
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch interviews: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_interview).collect()
    }
}

fn row_to_interview(row: sqlx::postgres::PgRow) -> Result<Interview, DomainError> {
    let column_error = |e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to read interview row: {}", e),
        )
    };

    let id: uuid::Uuid = row.try_get("id").map_err(column_error)?;
    let session_id: uuid::Uuid = row.try_get("session_id").map_err(column_error)?;
    let user_id: String = row.try_get("user_id").map_err(column_error)?;
    let responses: serde_json::Value = row.try_get("responses").map_err(column_error)?;
    let notes: Option<String> = row.try_get("notes").map_err(column_error)?;
    let completed_at: chrono::DateTime<chrono::Utc> =
        row.try_get("completed_at").map_err(column_error)?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(column_error)?;

    let responses: InterviewResponses = match responses {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Interview responses is not an object: {}", other),
            ))
        }
    };

    Ok(Interview::reconstitute(
        InterviewId::from_uuid(id),
        SessionId::from_uuid(session_id),
        UserId::new(user_id).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid interview row: {}", e),
            )
        })?,
        responses,
        notes,
        Timestamp::from_datetime(completed_at),
        Timestamp::from_datetime(created_at),
    ))
}
