//! Session-specific error types.

use crate::domain::couple::CoupleError;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Errors raised by session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// Caller is not a member of the session's couple.
    Forbidden,
    /// Caller has no couple.
    CoupleNotFound,
    /// Partner slot still empty.
    PartnerNotJoined,
    /// Agreement not yet signed.
    AgreementNotSigned,
    /// A non-terminal session already exists for the couple.
    ActiveSessionExists,
    /// Status string is not one of the recognized values.
    InvalidStatus(String),
    /// Session is terminal and cannot change status.
    Completed,
    /// Input failed a shape/length guard.
    ValidationFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::Forbidden => ErrorCode::Forbidden,
            SessionError::CoupleNotFound => ErrorCode::CoupleNotFound,
            SessionError::PartnerNotJoined => ErrorCode::PartnerNotJoined,
            SessionError::AgreementNotSigned => ErrorCode::AgreementNotSigned,
            SessionError::ActiveSessionExists => ErrorCode::ActiveSessionExists,
            SessionError::InvalidStatus(_) => ErrorCode::InvalidStatus,
            SessionError::Completed => ErrorCode::SessionCompleted,
            SessionError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::Forbidden => "You are not part of this session".to_string(),
            SessionError::CoupleNotFound => "No couple found for this user".to_string(),
            SessionError::PartnerNotJoined => {
                "Your partner must join before starting a session".to_string()
            }
            SessionError::AgreementNotSigned => {
                "Both partners must sign the agreement before starting a session".to_string()
            }
            SessionError::ActiveSessionExists => {
                "There is already an active session".to_string()
            }
            SessionError::InvalidStatus(status) => format!("Invalid status: {}", status),
            SessionError::Completed => "Cannot update status of a completed session".to_string(),
            SessionError::ValidationFailed(msg) => msg.clone(),
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CoupleNotFound => SessionError::CoupleNotFound,
            ErrorCode::Forbidden => SessionError::Forbidden,
            ErrorCode::PartnerNotJoined => SessionError::PartnerNotJoined,
            ErrorCode::AgreementNotSigned => SessionError::AgreementNotSigned,
            ErrorCode::ActiveSessionExists => SessionError::ActiveSessionExists,
            ErrorCode::SessionCompleted => SessionError::Completed,
            ErrorCode::ValidationFailed => SessionError::ValidationFailed(err.message),
            _ => SessionError::Infrastructure(err.message),
        }
    }
}

impl From<CoupleError> for SessionError {
    fn from(err: CoupleError) -> Self {
        match err {
            CoupleError::NotFound => SessionError::CoupleNotFound,
            CoupleError::ValidationFailed(msg) => SessionError::ValidationFailed(msg),
            CoupleError::Infrastructure(msg) => SessionError::Infrastructure(msg),
            other => SessionError::Infrastructure(other.message()),
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::ValidationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCategory;

    #[test]
    fn session_not_found_is_not_found_category() {
        let err = SessionError::NotFound(SessionId::new());
        assert_eq!(err.code().category(), ErrorCategory::NotFound);
    }

    #[test]
    fn forbidden_is_forbidden_category() {
        assert_eq!(
            SessionError::Forbidden.code().category(),
            ErrorCategory::Forbidden
        );
    }

    #[test]
    fn precondition_failures_are_conflicts() {
        for err in [
            SessionError::PartnerNotJoined,
            SessionError::AgreementNotSigned,
            SessionError::ActiveSessionExists,
            SessionError::InvalidStatus("bogus".to_string()),
            SessionError::Completed,
        ] {
            assert_eq!(err.code().category(), ErrorCategory::Conflict, "{:?}", err);
        }
    }

    #[test]
    fn couple_not_found_converts_from_couple_error() {
        assert_eq!(
            SessionError::from(CoupleError::NotFound),
            SessionError::CoupleNotFound
        );
    }

    #[test]
    fn invalid_status_message_names_the_value() {
        let err = SessionError::InvalidStatus("archived".to_string());
        assert_eq!(err.message(), "Invalid status: archived");
    }
}
