//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a length-cap validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Caller-facing category of an error code.
///
/// Every rule violation surfaces as one of three categories (plus
/// validation and internal buckets); the HTTP layer maps each category to
/// a distinct status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Referenced entity does not exist or is not visible.
    NotFound,
    /// A business-rule precondition is violated.
    Conflict,
    /// Caller is authenticated but not a member of the target couple.
    Forbidden,
    /// Input failed a shape/length guard.
    Validation,
    /// Store or infrastructure failure.
    Internal,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    CoupleNotFound,
    SessionNotFound,
    InviteNotFound,
    UserNotFound,

    // Conflict errors (business-rule preconditions)
    AlreadyPaired,
    SelfAcceptance,
    InviteAlreadyAccepted,
    PartnerNotJoined,
    AgreementNotSigned,
    ActiveSessionExists,
    InvalidStatus,
    SessionCompleted,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Returns the caller-facing category for this code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::ValidationFailed => ErrorCategory::Validation,

            ErrorCode::CoupleNotFound
            | ErrorCode::SessionNotFound
            | ErrorCode::InviteNotFound
            | ErrorCode::UserNotFound => ErrorCategory::NotFound,

            ErrorCode::AlreadyPaired
            | ErrorCode::SelfAcceptance
            | ErrorCode::InviteAlreadyAccepted
            | ErrorCode::PartnerNotJoined
            | ErrorCode::AgreementNotSigned
            | ErrorCode::ActiveSessionExists
            | ErrorCode::InvalidStatus
            | ErrorCode::SessionCompleted => ErrorCategory::Conflict,

            ErrorCode::Unauthorized | ErrorCode::Forbidden => ErrorCategory::Forbidden,

            ErrorCode::DatabaseError | ErrorCode::InternalError => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::CoupleNotFound => "COUPLE_NOT_FOUND",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::InviteNotFound => "INVITE_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::AlreadyPaired => "ALREADY_PAIRED",
            ErrorCode::SelfAcceptance => "SELF_ACCEPTANCE",
            ErrorCode::InviteAlreadyAccepted => "INVITE_ALREADY_ACCEPTED",
            ErrorCode::PartnerNotJoined => "PARTNER_NOT_JOINED",
            ErrorCode::AgreementNotSigned => "AGREEMENT_NOT_SIGNED",
            ErrorCode::ActiveSessionExists => "ACTIVE_SESSION_EXISTS",
            ErrorCode::InvalidStatus => "INVALID_STATUS",
            ErrorCode::SessionCompleted => "SESSION_COMPLETED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Returns the caller-facing category.
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}
