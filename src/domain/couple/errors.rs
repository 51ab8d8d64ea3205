//! Couple-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by pairing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoupleError {
    /// The caller has no couple.
    NotFound,
    /// No couple holds the presented invite token.
    InviteNotFound,
    /// The caller already belongs to a (fully formed or different) couple.
    AlreadyPaired,
    /// The inviter tried to accept their own invite.
    SelfAcceptance,
    /// The invite was already consumed by another user.
    InviteAlreadyAccepted,
    /// The partner slot is still empty.
    PartnerNotJoined,
    /// Input failed a shape/length guard.
    ValidationFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl CoupleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoupleError::NotFound => ErrorCode::CoupleNotFound,
            CoupleError::InviteNotFound => ErrorCode::InviteNotFound,
            CoupleError::AlreadyPaired => ErrorCode::AlreadyPaired,
            CoupleError::SelfAcceptance => ErrorCode::SelfAcceptance,
            CoupleError::InviteAlreadyAccepted => ErrorCode::InviteAlreadyAccepted,
            CoupleError::PartnerNotJoined => ErrorCode::PartnerNotJoined,
            CoupleError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            CoupleError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CoupleError::NotFound => "No couple found for this user".to_string(),
            CoupleError::InviteNotFound => "Invite not found or already used".to_string(),
            CoupleError::AlreadyPaired => "User is already part of a couple".to_string(),
            CoupleError::SelfAcceptance => "You cannot accept your own invite".to_string(),
            CoupleError::InviteAlreadyAccepted => {
                "Invite already accepted by another user".to_string()
            }
            CoupleError::PartnerNotJoined => "Your partner must join before signing".to_string(),
            CoupleError::ValidationFailed(msg) => msg.clone(),
            CoupleError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CoupleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CoupleError {}

impl From<DomainError> for CoupleError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CoupleNotFound => CoupleError::NotFound,
            ErrorCode::InviteNotFound => CoupleError::InviteNotFound,
            ErrorCode::AlreadyPaired => CoupleError::AlreadyPaired,
            ErrorCode::SelfAcceptance => CoupleError::SelfAcceptance,
            ErrorCode::InviteAlreadyAccepted => CoupleError::InviteAlreadyAccepted,
            ErrorCode::PartnerNotJoined => CoupleError::PartnerNotJoined,
            ErrorCode::ValidationFailed => CoupleError::ValidationFailed(err.message),
            _ => CoupleError::Infrastructure(err.message),
        }
    }
}

impl From<ValidationError> for CoupleError {
    fn from(err: ValidationError) -> Self {
        CoupleError::ValidationFailed(err.to_string())
    }
}
