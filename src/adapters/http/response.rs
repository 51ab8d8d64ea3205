//! Shared HTTP response types and error-category mapping.
//!
//! Every rule violation carries an error code whose category maps to one
//! caller-facing status: not-found 404, conflict 409, forbidden 403,
//! validation 400, everything else 500.

use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::foundation::{ErrorCategory, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Builds the body for a domain error code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Builds a plain bad-request body for transport-level input errors.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

/// Maps an error category to its HTTP status.
pub fn category_status(category: ErrorCategory) -> StatusCode {
    match category {
        ErrorCategory::NotFound => StatusCode::NOT_FOUND,
        ErrorCategory::Conflict => StatusCode::CONFLICT,
        ErrorCategory::Forbidden => StatusCode::FORBIDDEN,
        ErrorCategory::Validation => StatusCode::BAD_REQUEST,
        ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
