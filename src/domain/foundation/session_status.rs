//! SessionStatus enum for tracking the lifecycle of mediation sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a mediation session.
///
/// Normal progression is `Initiated -> InProgress -> UnpackingReady ->
/// Reconnection -> Resolved | Abandoned`. Interview submission drives the
/// first two hops automatically; everything after that is an explicit
/// update. `Resolved` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Initiated,
    InProgress,
    UnpackingReady,
    Reconnection,
    Resolved,
    Abandoned,
}

impl SessionStatus {
    /// All recognized status values, in progression order.
    pub const ALL: [SessionStatus; 6] = [
        SessionStatus::Initiated,
        SessionStatus::InProgress,
        SessionStatus::UnpackingReady,
        SessionStatus::Reconnection,
        SessionStatus::Resolved,
        SessionStatus::Abandoned,
    ];

    /// Returns true if the status is terminal (immutable once reached).
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Resolved | SessionStatus::Abandoned)
    }

    /// Validates an explicit transition from this status to another.
    ///
    /// A terminal session accepts only a same-value no-op write. A
    /// non-terminal session accepts any recognized target, including
    /// skipping stages.
    pub fn can_transition_to(&self, target: &SessionStatus) -> bool {
        !self.is_terminal() || self == target
    }

    /// Returns the wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Initiated => "initiated",
            SessionStatus::InProgress => "in_progress",
            SessionStatus::UnpackingReady => "unpacking_ready",
            SessionStatus::Reconnection => "reconnection",
            SessionStatus::Resolved => "resolved",
            SessionStatus::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for unrecognized status strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus(pub String);

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid status: {}", self.0)
    }
}

impl std::error::Error for InvalidStatus {}

impl FromStr for SessionStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initiated" => Ok(SessionStatus::Initiated),
            "in_progress" => Ok(SessionStatus::InProgress),
            "unpacking_ready" => Ok(SessionStatus::UnpackingReady),
            "reconnection" => Ok(SessionStatus::Reconnection),
            "resolved" => Ok(SessionStatus::Resolved),
            "abandoned" => Ok(SessionStatus::Abandoned),
            _ => Err(InvalidStatus(s.to_string())),
        }
    }
}
