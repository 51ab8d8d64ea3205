//! Derived session progression from interview completion.
//!
//! Interview submission advances a session automatically: one completed
//! interview means `in_progress`, both mean `unpacking_ready`. The derived
//! rule is deliberately one-directional - it never moves a session to an
//! earlier stage and never produces `reconnection`, `resolved`, or
//! `abandoned`; those are reachable only through explicit updates.

use crate::domain::couple::Couple;
use crate::domain::foundation::SessionStatus;
use crate::domain::session::Interview;

/// Which members have a completed interview for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterviewCompletion {
    pub user_a_complete: bool,
    pub user_b_complete: bool,
}

impl InterviewCompletion {
    pub fn both(&self) -> bool {
        self.user_a_complete && self.user_b_complete
    }

    pub fn any(&self) -> bool {
        self.user_a_complete || self.user_b_complete
    }
}

/// Computes per-member interview completion for a session.
pub fn interview_completion(couple: &Couple, interviews: &[Interview]) -> InterviewCompletion {
    let user_a_complete = interviews
        .iter()
        .any(|interview| interview.user_id() == couple.user_a_id());
    let user_b_complete = couple
        .user_b_id()
        .map(|user_b| interviews.iter().any(|interview| interview.user_id() == user_b))
        .unwrap_or(false);

    InterviewCompletion {
        user_a_complete,
        user_b_complete,
    }
}

/// Computes the next session status after an interview write.
///
/// Pure function of the current status, the couple's membership, and the
/// session's interviews. Kept separate from the explicit-transition
/// validation so both can be tested independently.
pub fn derive_status(
    current: SessionStatus,
    couple: &Couple,
    interviews: &[Interview],
) -> SessionStatus {
    let completion = interview_completion(couple, interviews);

    let candidate = if completion.both() {
        SessionStatus::UnpackingReady
    } else if completion.any() {
        SessionStatus::InProgress
    } else {
        return current;
    };

    // Interviews are never deleted, so the candidate can only regress when
    // the session was already moved past it by an explicit update. Keep
    // the later stage.
    if stage_rank(candidate) > stage_rank(current) {
        candidate
    } else {
        current
    }
}

fn stage_rank(status: SessionStatus) -> u8 {
    match status {
        SessionStatus::Initiated => 0,
        SessionStatus::InProgress => 1,
        SessionStatus::UnpackingReady => 2,
        SessionStatus::Reconnection => 3,
        SessionStatus::Resolved | SessionStatus::Abandoned => 4,
    }
}
