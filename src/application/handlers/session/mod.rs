//! Session handlers - mediation session and interview operations.

mod access;
mod get_session;
mod get_session_status;
mod list_sessions;
mod start_session;
mod submit_interview;
mod update_status;

pub use access::{SessionAccess, SessionContext};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use get_session_status::{
    GetSessionStatusHandler, GetSessionStatusQuery, PartnerStatus, SessionStatusReport,
};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use start_session::{SessionWithInterviews, StartSessionCommand, StartSessionHandler};
pub use submit_interview::{
    SubmitInterviewCommand, SubmitInterviewHandler, SubmitInterviewResult,
};
pub use update_status::{UpdateSessionStatusCommand, UpdateSessionStatusHandler};
