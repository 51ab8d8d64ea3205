//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CoupleRecordResponse, InterviewResponse, PartnerStatusResponse, SessionDetailResponse,
    SessionResponse, SessionStatusResponse, SessionWithInterviewsResponse, StartSessionRequest,
    SubmitInterviewRequest, SubmitInterviewResponse, UpdateStatusRequest,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
