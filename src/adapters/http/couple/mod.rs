//! HTTP adapter for couple endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AcceptInviteRequest, CoupleEnvelope, CoupleResponse, InviteResponse, MemberResponse,
    MyCoupleResponse, SignAgreementRequest,
};
pub use handlers::CoupleHandlers;
pub use routes::couple_routes;
