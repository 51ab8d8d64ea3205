//! HTTP routes for couple endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    accept_invite, create_invite, get_my_couple, sign_agreement, CoupleHandlers,
};

/// Creates the couple router with all endpoints.
pub fn couple_routes(handlers: CoupleHandlers) -> Router {
    Router::new()
        .route("/invite", post(create_invite))
        .route("/accept", post(accept_invite))
        .route("/me", get(get_my_couple))
        .route("/agreement", post(sign_agreement))
        .with_state(handlers)
}
