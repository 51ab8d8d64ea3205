//! HTTP routes for session endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    get_session, get_session_status, list_sessions, start_session, submit_interview,
    update_session_status, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(start_session))
        .route("/", get(list_sessions))
        .route("/:id", get(get_session))
        .route("/:id/interview", post(submit_interview))
        .route("/:id/status", get(get_session_status))
        .route("/:id/status", patch(update_session_status))
        .with_state(handlers)
}
