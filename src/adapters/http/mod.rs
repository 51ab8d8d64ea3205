//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter; `api_router` assembles
//! them behind the auth middleware.

pub mod couple;
pub mod middleware;
pub mod response;
pub mod session;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};

pub use couple::{couple_routes, CoupleHandlers};
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use response::ErrorResponse;
pub use session::{session_routes, SessionHandlers};

/// Assembles the full API router.
pub fn api_router(
    couple_handlers: CoupleHandlers,
    session_handlers: SessionHandlers,
    validator: AuthState,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/couples", couple_routes(couple_handlers))
        .nest("/api/sessions", session_routes(session_handlers))
        .layer(from_fn_with_state(validator, auth_middleware))
}

/// Liveness probe; requires no authentication.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
