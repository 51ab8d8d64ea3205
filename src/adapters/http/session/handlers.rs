//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::{category_status, ErrorResponse};
use crate::application::handlers::session::{
    GetSessionHandler, GetSessionQuery, GetSessionStatusHandler, GetSessionStatusQuery,
    ListSessionsHandler, ListSessionsQuery, StartSessionCommand, StartSessionHandler,
    SubmitInterviewCommand, SubmitInterviewHandler, UpdateSessionStatusCommand,
    UpdateSessionStatusHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;

use super::dto::{
    SessionDetailResponse, SessionStatusResponse, SessionWithInterviewsResponse,
    StartSessionRequest, SubmitInterviewRequest, SubmitInterviewResponse, UpdateStatusRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    start: Arc<StartSessionHandler>,
    get: Arc<GetSessionHandler>,
    list: Arc<ListSessionsHandler>,
    submit: Arc<SubmitInterviewHandler>,
    status: Arc<GetSessionStatusHandler>,
    update_status: Arc<UpdateSessionStatusHandler>,
}

impl SessionHandlers {
    pub fn new(
        start: Arc<StartSessionHandler>,
        get: Arc<GetSessionHandler>,
        list: Arc<ListSessionsHandler>,
        submit: Arc<SubmitInterviewHandler>,
        status: Arc<GetSessionStatusHandler>,
        update_status: Arc<UpdateSessionStatusHandler>,
    ) -> Self {
        Self {
            start,
            get,
            list,
            submit,
            status,
            update_status,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a new session
pub async fn start_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<StartSessionRequest>,
) -> Response {
    let cmd = StartSessionCommand {
        user_id: user.id,
        topic: req.topic,
        context: req.context,
    };

    match handlers.start.handle(cmd).await {
        Ok(result) => {
            let response: SessionWithInterviewsResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions - All sessions for the caller's couple
pub async fn list_sessions(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListSessionsQuery { user_id: user.id };

    match handlers.list.handle(query).await {
        Ok(sessions) => {
            let response: Vec<SessionWithInterviewsResponse> =
                sessions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id - Session with couple and interviews
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetSessionQuery {
        session_id,
        user_id: user.id,
    };

    match handlers.get.handle(query).await {
        Ok(ctx) => {
            let response: SessionDetailResponse = ctx.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/interview - Submit or resubmit an interview
pub async fn submit_interview(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitInterviewRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitInterviewCommand {
        session_id,
        user_id: user.id,
        responses: req.responses,
        notes: req.notes,
    };

    match handlers.submit.handle(cmd).await {
        Ok(result) => {
            let response: SubmitInterviewResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id/status - Per-member completion report
pub async fn get_session_status(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetSessionStatusQuery {
        session_id,
        user_id: user.id,
    };

    match handlers.status.handle(query).await {
        Ok(report) => {
            let response: SessionStatusResponse = report.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// PATCH /api/sessions/:id/status - Explicit status update
pub async fn update_session_status(
    State(handlers): State<SessionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateSessionStatusCommand {
        session_id,
        user_id: user.id,
        status: req.status,
    };

    match handlers.update_status.handle(cmd).await {
        Ok(ctx) => {
            let response: SessionDetailResponse = ctx.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn handle_session_error(error: SessionError) -> Response {
    let code = error.code();
    let status = category_status(code.category());
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Session operation failed: {}", error);
    }
    (status, Json(ErrorResponse::new(code, error.message()))).into_response()
}
