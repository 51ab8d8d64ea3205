//! HTTP handlers for couple endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::{category_status, ErrorResponse};
use crate::application::handlers::couple::{
    AcceptInviteCommand, AcceptInviteHandler, CreateInviteCommand, CreateInviteHandler,
    GetCoupleHandler, GetCoupleQuery, SignAgreementCommand, SignAgreementHandler,
};
use crate::domain::couple::CoupleError;

use super::dto::{
    AcceptInviteRequest, CoupleEnvelope, CoupleResponse, InviteResponse, MyCoupleResponse,
    SignAgreementRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CoupleHandlers {
    create_invite: Arc<CreateInviteHandler>,
    accept_invite: Arc<AcceptInviteHandler>,
    get_couple: Arc<GetCoupleHandler>,
    sign_agreement: Arc<SignAgreementHandler>,
}

impl CoupleHandlers {
    pub fn new(
        create_invite: Arc<CreateInviteHandler>,
        accept_invite: Arc<AcceptInviteHandler>,
        get_couple: Arc<GetCoupleHandler>,
        sign_agreement: Arc<SignAgreementHandler>,
    ) -> Self {
        Self {
            create_invite,
            accept_invite,
            get_couple,
            sign_agreement,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/couples/invite - Create or regenerate an invite
pub async fn create_invite(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let cmd = CreateInviteCommand { user_id: user.id };

    match handlers.create_invite.handle(cmd).await {
        Ok(view) => {
            let couple: CoupleResponse = view.into();
            let response = InviteResponse {
                message: "Invite generated".to_string(),
                invite_token: couple.invite_token.clone(),
                couple,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_couple_error(e),
    }
}

/// POST /api/couples/accept - Accept an invite
pub async fn accept_invite(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<AcceptInviteRequest>,
) -> Response {
    let cmd = AcceptInviteCommand {
        user_id: user.id,
        invite_token: req.invite_token,
    };

    match handlers.accept_invite.handle(cmd).await {
        Ok(view) => {
            let response = CoupleEnvelope {
                message: "Invite accepted".to_string(),
                couple: view.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_couple_error(e),
    }
}

/// GET /api/couples/me - Caller's couple
pub async fn get_my_couple(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetCoupleQuery { user_id: user.id };

    match handlers.get_couple.handle(query).await {
        Ok(view) => {
            let response = MyCoupleResponse {
                couple: view.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_couple_error(e),
    }
}

/// POST /api/couples/agreement - Sign the mediation agreement
pub async fn sign_agreement(
    State(handlers): State<CoupleHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SignAgreementRequest>,
) -> Response {
    if !req.confirm {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(
                "You must confirm agreement to sign",
            )),
        )
            .into_response();
    }

    let cmd = SignAgreementCommand { user_id: user.id };

    match handlers.sign_agreement.handle(cmd).await {
        Ok(view) => {
            let response = CoupleEnvelope {
                message: "Agreement signed".to_string(),
                couple: view.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_couple_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_couple_error(error: CoupleError) -> Response {
    let code = error.code();
    let status = category_status(code.category());
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Couple operation failed: {}", error);
    }
    (status, Json(ErrorResponse::new(code, error.message()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_couple_error(CoupleError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invite_not_found_maps_to_404() {
        let response = handle_couple_error(CoupleError::InviteNotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflicts_map_to_409() {
        for error in [
            CoupleError::AlreadyPaired,
            CoupleError::SelfAcceptance,
            CoupleError::InviteAlreadyAccepted,
            CoupleError::PartnerNotJoined,
        ] {
            let response = handle_couple_error(error);
            assert_eq!(response.status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            handle_couple_error(CoupleError::ValidationFailed("bad token".to_string()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response =
            handle_couple_error(CoupleError::Infrastructure("connection reset".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
