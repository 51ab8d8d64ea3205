//! HTTP DTOs for couple endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::couple::CoupleView;
use crate::ports::UserProfile;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to accept an invite.
#[derive(Debug, Clone, Deserialize)]
pub struct AcceptInviteRequest {
    pub invite_token: String,
}

/// Request to sign the mediation agreement.
#[derive(Debug, Clone, Deserialize)]
pub struct SignAgreementRequest {
    pub confirm: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Public member projection.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl From<UserProfile> for MemberResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email,
            name: profile.name,
        }
    }
}

/// Couple with both members resolved.
#[derive(Debug, Clone, Serialize)]
pub struct CoupleResponse {
    pub id: String,
    pub user_a: MemberResponse,
    pub user_b: Option<MemberResponse>,
    pub invite_token: Option<String>,
    pub agreement_signed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CoupleView> for CoupleResponse {
    fn from(view: CoupleView) -> Self {
        Self {
            id: view.id.to_string(),
            user_a: view.user_a.into(),
            user_b: view.user_b.map(Into::into),
            invite_token: view.invite_token.map(|t| t.as_str().to_string()),
            agreement_signed_at: view.agreement_signed_at.map(|t| t.to_rfc3339()),
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
        }
    }
}

/// Envelope for invite creation.
#[derive(Debug, Clone, Serialize)]
pub struct InviteResponse {
    pub message: String,
    pub couple: CoupleResponse,
    pub invite_token: Option<String>,
}

/// Envelope for invite acceptance and agreement signing.
#[derive(Debug, Clone, Serialize)]
pub struct CoupleEnvelope {
    pub message: String,
    pub couple: CoupleResponse,
}

/// Envelope for couple lookup.
#[derive(Debug, Clone, Serialize)]
pub struct MyCoupleResponse {
    pub couple: CoupleResponse,
}
