//! Couple view projection.
//!
//! Couple responses embed the public fields of both members, resolved
//! through the user directory. Shared by every pairing handler.

use crate::domain::couple::Couple;
use crate::domain::foundation::{CoupleId, DomainError, ErrorCode, InviteToken, Timestamp};
use crate::ports::{UserDirectory, UserProfile};

/// Couple with member public profiles resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoupleView {
    pub id: CoupleId,
    pub user_a: UserProfile,
    pub user_b: Option<UserProfile>,
    pub invite_token: Option<InviteToken>,
    pub agreement_signed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projects a couple into its member-resolved view.
///
/// # Errors
///
/// - `UserNotFound` if the directory is missing a member the couple
///   references (data inconsistency between the store and the directory)
pub async fn project_couple(
    couple: &Couple,
    directory: &dyn UserDirectory,
) -> Result<CoupleView, DomainError> {
    let user_a = directory
        .find_by_id(couple.user_a_id())
        .await?
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not in directory: {}", couple.user_a_id()),
            )
        })?;

    let user_b = match couple.user_b_id() {
        Some(user_b_id) => Some(directory.find_by_id(user_b_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not in directory: {}", user_b_id),
            )
        })?),
        None => None,
    };

    Ok(CoupleView {
        id: *couple.id(),
        user_a,
        user_b,
        invite_token: couple.invite_token().cloned(),
        agreement_signed_at: couple.agreement_signed_at().copied(),
        created_at: *couple.created_at(),
        updated_at: *couple.updated_at(),
    })
}
