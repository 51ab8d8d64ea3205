//! Pairing handlers - couple lifecycle operations.

mod accept_invite;
mod create_invite;
mod get_couple;
mod sign_agreement;
mod view;

pub use accept_invite::{AcceptInviteCommand, AcceptInviteHandler};
pub use create_invite::{CreateInviteCommand, CreateInviteHandler};
pub use get_couple::{GetCoupleHandler, GetCoupleQuery};
pub use sign_agreement::{SignAgreementCommand, SignAgreementHandler};
pub use view::{project_couple, CoupleView};
