//! Couple module - pairing lifecycle.
//!
//! Covers invite issuance, acceptance, and agreement signing. Sessions are
//! owned by the session module; a couple only gates their creation.

mod aggregate;
mod errors;

pub use aggregate::Couple;
pub use errors::CoupleError;
