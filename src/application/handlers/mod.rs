//! Command and query handlers, one per exposed operation.

pub mod couple;
pub mod session;
