//! Tandem - Couples Mediation Backend
//!
//! Users pair up as couples, sign a mediation agreement, and run guided
//! sessions of two independent partner interviews that drive a session
//! status state machine.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
