//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod couple_repository;
mod interview_repository;
mod session_repository;
mod session_validator;
mod user_directory;

pub use couple_repository::CoupleRepository;
pub use interview_repository::InterviewRepository;
pub use session_repository::SessionRepository;
pub use session_validator::SessionValidator;
pub use user_directory::{UserDirectory, UserProfile};
