//! PostgreSQL adapters.
//!
//! sqlx-backed implementations of the repository and directory ports.
//! Cross-row invariants (one couple per user, one invite token, one
//! active session per couple, one interview per member per session) are
//! enforced by unique indexes; see `migrations/`.

mod couple_repository;
mod interview_repository;
mod session_repository;
mod user_directory;

pub use couple_repository::PostgresCoupleRepository;
pub use interview_repository::PostgresInterviewRepository;
pub use session_repository::PostgresSessionRepository;
pub use user_directory::PostgresUserDirectory;
