//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User CRUD and cascading delete
//! - [`TrackRepository`] - Owner-scoped track CRUD

pub mod track_repository;
pub mod user_repository;

pub use track_repository::TrackRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use track_repository::MockTrackRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
