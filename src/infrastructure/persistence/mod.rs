//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries with bound parameters.
//!
//! # Contents
//!
//! - [`PgUserRepository`] - User storage, rename, cascading delete
//! - [`PgTrackRepository`] - Owner-scoped track storage
//! - [`schema`] - Table creation and destructive rebuild

pub mod pg_track_repository;
pub mod pg_user_repository;
pub mod schema;

pub use pg_track_repository::PgTrackRepository;
pub use pg_user_repository::PgUserRepository;
