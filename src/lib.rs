//! # Music API
//!
//! An HTTP service for user accounts and the music tracks they own, built with
//! Axum and PostgreSQL.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Validation and ownership rules
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL repositories and schema
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## Features
//!
//! - User create, read, edit and delete (deleting a user removes their tracks atomically)
//! - Tracks owned by users; only the owner may edit or delete them
//! - Uniform JSON error bodies
//! - Remote shutdown via `POST /shutdown`
//!
//! ## Quick Start
//!
//! ```bash
//! cat > music.env <<EOF
//! DB_USER=music
//! DB_USER_PASS=secret
//! DB_NAME=music_app
//! EOF
//!
//! cargo run -- --config music.env
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{TrackService, UserService};
    pub use crate::domain::entities::{NewTrack, NewUser, Track, TrackPatch, User, UserPatch};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, ShutdownSignal};
}
