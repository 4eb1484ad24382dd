//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User accounts and cascading delete
//! - [`services::track_service::TrackService`] - Tracks and ownership checks

pub mod services;
