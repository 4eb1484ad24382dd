//! Business logic services for the application layer.

pub mod track_service;
pub mod user_service;

pub use track_service::TrackService;
pub use user_service::UserService;
