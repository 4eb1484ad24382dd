//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod system;
pub mod tracks;
pub mod users;

pub use system::{
    fallback_handler, home_handler, method_not_allowed_handler, shutdown_handler,
};
pub use tracks::{
    create_track_handler, delete_track_handler, get_track_handler, update_track_handler,
    user_tracks_handler,
};
pub use users::{create_user_handler, delete_user_handler, get_user_handler, update_user_handler};
