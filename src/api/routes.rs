//! API route configuration.

use crate::api::handlers::{
    create_track_handler, create_user_handler, delete_track_handler, delete_user_handler,
    get_track_handler, get_user_handler, home_handler, shutdown_handler, update_track_handler,
    update_user_handler, user_tracks_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /`, `/home`               - Greeting
/// - `POST   /shutdown`                - Graceful server shutdown
/// - `POST   /users`                   - Create a user
/// - `PUT    /users`                   - Edit a user
/// - `GET    /users/{username}`        - Fetch a user
/// - `DELETE /users/{username}`        - Delete a user and their tracks
/// - `GET    /users/{username}/tracks` - List a user's tracks
/// - `POST   /tracks`                  - Create a track
/// - `GET    /tracks/{id}`             - Fetch a track
/// - `PUT    /tracks/{id}`             - Edit an owned track
/// - `DELETE /tracks/{id}`             - Delete an owned track
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/home", get(home_handler))
        .route("/shutdown", post(shutdown_handler))
        .route(
            "/users",
            post(create_user_handler).put(update_user_handler),
        )
        .route(
            "/users/{username}",
            get(get_user_handler).delete(delete_user_handler),
        )
        .route("/users/{username}/tracks", get(user_tracks_handler))
        .route("/tracks", post(create_track_handler))
        .route(
            "/tracks/{id}",
            get(get_track_handler)
                .put(update_track_handler)
                .delete(delete_track_handler),
        )
}
