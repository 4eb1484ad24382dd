//! Handlers for track endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::track::{
    CreateTrackRequest, DeleteTrackRequest, DeleteTrackResponse, TrackListResponse,
    TrackResponse, UpdateTrackRequest,
};
use crate::api::extract::{ApiJson, ApiPath};
use crate::domain::entities::TrackPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a track for an existing user.
///
/// # Endpoint
///
/// `POST /tracks`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "title": "Song", "artist": "Band", "url": "https://..." }
/// ```
///
/// # Errors
///
/// Returns 404 `UserNotFound` if the owner does not exist. Lengths are
/// only checked once the owner is known.
/// Returns 400 for missing fields or length violations.
pub async fn create_track_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTrackRequest>,
) -> Result<(StatusCode, Json<TrackResponse>), AppError> {
    let track = state
        .track_service
        .add_track(&payload.username, payload.title, payload.artist, payload.url)
        .await?;

    Ok((StatusCode::CREATED, Json(track.into())))
}

/// Returns a track with its owner's username.
///
/// # Endpoint
///
/// `GET /tracks/{id}`
///
/// # Errors
///
/// Returns 404 `TrackNotFound` if the track does not exist.
pub async fn get_track_handler(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
) -> Result<Json<TrackResponse>, AppError> {
    let track = state.track_service.get_track(id).await?;
    Ok(Json(track.into()))
}

/// Lists every track owned by a user.
///
/// # Endpoint
///
/// `GET /users/{username}/tracks`
///
/// # Errors
///
/// Returns 404 `UserNotFound` if the user does not exist.
pub async fn user_tracks_handler(
    ApiPath(username): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<Json<TrackListResponse>, AppError> {
    let tracks = state.track_service.list_user_tracks(&username).await?;

    Ok(Json(TrackListResponse {
        tracks: tracks.into_iter().map(Into::into).collect(),
    }))
}

/// Deletes a track on behalf of its owner.
///
/// # Endpoint
///
/// `DELETE /tracks/{id}` with body `{ "username": "alice" }`
///
/// # Errors
///
/// Returns 404 `UserNotFound` if the user does not exist.
/// Returns 404 `TrackNotFound` if the track does not exist or is not owned
/// by that user.
pub async fn delete_track_handler(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DeleteTrackRequest>,
) -> Result<Json<DeleteTrackResponse>, AppError> {
    let track = state
        .track_service
        .delete_track(id, &payload.username)
        .await?;

    Ok(Json(DeleteTrackResponse {
        message: "Track deleted successfully",
        deleted_track: track.into(),
    }))
}

/// Partially updates a track on behalf of its owner.
///
/// # Endpoint
///
/// `PUT /tracks/{id}`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "title": "New title", "artist": null }
/// ```
///
/// Absent or `null` fields are left unchanged.
///
/// # Errors
///
/// Returns 404 `UserNotFound` / `TrackNotFound` as for delete.
/// Returns 400 if a supplied field is invalid and the track is owned by
/// `username`.
pub async fn update_track_handler(
    ApiPath(id): ApiPath<i32>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateTrackRequest>,
) -> Result<Json<TrackResponse>, AppError> {
    let patch = TrackPatch {
        title: payload.title,
        artist: payload.artist,
        url: payload.url,
    };

    let track = state
        .track_service
        .edit_track(id, &payload.username, patch)
        .await?;

    Ok(Json(track.into()))
}
