//! DTOs for track endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Track;

/// Request body for `POST /tracks`.
///
/// Field lengths are checked by the track service after the owner is found.
#[derive(Debug, Deserialize)]
pub struct CreateTrackRequest {
    /// Owner of the new track.
    pub username: String,
    pub title: String,
    pub artist: Option<String>,
    pub url: Option<String>,
}

/// Request body for `PUT /tracks/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateTrackRequest {
    /// Must be the owner of the track.
    pub username: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
}

/// Request body for `DELETE /tracks/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteTrackRequest {
    /// Must be the owner of the track.
    pub username: String,
}

/// Full track representation, including the owner.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub url: Option<String>,
    pub username: String,
}

impl From<Track> for TrackResponse {
    fn from(t: Track) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            title: t.title,
            artist: t.artist,
            url: t.url,
            username: t.username,
        }
    }
}

/// Track entry inside owner-scoped responses.
#[derive(Debug, Serialize)]
pub struct TrackItem {
    pub id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub url: Option<String>,
}

impl From<Track> for TrackItem {
    fn from(t: Track) -> Self {
        Self {
            id: t.id,
            title: t.title,
            artist: t.artist,
            url: t.url,
        }
    }
}

/// Response for `GET /users/{username}/tracks`.
#[derive(Debug, Serialize)]
pub struct TrackListResponse {
    pub tracks: Vec<TrackItem>,
}

/// Response for `DELETE /tracks/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteTrackResponse {
    pub message: &'static str,
    pub deleted_track: TrackItem,
}
