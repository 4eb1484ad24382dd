//! Track management service.

use std::sync::Arc;

use crate::domain::entities::track::{ARTIST_MAX_LEN, TITLE_MAX_LEN, URL_MAX_LEN};
use crate::domain::entities::{NewTrack, Track, TrackPatch, User};
use crate::domain::repositories::{TrackRepository, UserRepository};
use crate::error::AppError;
use crate::utils::field_length::{check_optional, check_required};
use serde_json::json;

/// Service for tracks and their ownership rules.
///
/// Every operation that names a user resolves that user first and fails with
/// `UserNotFound` if they are absent. Edits and deletes only touch tracks
/// owned by that user; a foreign track is reported as `TrackNotFound`.
pub struct TrackService<T: TrackRepository, U: UserRepository> {
    track_repository: Arc<T>,
    user_repository: Arc<U>,
}

impl<T: TrackRepository, U: UserRepository> TrackService<T, U> {
    /// Creates a new track service.
    pub fn new(track_repository: Arc<T>, user_repository: Arc<U>) -> Self {
        Self {
            track_repository,
            user_repository,
        }
    }

    /// Adds a track for an existing user.
    ///
    /// # Validation
    ///
    /// - `title`: 1-200 characters
    /// - `artist`: at most 200 characters
    /// - `url`: at most 100 characters
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_track(
        &self,
        username: &str,
        title: String,
        artist: Option<String>,
        url: Option<String>,
    ) -> Result<Track, AppError> {
        let owner = self.resolve_owner(username).await?;

        check_required("title", &title, TITLE_MAX_LEN)?;
        check_optional("artist", artist.as_deref(), ARTIST_MAX_LEN)?;
        check_optional("url", url.as_deref(), URL_MAX_LEN)?;

        let track = self
            .track_repository
            .create(NewTrack {
                user_id: owner.id,
                title,
                artist,
                url,
            })
            .await?;

        tracing::info!(track_id = track.id, user_id = owner.id, "Track created");
        Ok(track)
    }

    /// Retrieves a track by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the track does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_track(&self, id: i32) -> Result<Track, AppError> {
        self.track_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::track_not_found("Track not found", json!({ "id": id })))
    }

    /// Lists all tracks of a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_user_tracks(&self, username: &str) -> Result<Vec<Track>, AppError> {
        let owner = self.resolve_owner(username).await?;
        self.track_repository.list_by_owner(owner.id).await
    }

    /// Deletes a track owned by `username` and returns what was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist, or if the
    /// track does not exist or belongs to someone else.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_track(&self, id: i32, username: &str) -> Result<Track, AppError> {
        let owner = self.resolve_owner(username).await?;

        let track = self
            .track_repository
            .delete_owned(id, owner.id)
            .await?
            .ok_or_else(|| {
                AppError::track_not_found(
                    "Track not found or you do not have permission to delete it",
                    json!({ "id": id }),
                )
            })?;

        tracing::info!(track_id = id, user_id = owner.id, "Track deleted");
        Ok(track)
    }

    /// Applies a partial update to a track owned by `username`.
    ///
    /// Ownership is confirmed before any field is checked, so a caller who
    /// does not own the track only ever sees `TrackNotFound`. Supplied fields
    /// are validated before anything is written, so a rejected edit leaves
    /// the stored track unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist, or if the
    /// track does not exist or belongs to someone else.
    /// Returns [`AppError::Validation`] if a supplied field is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn edit_track(
        &self,
        id: i32,
        username: &str,
        patch: TrackPatch,
    ) -> Result<Track, AppError> {
        let owner = self.resolve_owner(username).await?;

        let not_editable = || {
            AppError::track_not_found(
                "Track not found or you do not have permission to edit it",
                json!({ "id": id }),
            )
        };

        self.track_repository
            .find_by_id(id)
            .await?
            .filter(|track| track.user_id == owner.id)
            .ok_or_else(not_editable)?;

        if let Some(title) = patch.title.as_deref() {
            check_required("title", title, TITLE_MAX_LEN)?;
        }
        check_optional("artist", patch.artist.as_deref(), ARTIST_MAX_LEN)?;
        check_optional("url", patch.url.as_deref(), URL_MAX_LEN)?;

        self.track_repository
            .update_owned(id, owner.id, patch)
            .await?
            .ok_or_else(not_editable)
    }

    async fn resolve_owner(&self, username: &str) -> Result<User, AppError> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::debug!(username, "Track owner not found");
                AppError::user_not_found(json!({ "username": username }))
            })
    }
}
