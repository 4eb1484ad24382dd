//! Repository trait for track data access.

use crate::domain::entities::{NewTrack, Track, TrackPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing tracks.
///
/// Mutations are scoped to an owner id: a track that exists but belongs to
/// another user is reported exactly like a missing one (`Ok(None)`).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTrackRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_track.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackRepository: Send + Sync {
    /// Creates a new track.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owner does not exist (foreign key).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_track: NewTrack) -> Result<Track, AppError>;

    /// Finds a track by id, joined with its owner's username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Track>, AppError>;

    /// Lists every track owned by `user_id`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, user_id: i32) -> Result<Vec<Track>, AppError>;

    /// Partially updates a track if it is owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_owned(
        &self,
        id: i32,
        owner_id: i32,
        patch: TrackPatch,
    ) -> Result<Option<Track>, AppError>;

    /// Deletes a track if it is owned by `owner_id`, returning the removed row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<Option<Track>, AppError>;
}
