//! Repository trait for user data access.

use crate::domain::entities::{DeletedUser, NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// Users are always located by exact, case-sensitive username.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username or email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Applies a partial update to the user with the given id.
    ///
    /// Returns `Ok(None)` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new username or email collides
    /// with another user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i32, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Deletes a user and all of their tracks in a single transaction.
    ///
    /// Returns `Ok(None)` if no user has this username. On any failure the
    /// transaction is rolled back and nothing is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_with_tracks(&self, username: &str) -> Result<Option<DeletedUser>, AppError>;
}
