//! User account service.

use crate::domain::entities::user::{EMAIL_MAX_LEN, PASSWORD_MAX_LEN, USERNAME_MAX_LEN};
use crate::domain::entities::{DeletedUser, NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::field_length::{check_max_len, check_optional, check_required};
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading, editing and deleting users.
///
/// Each supplied field is validated against its own limit. Fields that were
/// not supplied are neither validated nor written.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// # Validation
    ///
    /// - `username`: 1-50 characters
    /// - `email`: at most 50 characters
    /// - `password`: 1-300 characters
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails or the username
    /// or email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(
        &self,
        username: String,
        email: Option<String>,
        password: String,
    ) -> Result<User, AppError> {
        check_required("username", &username, USERNAME_MAX_LEN)?;
        check_optional("email", email.as_deref(), EMAIL_MAX_LEN)?;
        check_required("password", &password, PASSWORD_MAX_LEN)?;

        let user = self
            .repository
            .create(NewUser {
                username,
                email,
                password,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Retrieves a user by exact username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, username: &str) -> Result<User, AppError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::user_not_found(json!({ "username": username })))
    }

    /// Applies a partial update to a user and returns the stored result.
    ///
    /// An empty patch returns the user unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Validation`] if a supplied field is invalid or the
    /// new username/email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn edit_user(&self, username: &str, patch: UserPatch) -> Result<User, AppError> {
        let user = self.get_user(username).await?;

        if let Some(new_username) = patch.new_username.as_deref() {
            check_required("new_username", new_username, USERNAME_MAX_LEN)?;
        }
        check_optional("email", patch.email.as_deref(), EMAIL_MAX_LEN)?;
        if let Some(password) = patch.password.as_deref() {
            check_max_len("password", password, PASSWORD_MAX_LEN)?;
        }

        if patch.is_empty() {
            return Ok(user);
        }

        let updated = self
            .repository
            .update(user.id, patch)
            .await?
            .ok_or_else(|| AppError::user_not_found(json!({ "username": username })))?;

        tracing::info!(user_id = updated.id, username = %updated.username, "User updated");
        Ok(updated)
    }

    /// Deletes a user and every track they own, atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors; nothing is deleted
    /// in that case.
    pub async fn delete_user(&self, username: &str) -> Result<DeletedUser, AppError> {
        let deleted = self
            .repository
            .delete_with_tracks(username)
            .await?
            .ok_or_else(|| AppError::user_not_found(json!({ "username": username })))?;

        tracing::info!(
            user_id = deleted.user.id,
            tracks_deleted = deleted.tracks_deleted,
            "User deleted"
        );
        Ok(deleted)
    }
}
