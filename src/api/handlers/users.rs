//! Handlers for user account endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::user::{
    CreateUserRequest, DeleteUserResponse, UpdateUserRequest, UserResponse,
};
use crate::api::extract::{ApiJson, ApiPath};
use crate::domain::entities::UserPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "email": "a@x.com", "password": "p" }
/// ```
///
/// # Errors
///
/// Returns 400 for missing fields, length violations, or a taken
/// username/email.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.username, Some(payload.email), payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Returns a user's stored information.
///
/// # Endpoint
///
/// `GET /users/{username}`
///
/// # Errors
///
/// Returns 404 `UserNotFound` if no user has this exact username.
pub async fn get_user_handler(
    ApiPath(username): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(&username).await?;
    Ok(Json(user.into()))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /users`
///
/// # Request Body
///
/// `username` selects the account; the rest is optional.
///
/// ```json
/// { "username": "alice", "new_username": "alice2", "email": "new@x.com", "password": "p2" }
/// ```
///
/// # Errors
///
/// Returns 404 `UserNotFound` if the account does not exist.
/// Returns 400 if a supplied field of an existing account is invalid or
/// already taken.
pub async fn update_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let patch = UserPatch {
        new_username: payload.new_username,
        email: payload.email,
        password: payload.password,
    };

    let user = state
        .user_service
        .edit_user(&payload.username, patch)
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user together with all of their tracks.
///
/// # Endpoint
///
/// `DELETE /users/{username}`
///
/// # Response
///
/// ```json
/// {
///   "message": "User deleted successfully",
///   "deleted_user": { "id": 1, "username": "alice", "email": "a@x.com" },
///   "deleted_compositions_count": 2
/// }
/// ```
///
/// # Errors
///
/// Returns 404 `UserNotFound` if the account does not exist.
pub async fn delete_user_handler(
    ApiPath(username): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let deleted = state.user_service.delete_user(&username).await?;
    Ok(Json(deleted.into()))
}
