//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{DeletedUser, User};

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,

    #[validate(length(max = 50))]
    pub email: String,

    #[validate(length(min = 1, max = 300))]
    pub password: String,
}

/// Request body for `PUT /users`.
///
/// `username` identifies the account; every other field is optional and
/// left unchanged when absent. Supplied fields are checked by the user
/// service once the account is found.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub new_username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public user representation.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            email: u.email,
            password: u.password,
        }
    }
}

/// Summary of a removed user.
#[derive(Debug, Serialize)]
pub struct DeletedUserItem {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
}

/// Response for `DELETE /users/{username}`.
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: &'static str,
    pub deleted_user: DeletedUserItem,
    pub deleted_compositions_count: i64,
}

impl From<DeletedUser> for DeleteUserResponse {
    fn from(d: DeletedUser) -> Self {
        Self {
            message: "User deleted successfully",
            deleted_user: DeletedUserItem {
                id: d.user.id,
                username: d.user.username,
                email: d.user.email,
            },
            deleted_compositions_count: d.tracks_deleted,
        }
    }
}
