//! User entity representing an account that owns tracks.

/// Maximum length of a username, in characters.
pub const USERNAME_MAX_LEN: usize = 50;
/// Maximum length of an email address, in characters.
pub const EMAIL_MAX_LEN: usize = 50;
/// Maximum length of a password, in characters.
pub const PASSWORD_MAX_LEN: usize = 300;

/// A user account.
///
/// The password is kept exactly as submitted and is returned by the read
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i32, username: String, email: Option<String>, password: String) -> Self {
        Self {
            id,
            username,
            email,
            password,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub new_username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.new_username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Result of removing a user together with all of their tracks.
#[derive(Debug, Clone)]
pub struct DeletedUser {
    pub user: User,
    pub tracks_deleted: i64,
}
