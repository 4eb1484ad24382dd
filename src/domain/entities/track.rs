//! Track entity representing a musical composition owned by a user.

/// Maximum length of a track title, in characters.
pub const TITLE_MAX_LEN: usize = 200;
/// Maximum length of an artist name, in characters.
pub const ARTIST_MAX_LEN: usize = 200;
/// Maximum length of a track URL, in characters.
pub const URL_MAX_LEN: usize = 100;

/// A track together with the username of its owner.
///
/// `username` is filled by an explicit join on `users`; there is no lazy
/// loading of the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub title: String,
    pub artist: Option<String>,
    pub url: Option<String>,
}

impl Track {
    /// Creates a new Track instance.
    pub fn new(
        id: i32,
        user_id: i32,
        username: String,
        title: String,
        artist: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            username,
            title,
            artist,
            url,
        }
    }
}

/// Input data for creating a new track.
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub user_id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub url: Option<String>,
}

/// Partial update for an existing track.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TrackPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
}
