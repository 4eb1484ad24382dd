//! PostgreSQL implementation of track repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTrack, Track, TrackPatch};
use crate::domain::repositories::TrackRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct TrackRow {
    id: i32,
    user_id: i32,
    username: String,
    title: String,
    artist: Option<String>,
    url: Option<String>,
}

impl From<TrackRow> for Track {
    fn from(r: TrackRow) -> Self {
        Track::new(r.id, r.user_id, r.username, r.title, r.artist, r.url)
    }
}

/// PostgreSQL repository for tracks.
///
/// Every query joins `users` explicitly to carry the owner's username.
/// Update and delete match on both track id and owner id.
pub struct PgTrackRepository {
    pool: Arc<PgPool>,
}

impl PgTrackRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackRepository for PgTrackRepository {
    async fn create(&self, new_track: NewTrack) -> Result<Track, AppError> {
        let row = sqlx::query_as::<_, TrackRow>(
            r#"
            WITH inserted AS (
                INSERT INTO tracks (user_id, title, artist, url)
                VALUES ($1, $2, $3, $4)
                RETURNING id, user_id, title, artist, url
            )
            SELECT i.id, i.user_id, u.username, i.title, i.artist, i.url
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(new_track.user_id)
        .bind(new_track.title)
        .bind(new_track.artist)
        .bind(new_track.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Track>, AppError> {
        let row = sqlx::query_as::<_, TrackRow>(
            r#"
            SELECT t.id, t.user_id, u.username, t.title, t.artist, t.url
            FROM tracks t
            JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Track::from))
    }

    async fn list_by_owner(&self, user_id: i32) -> Result<Vec<Track>, AppError> {
        let rows = sqlx::query_as::<_, TrackRow>(
            r#"
            SELECT t.id, t.user_id, u.username, t.title, t.artist, t.url
            FROM tracks t
            JOIN users u ON u.id = t.user_id
            WHERE t.user_id = $1
            ORDER BY t.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Track::from).collect())
    }

    async fn update_owned(
        &self,
        id: i32,
        owner_id: i32,
        patch: TrackPatch,
    ) -> Result<Option<Track>, AppError> {
        let row = sqlx::query_as::<_, TrackRow>(
            r#"
            WITH updated AS (
                UPDATE tracks SET
                    title  = COALESCE($3::VARCHAR, title),
                    artist = COALESCE($4::VARCHAR, artist),
                    url    = COALESCE($5::VARCHAR, url)
                WHERE id = $1 AND user_id = $2
                RETURNING id, user_id, title, artist, url
            )
            SELECT d.id, d.user_id, u.username, d.title, d.artist, d.url
            FROM updated d
            JOIN users u ON u.id = d.user_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(patch.title)
        .bind(patch.artist)
        .bind(patch.url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Track::from))
    }

    async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<Option<Track>, AppError> {
        let row = sqlx::query_as::<_, TrackRow>(
            r#"
            WITH deleted AS (
                DELETE FROM tracks
                WHERE id = $1 AND user_id = $2
                RETURNING id, user_id, title, artist, url
            )
            SELECT d.id, d.user_id, u.username, d.title, d.artist, d.url
            FROM deleted d
            JOIN users u ON u.id = d.user_id
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Track::from))
    }
}
