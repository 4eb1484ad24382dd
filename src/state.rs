//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::application::services::{TrackService, UserService};
use crate::infrastructure::persistence::{PgTrackRepository, PgUserRepository};

pub type PgUserService = UserService<PgUserRepository>;
pub type PgTrackService = TrackService<PgTrackRepository, PgUserRepository>;

/// One-shot signal that stops the HTTP server gracefully.
///
/// Triggering before anyone waits is not lost; the next `wait` returns
/// immediately.
#[derive(Clone, Default)]
pub struct ShutdownSignal(Arc<Notify>);

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.notify_one();
    }

    pub async fn wait(&self) {
        self.0.notified().await;
    }
}

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<PgUserService>,
    pub track_service: Arc<PgTrackService>,
    pub shutdown: ShutdownSignal,
}

impl AppState {
    /// Wires repositories and services around a single connection pool.
    pub fn new(pool: Arc<PgPool>, shutdown: ShutdownSignal) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let track_repository = Arc::new(PgTrackRepository::new(pool));

        Self {
            user_service: Arc::new(UserService::new(user_repository.clone())),
            track_service: Arc::new(TrackService::new(track_repository, user_repository)),
            shutdown,
        }
    }
}
