#![allow(dead_code)]

use axum_test::TestServer;
use music_api::infrastructure::persistence::schema;
use music_api::routes::router;
use music_api::state::{AppState, ShutdownSignal};
use sqlx::PgPool;
use std::sync::Arc;

/// Creates the tables in the per-test database.
pub async fn init_schema(pool: &PgPool) {
    schema::create_tables(pool).await.unwrap();
}

pub async fn create_test_user(pool: &PgPool, username: &str, email: Option<&str>) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, 'pw') RETURNING id",
    )
    .bind(username)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_track(pool: &PgPool, user_id: i32, title: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO tracks (user_id, title, artist, url) VALUES ($1, $2, 'Artist', 'https://example.com') RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_tracks(pool: &PgPool, user_id: i32) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tracks WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_state(pool: PgPool) -> AppState {
    init_schema(&pool).await;
    AppState::new(Arc::new(pool), ShutdownSignal::new())
}

/// Full router, fallback and tracing layer included.
pub async fn create_test_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool).await;
    TestServer::new(router(state)).unwrap()
}
