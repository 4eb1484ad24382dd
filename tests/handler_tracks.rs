mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use music_api::routes::router;
use serde_json::{Value, json};
use sqlx::PgPool;

/// Server with `alice` (and optionally `bob`) already registered.
async fn server_with_users(pool: &PgPool) -> (TestServer, i32, i32) {
    let state = common::create_test_state(pool.clone()).await;
    let alice = common::create_test_user(pool, "alice", Some("alice@example.com")).await;
    let bob = common::create_test_user(pool, "bob", None).await;
    (TestServer::new(router(state)).unwrap(), alice, bob)
}

#[sqlx::test]
async fn test_create_track_success(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;

    let response = server
        .post("/tracks")
        .json(&json!({
            "username": "alice",
            "title": "Song",
            "artist": "Band",
            "url": "https://example.com/song"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert!(json["id"].is_number());
    assert_eq!(json["user_id"], alice);
    assert_eq!(json["username"], "alice");
    assert_eq!(json["title"], "Song");
    assert_eq!(json["artist"], "Band");
    assert_eq!(json["url"], "https://example.com/song");
}

#[sqlx::test]
async fn test_create_track_optional_fields(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server
        .post("/tracks")
        .json(&json!({ "username": "alice", "title": "Song" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert!(json["artist"].is_null());
    assert!(json["url"].is_null());
}

#[sqlx::test]
async fn test_create_track_unknown_user(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server
        .post("/tracks")
        .json(&json!({ "username": "ghost", "title": "Song" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "UserNotFound");
}

#[sqlx::test]
async fn test_create_track_title_limit(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let too_long = server
        .post("/tracks")
        .json(&json!({ "username": "alice", "title": "t".repeat(201) }))
        .await;
    too_long.assert_status_bad_request();
    assert_eq!(too_long.json::<Value>()["error"], "InvalidInput");

    let at_limit = server
        .post("/tracks")
        .json(&json!({ "username": "alice", "title": "t".repeat(200) }))
        .await;
    at_limit.assert_status(StatusCode::CREATED);
}

#[sqlx::test]
async fn test_create_track_unknown_user_with_invalid_title(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server
        .post("/tracks")
        .json(&json!({ "username": "ghost", "title": "t".repeat(201) }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "UserNotFound");
}

#[sqlx::test]
async fn test_create_track_url_too_long(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server
        .post("/tracks")
        .json(&json!({
            "username": "alice",
            "title": "Song",
            "url": format!("https://{}", "x".repeat(100))
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_get_track(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Song").await;

    let response = server.get(&format!("/tracks/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["username"], "alice");
    assert_eq!(json["title"], "Song");
}

#[sqlx::test]
async fn test_get_track_not_found(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server.get("/tracks/999").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "TrackNotFound");
}

#[sqlx::test]
async fn test_get_track_non_numeric_id(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server.get("/tracks/abc").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "InvalidInput");
}

#[sqlx::test]
async fn test_list_user_tracks(pool: PgPool) {
    let (server, alice, bob) = server_with_users(&pool).await;
    common::create_test_track(&pool, alice, "First").await;
    common::create_test_track(&pool, bob, "Bob's").await;
    common::create_test_track(&pool, alice, "Second").await;

    let response = server.get("/users/alice/tracks").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let tracks = json["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0]["title"], "First");
    assert_eq!(tracks[1]["title"], "Second");
    assert!(tracks[0].get("username").is_none());
}

#[sqlx::test]
async fn test_list_tracks_empty(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server.get("/users/bob/tracks").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "tracks": [] }));
}

#[sqlx::test]
async fn test_list_tracks_unknown_user(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    server
        .get("/users/ghost/tracks")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_update_track(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Old").await;

    let response = server
        .put(&format!("/tracks/{id}"))
        .json(&json!({ "username": "alice", "title": "New" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["title"], "New");
    assert_eq!(json["artist"], "Artist");
    assert_eq!(json["url"], "https://example.com");
}

#[sqlx::test]
async fn test_update_track_wrong_owner(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Mine").await;

    let response = server
        .put(&format!("/tracks/{id}"))
        .json(&json!({ "username": "bob", "title": "Stolen" }))
        .await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "TrackNotFound");
    assert_eq!(
        json["message"],
        "Track not found or you do not have permission to edit it"
    );

    let stored = server.get(&format!("/tracks/{id}")).await.json::<Value>();
    assert_eq!(stored["title"], "Mine");
}

#[sqlx::test]
async fn test_update_foreign_track_with_invalid_title(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Mine").await;

    let response = server
        .put(&format!("/tracks/{id}"))
        .json(&json!({ "username": "bob", "title": "t".repeat(201) }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "TrackNotFound");

    let stored = server.get(&format!("/tracks/{id}")).await.json::<Value>();
    assert_eq!(stored["title"], "Mine");
}

#[sqlx::test]
async fn test_update_missing_track_with_invalid_title(pool: PgPool) {
    let (server, _, _) = server_with_users(&pool).await;

    let response = server
        .put("/tracks/9999")
        .json(&json!({ "username": "bob", "title": "t".repeat(201) }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "TrackNotFound");
}

#[sqlx::test]
async fn test_update_track_unknown_user_with_invalid_title(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Mine").await;

    let response = server
        .put(&format!("/tracks/{id}"))
        .json(&json!({ "username": "ghost", "title": "t".repeat(201) }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "UserNotFound");
}

#[sqlx::test]
async fn test_update_track_title_too_long(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Song").await;

    let response = server
        .put(&format!("/tracks/{id}"))
        .json(&json!({ "username": "alice", "title": "t".repeat(201) }))
        .await;

    response.assert_status_bad_request();
    let stored = server.get(&format!("/tracks/{id}")).await.json::<Value>();
    assert_eq!(stored["title"], "Song");
}

#[sqlx::test]
async fn test_delete_track(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Song").await;

    let response = server
        .delete(&format!("/tracks/{id}"))
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Track deleted successfully");
    assert_eq!(json["deleted_track"]["id"], id);
    assert_eq!(json["deleted_track"]["title"], "Song");

    server
        .get(&format!("/tracks/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_track_wrong_owner(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Song").await;

    let response = server
        .delete(&format!("/tracks/{id}"))
        .json(&json!({ "username": "bob" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "TrackNotFound");
    assert_eq!(common::count_tracks(&pool, alice).await, 1);
}

#[sqlx::test]
async fn test_delete_track_unknown_user(pool: PgPool) {
    let (server, alice, _) = server_with_users(&pool).await;
    let id = common::create_test_track(&pool, alice, "Song").await;

    let response = server
        .delete(&format!("/tracks/{id}"))
        .json(&json!({ "username": "ghost" }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "UserNotFound");
}
