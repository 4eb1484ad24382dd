mod common;

use music_api::domain::entities::{NewUser, UserPatch};
use music_api::domain::repositories::UserRepository;
use music_api::error::AppError;
use music_api::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_user(username: &str, email: Option<&str>) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.map(str::to_string),
        password: "secret".to_string(),
    }
}

#[sqlx::test]
async fn test_create_user(pool: PgPool) {
    common::init_schema(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .create(new_user("alice", Some("alice@example.com")))
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user.password, "secret");
    assert!(user.id > 0);
}

#[sqlx::test]
async fn test_create_duplicate_username(pool: PgPool) {
    common::init_schema(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("alice", None)).await.unwrap();
    let result = repo.create(new_user("alice", None)).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_create_duplicate_email(pool: PgPool) {
    common::init_schema(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("alice", Some("same@example.com")))
        .await
        .unwrap();
    let result = repo.create(new_user("bob", Some("same@example.com"))).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_users_without_email_do_not_collide(pool: PgPool) {
    common::init_schema(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("alice", None)).await.unwrap();
    let result = repo.create(new_user("bob", None)).await;

    assert!(result.is_ok());
}

#[sqlx::test]
async fn test_find_by_username_is_exact(pool: PgPool) {
    common::init_schema(&pool).await;
    common::create_test_user(&pool, "alice", None).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.find_by_username("alice").await.unwrap().is_some());
    assert!(repo.find_by_username("Alice").await.unwrap().is_none());
    assert!(repo.find_by_username("ali").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_only_supplied_fields(pool: PgPool) {
    common::init_schema(&pool).await;
    let id = common::create_test_user(&pool, "alice", Some("a@example.com")).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let patch = UserPatch {
        password: Some("new-password".to_string()),
        ..Default::default()
    };
    let user = repo.update(id, patch).await.unwrap().unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email.as_deref(), Some("a@example.com"));
    assert_eq!(user.password, "new-password");
}

#[sqlx::test]
async fn test_update_rename(pool: PgPool) {
    common::init_schema(&pool).await;
    let id = common::create_test_user(&pool, "alice", None).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let patch = UserPatch {
        new_username: Some("alice2".to_string()),
        ..Default::default()
    };
    repo.update(id, patch).await.unwrap();

    assert!(repo.find_by_username("alice").await.unwrap().is_none());
    assert_eq!(
        repo.find_by_username("alice2").await.unwrap().unwrap().id,
        id
    );
}

#[sqlx::test]
async fn test_update_rename_to_taken_username(pool: PgPool) {
    common::init_schema(&pool).await;
    let id = common::create_test_user(&pool, "alice", None).await;
    common::create_test_user(&pool, "bob", None).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let patch = UserPatch {
        new_username: Some("bob".to_string()),
        ..Default::default()
    };
    let result = repo.update(id, patch).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_update_missing_user(pool: PgPool) {
    common::init_schema(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let patch = UserPatch {
        email: Some("x@example.com".to_string()),
        ..Default::default()
    };

    assert!(repo.update(999, patch).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_with_tracks(pool: PgPool) {
    common::init_schema(&pool).await;
    let alice = common::create_test_user(&pool, "alice", None).await;
    let bob = common::create_test_user(&pool, "bob", None).await;
    common::create_test_track(&pool, alice, "One").await;
    common::create_test_track(&pool, alice, "Two").await;
    common::create_test_track(&pool, bob, "Other").await;

    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    let deleted = repo.delete_with_tracks("alice").await.unwrap().unwrap();

    assert_eq!(deleted.user.id, alice);
    assert_eq!(deleted.tracks_deleted, 2);
    assert!(repo.find_by_username("alice").await.unwrap().is_none());
    assert_eq!(common::count_tracks(&pool, alice).await, 0);
    assert_eq!(common::count_tracks(&pool, bob).await, 1);
}

#[sqlx::test]
async fn test_delete_missing_user(pool: PgPool) {
    common::init_schema(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.delete_with_tracks("ghost").await.unwrap().is_none());
}
