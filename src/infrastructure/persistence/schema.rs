//! Table definitions and database bootstrap.
//!
//! The schema is created with `CREATE TABLE IF NOT EXISTS` on every start.
//! Destructive rebuilds only happen when explicitly requested (`REBUILD_DB`
//! or `--rebuild-db` on the server, `admin db rebuild` on the CLI).

use anyhow::{Context, Result};
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection, PgPool};

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id       SERIAL PRIMARY KEY,
    username VARCHAR(50)  NOT NULL,
    email    VARCHAR(50),
    password VARCHAR(300) NOT NULL,
    CONSTRAINT users_username_key UNIQUE (username),
    CONSTRAINT users_email_key UNIQUE (email)
);

CREATE TABLE IF NOT EXISTS tracks (
    id      SERIAL PRIMARY KEY,
    user_id INTEGER      NOT NULL REFERENCES users (id),
    title   VARCHAR(200) NOT NULL,
    artist  VARCHAR(200),
    url     VARCHAR(100)
);

CREATE INDEX IF NOT EXISTS tracks_user_id_idx ON tracks (user_id);
"#;

const DROP_TABLES: &str = r#"
DROP TABLE IF EXISTS tracks;
DROP TABLE IF EXISTS users;
"#;

/// Creates both tables if they do not exist yet.
pub async fn create_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_TABLES).execute(pool).await?;
    Ok(())
}

/// Drops both tables and creates them again, discarding all rows.
pub async fn reset_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(DROP_TABLES).execute(pool).await?;
    create_tables(pool).await
}

/// Returns true if both tables are present in the connected database.
pub async fn tables_exist(pool: &PgPool) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT to_regclass('public.users') IS NOT NULL AND to_regclass('public.tracks') IS NOT NULL",
    )
    .fetch_one(pool)
    .await
}

/// Drops and recreates the whole database.
///
/// `maintenance` must point at a database other than `db_name` (usually
/// `postgres`). Open sessions on `db_name` are terminated.
///
/// # Errors
///
/// Returns an error if `db_name` is not a plain identifier or if any
/// statement fails.
pub async fn rebuild_database(maintenance: &PgConnectOptions, db_name: &str) -> Result<()> {
    if !is_plain_identifier(db_name) {
        anyhow::bail!("Refusing to rebuild database with unsafe name '{db_name}'");
    }

    let mut conn = PgConnection::connect_with(maintenance)
        .await
        .context("Failed to connect to maintenance database")?;

    sqlx::raw_sql(&format!(
        r#"DROP DATABASE IF EXISTS "{db_name}" WITH (FORCE)"#
    ))
    .execute(&mut conn)
    .await
    .with_context(|| format!("Failed to drop database {db_name}"))?;

    sqlx::raw_sql(&format!(r#"CREATE DATABASE "{db_name}""#))
        .execute(&mut conn)
        .await
        .with_context(|| format!("Failed to create database {db_name}"))?;

    conn.close().await?;

    tracing::warn!(database = db_name, "Database dropped and recreated");
    Ok(())
}

/// Accepts `[A-Za-z0-9_]+`, which is safe to interpolate into DDL.
pub fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plain_identifier() {
        assert!(is_plain_identifier("music_app"));
        assert!(is_plain_identifier("db2"));

        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("music-app"));
        assert!(!is_plain_identifier("x\"; DROP TABLE users; --"));
    }
}
