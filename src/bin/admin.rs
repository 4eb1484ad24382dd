//! CLI administration tool for music-api.
//!
//! Provides database diagnostics, statistics and a destructive table reset
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- --config music.env db check
//!
//! # Show server version and whether tables exist
//! cargo run --bin admin -- db info
//!
//! # Drop and recreate tables (asks for confirmation)
//! cargo run --bin admin -- db rebuild
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # List users with their track counts
//! cargo run --bin admin -- users
//! ```
//!
//! # Configuration
//!
//! Uses the same keys as the server (`DB_HOST`, `DB_PORT`, `DB_USER`,
//! `DB_USER_PASS`, `DB_NAME`), read from `--config` or the environment.

use music_api::config;
use music_api::infrastructure::persistence::schema;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::{FromRow, PgPool};
use std::path::PathBuf;

/// CLI tool for managing music-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a KEY=value configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show statistics
    Stats,

    /// List users and how many tracks each owns
    Users,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Drop and recreate both tables, deleting every user and track
    Rebuild {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(FromRow)]
struct UserSummary {
    id: i32,
    username: String,
    email: Option<String>,
    track_count: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;

    let pool = PgPool::connect_with(config.connect_options())
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Users => list_users(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays user and track counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let tracks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:  {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Tracks: {}",
        tracks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists users ordered by id.
///
/// # Output Format
///
/// ```text
/// 👤 Users
///
///   ID  Username             Email                          Tracks
///   ──────────────────────────────────────────────────────────────
///   1   alice                alice@example.com              3
///   2   bob                  -                              0
/// ```
async fn list_users(pool: &PgPool) -> Result<()> {
    println!("{}", "👤 Users".bright_blue().bold());
    println!();

    let users: Vec<UserSummary> = sqlx::query_as(
        r#"
        SELECT u.id, u.username, u.email, COUNT(t.id) AS track_count
        FROM users u
        LEFT JOIN tracks t ON t.user_id = u.id
        GROUP BY u.id, u.username, u.email
        ORDER BY u.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Tracks".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email.as_deref().unwrap_or("-"),
            user.track_count.to_string().bright_green()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic and maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let tables = schema::tables_exist(pool).await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Tables:     {}",
                if tables {
                    "present".green()
                } else {
                    "missing".red()
                }
            );
            println!();
        }
        DbAction::Rebuild { yes } => {
            println!("{}", "🧨 Rebuild Tables".bright_blue().bold());
            println!();
            println!(
                "{}",
                "⚠️  This deletes every user and track.".red().bold()
            );
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Drop and recreate tables?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            schema::reset_tables(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to rebuild tables: {}", e))?;

            println!("{}", "✅ Tables rebuilt".green().bold());
            println!();
        }
    }

    Ok(())
}
