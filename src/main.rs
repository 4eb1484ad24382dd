use music_api::{config, server};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// HTTP API for users and their music tracks.
#[derive(Parser)]
#[command(name = "music-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a KEY=value configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Drop and recreate the database before serving (destroys all data)
    #[arg(long)]
    rebuild_db: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.rebuild_db {
        config.rebuild_db = true;
    }

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
