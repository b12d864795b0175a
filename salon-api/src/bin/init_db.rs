//! init-db - reset the salon database and load sample data
//!
//! Drops both tables, recreates them and inserts four sample clients with a
//! handful of appointments. All existing data is lost, so `--yes` is required.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use salon_common::config::{ensure_root_folder, resolve_root_folder, TomlConfig};
use salon_common::db::{init_database, seed};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "init-db")]
#[command(about = "Reset the salon database and load sample data (destroys existing data)")]
#[command(version)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, env = "SALON_CONFIG")]
    config: Option<PathBuf>,

    /// Root folder holding the database
    #[arg(short, long, env = "SALON_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Confirm that all existing clients and appointments may be deleted
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_source) = TomlConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .init();
    config_source.log();

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), &config);
    let db_path = config.database_path(&root_folder);

    if !args.yes {
        bail!(
            "Refusing to reset {} without --yes: every client and appointment would be deleted",
            db_path.display()
        );
    }

    ensure_root_folder(&root_folder)?;
    let pool = init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let summary = seed::reset_with_sample_data(&pool)
        .await
        .context("Failed to load sample data")?;
    pool.close().await;

    info!(
        "Database initialized at {} ({} clients, {} appointments)",
        db_path.display(),
        summary.clients,
        summary.appointments
    );
    Ok(())
}
