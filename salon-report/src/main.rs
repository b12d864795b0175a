//! salon-report - offline revenue report for the salon database
//!
//! Opens the database read-only, prints an activity summary and writes the
//! JSON revenue report. With no appointments it prints a notice and writes
//! nothing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salon_common::config::{resolve_root_folder, TomlConfig};
use salon_common::db::connect_readonly;
use salon_report::{load_data, run_report, PriceTable, ReportOptions, RunOutcome, Summary};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "salon-report")]
#[command(about = "Aggregate salon appointments into a revenue report")]
#[command(version)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, env = "SALON_CONFIG")]
    config: Option<PathBuf>,

    /// Root folder holding the database
    #[arg(short, long, env = "SALON_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Database file (overrides root folder and config)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Report output file (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave the client roster out of the report
    #[arg(long)]
    no_roster: bool,

    /// Leave the full appointment listing out of the report
    #[arg(long)]
    no_listing: bool,

    /// Skip the console summary
    #[arg(short, long)]
    quiet: bool,
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
    let db_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.database_path(&root_folder));
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.report_path(&root_folder));

    let prices = PriceTable::with_overrides(&config.prices).context("Invalid price table")?;
    info!("Price table has {} entries", prices.len());

    let pool = connect_readonly(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    let data = load_data(&pool).await.context("Failed to load data")?;
    pool.close().await;

    if !args.quiet {
        println!("{}", Summary::build(&data.clients, &data.appointments));
    }

    let options = ReportOptions {
        include_roster: !args.no_roster,
        include_listing: !args.no_listing,
        ..ReportOptions::default()
    };

    match run_report(&data, &prices, &options, &output)? {
        RunOutcome::NoAppointments => {
            println!("No appointments, no report written.");
        }
        RunOutcome::Written(report) => {
            println!(
                "Report written to {} (total revenue {:.2})",
                output.display(),
                report.total_revenue
            );
        }
    }

    Ok(())
}
