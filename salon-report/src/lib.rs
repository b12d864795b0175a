//! salon-report library - offline revenue reporting
//!
//! Loads every client and appointment, groups appointments by normalized
//! service name, prices each group and produces a JSON report plus a
//! console summary.

pub mod aggregate;
pub mod error;
pub mod normalize;
pub mod pricing;
pub mod summary;
pub mod writer;

use std::path::Path;

use salon_common::db::{appointments, clients};
use salon_common::{Appointment, Client};
use sqlx::SqlitePool;
use tracing::info;

pub use aggregate::{aggregate, ReportOptions, StatsReport};
pub use error::{ReportError, Result};
pub use normalize::normalize_service;
pub use pricing::PriceTable;
pub use summary::Summary;

/// Everything the aggregator reads
#[derive(Debug, Clone, Default)]
pub struct SalonData {
    pub clients: Vec<Client>,
    pub appointments: Vec<Appointment>,
}

/// Load the full client and appointment sets
pub async fn load_data(pool: &SqlitePool) -> Result<SalonData> {
    let clients = clients::list_clients(pool).await?;
    let appointments = appointments::list_appointments(pool).await?;
    info!(
        "Loaded {} clients and {} appointments",
        clients.len(),
        appointments.len()
    );
    Ok(SalonData {
        clients,
        appointments,
    })
}

/// What a report run produced
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No appointments; no file written
    NoAppointments,
    /// Report written to the given path
    Written(StatsReport),
}

/// Aggregate loaded data and write the report file when there is anything to report
pub fn run_report(
    data: &SalonData,
    prices: &PriceTable,
    options: &ReportOptions,
    output: &Path,
) -> Result<RunOutcome> {
    match aggregate(&data.clients, &data.appointments, prices, options) {
        None => {
            info!("No appointments, skipping report");
            Ok(RunOutcome::NoAppointments)
        }
        Some(report) => {
            writer::write_report(output, &report)?;
            Ok(RunOutcome::Written(report))
        }
    }
}
