//! Report file output

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::aggregate::StatsReport;
use crate::error::Result;

/// Write the report as pretty-printed JSON, creating parent folders
pub fn write_report(path: &Path, report: &StatsReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(
        "Wrote report to {} ({} services, total revenue {:.2})",
        path.display(),
        report.services.len(),
        report.total_revenue
    );
    Ok(())
}
