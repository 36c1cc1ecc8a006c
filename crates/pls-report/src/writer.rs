//! Dated importable CSV output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use csv::WriterBuilder;
use tracing::info;

use pls_model::schema::OUTPUT_FILE_STEM;
use pls_model::ScoredSubject;

use crate::row;

/// Output filename for a given run date, e.g.
/// `Importable_PLS_2026-08-30.csv`.
pub fn output_file_name(date: NaiveDate) -> String {
    format!("{OUTPUT_FILE_STEM}_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the importable file for today's date into `output_dir`.
/// Returns the path written. Rows keep input order.
pub fn write_report(scored: &[ScoredSubject], output_dir: &Path) -> Result<PathBuf> {
    write_report_dated(scored, output_dir, Local::now().date_naive())
}

pub fn write_report_dated(
    scored: &[ScoredSubject],
    output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let path = output_dir.join(output_file_name(date));
    let mut writer = WriterBuilder::new()
        .from_path(&path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(row::header())
        .context("write header")?;
    for subject in scored {
        writer
            .write_record(row::render(subject))
            .with_context(|| format!("write row for {}", subject.record.subject_id))?;
    }
    writer.flush().context("flush output")?;
    info!(path = %path.display(), rows = scored.len(), "importable file written");
    Ok(path)
}
