//! Batch scoring pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the input file, parse subject records
//! 2. **Load tables**: assemble the reference library
//! 3. **Score**: derive every output score per subject
//! 4. **Report**: write the dated importable CSV
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pls_ingest::{ParsedSubjects, parse_subjects, read_table};
use pls_model::{ColumnBindings, ScoredSubject, SubjectRecord};
use pls_report::write_report;
use pls_score::{normalize_age_token, score_subject};
use pls_tables::RefLibrary;

use crate::types::AgeFlag;

/// Result of the scoring stage.
#[derive(Debug)]
pub struct ScoreOutcome {
    /// All subjects in input order, flagged ones included.
    pub subjects: Vec<ScoredSubject>,
    /// Subjects whose age resolved to no band.
    pub flags: Vec<AgeFlag>,
}

/// Read the input file and parse subject records against the bindings.
pub fn ingest(input_file: &Path, bindings: &ColumnBindings) -> Result<ParsedSubjects> {
    let span = info_span!("ingest", input_file = %input_file.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_table(input_file)?;
    let parsed = parse_subjects(&table, bindings, &normalize_age_token)
        .with_context(|| format!("parse {}", input_file.display()))?;
    info!(
        subjects = parsed.records.len(),
        dropped_missing_age = parsed.dropped_missing_age,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(parsed)
}

/// Load every reference table from the reference directory.
pub fn load_tables(ref_dir: &Path) -> Result<RefLibrary> {
    let span = info_span!("load_tables", ref_dir = %ref_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let library = RefLibrary::load(ref_dir)
        .with_context(|| format!("load reference tables from {}", ref_dir.display()))?;
    info!(
        duration_ms = start.elapsed().as_millis(),
        "reference tables loaded"
    );
    Ok(library)
}

/// Score every subject. Row order is preserved; flagged subjects stay
/// in the list with sentinel scores.
pub fn score_all(records: Vec<SubjectRecord>, library: &RefLibrary) -> Result<ScoreOutcome> {
    let span = info_span!("score");
    let _guard = span.enter();
    let start = Instant::now();
    let mut subjects = Vec::with_capacity(records.len());
    let mut flags = Vec::new();
    for record in records {
        let scored = score_subject(record, library)?;
        if !scored.validity.is_valid() {
            flags.push(AgeFlag {
                subject_id: scored.record.subject_id.clone(),
                age: scored.record.age.to_string(),
            });
        }
        subjects.push(scored);
    }
    info!(
        scored = subjects.len() - flags.len(),
        flagged = flags.len(),
        duration_ms = start.elapsed().as_millis(),
        "scoring complete"
    );
    Ok(ScoreOutcome { subjects, flags })
}

/// Write the importable file.
pub fn report(subjects: &[ScoredSubject], output_dir: &Path) -> Result<PathBuf> {
    let span = info_span!("report", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let path = write_report(subjects, output_dir)?;
    info!(
        path = %path.display(),
        duration_ms = start.elapsed().as_millis(),
        "report complete"
    );
    Ok(path)
}
