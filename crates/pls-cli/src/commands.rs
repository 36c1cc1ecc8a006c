use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info_span};

use pls_model::ColumnBindings;
use pls_tables::AgeBands;

use pls_cli::pipeline::{ScoreOutcome, ingest, load_tables, report, score_all};
use pls_cli::types::RunResult;

use crate::cli::ScoreArgs;
use crate::summary::apply_table_style;

pub fn run_bands() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Band", "From", "To"]);
    apply_table_style(&mut table);
    for band in AgeBands::published().iter() {
        table.add_row(vec![
            band.name.clone(),
            band.start.to_string(),
            band.end.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_score(args: &ScoreArgs) -> Result<RunResult> {
    let run_span = info_span!("score_run", input_file = %args.input_file.display());
    let _run_guard = run_span.enter();

    let bindings = load_bindings(args.bindings.as_deref())?;
    let parsed = ingest(&args.input_file, &bindings)?;
    let library = load_tables(&args.ref_dir)?;
    let ScoreOutcome { subjects, flags } = score_all(parsed.records, &library)?;

    let output_path = if args.dry_run {
        debug!("dry run, skipping output");
        None
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| parent_dir(&args.input_file));
        Some(report(&subjects, &output_dir)?)
    };

    Ok(RunResult {
        input_file: args.input_file.clone(),
        output_path,
        scored: subjects.len() - flags.len(),
        dropped_missing_age: parsed.dropped_missing_age,
        flags,
    })
}

fn parent_dir(input_file: &Path) -> PathBuf {
    match input_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn load_bindings(path: Option<&Path>) -> Result<ColumnBindings> {
    let Some(path) = path else {
        return Ok(ColumnBindings::default());
    };
    let file =
        File::open(path).with_context(|| format!("open bindings file {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parse bindings {}", path.display()))
}
