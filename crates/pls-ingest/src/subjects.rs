//! Subject-record parsing against the configured column bindings.

use anyhow::{Result, anyhow, bail};
use tracing::{debug, warn};

use pls_model::{CanonicalAge, ColumnBindings, ScoreValue, SubjectRecord};

use crate::table::DataTable;

/// Outcome of parsing one input table into subject records.
#[derive(Debug)]
pub struct ParsedSubjects {
    /// Records in input row order.
    pub records: Vec<SubjectRecord>,
    /// Rows dropped because the age cell was entirely missing.
    pub dropped_missing_age: usize,
}

/// Normalizer applied to the raw age token before canonical parsing.
/// Injected so ingestion stays independent of the scoring crate.
pub type AgeNormalizer = dyn Fn(&str) -> pls_model::Result<String>;

/// Parse subjects from a loaded table.
///
/// Rows with an empty age cell are dropped (never scored, never
/// reported). Any other malformed cell aborts the run: a silently
/// skipped subject in a clinical import is worse than a failed batch.
pub fn parse_subjects(
    table: &DataTable,
    bindings: &ColumnBindings,
    normalize_age: &AgeNormalizer,
) -> Result<ParsedSubjects> {
    let id_idx = require_column(table, &bindings.subject_id)?;
    let event_idx = require_column(table, &bindings.event_name)?;
    let age_idx = require_column(table, &bindings.age)?;
    let ac_idx = require_column(table, &bindings.ac_raw)?;
    let ec_idx = require_column(table, &bindings.ec_raw)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut dropped_missing_age = 0usize;
    for (row_number, row) in table.rows.iter().enumerate() {
        let age_token = row[age_idx].trim();
        if age_token.is_empty() {
            dropped_missing_age += 1;
            debug!(row = row_number + 2, "dropping row with missing age");
            continue;
        }
        let subject_id = row[id_idx].trim().to_string();
        if subject_id.is_empty() {
            bail!("row {}: empty {} cell", row_number + 2, bindings.subject_id);
        }
        let canonical = normalize_age(age_token)?;
        let age = CanonicalAge::parse(&canonical)?;
        let ac_raw = parse_score(&row[ac_idx], &bindings.ac_raw, row_number)?;
        let ec_raw = parse_score(&row[ec_idx], &bindings.ec_raw, row_number)?;
        records.push(SubjectRecord {
            subject_id,
            event_name: row[event_idx].trim().to_string(),
            age,
            ac_raw,
            ec_raw,
        });
    }

    if dropped_missing_age > 0 {
        warn!(
            dropped = dropped_missing_age,
            "dropped rows with entirely missing age"
        );
    }
    Ok(ParsedSubjects {
        records,
        dropped_missing_age,
    })
}

fn require_column(table: &DataTable, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| anyhow!("input file is missing required column {name:?}"))
}

fn parse_score(cell: &str, column: &str, row_number: usize) -> Result<ScoreValue> {
    ScoreValue::parse(cell).ok_or_else(|| {
        anyhow!(
            "row {}: {column} value {cell:?} is not an integer score",
            row_number + 2
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DataTable;

    fn identity_normalizer(token: &str) -> pls_model::Result<String> {
        Ok(token.to_string())
    }

    fn table(rows: Vec<Vec<&str>>) -> DataTable {
        DataTable {
            headers: vec![
                "subject_id".to_string(),
                "redcap_event_name".to_string(),
                "chron_age_pls".to_string(),
                "pls_aud_comp_raw".to_string(),
                "pls_exp_comm_raw".to_string(),
            ],
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn parses_rows_in_order() {
        let table = table(vec![
            vec!["BR-101", "visit_1_arm_1", "2.6", "40", "38"],
            vec!["BR-102", "visit_1_arm_1", "1.3", "-999", "12"],
        ]);
        let parsed =
            parse_subjects(&table, &ColumnBindings::default(), &identity_normalizer).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].subject_id, "BR-101");
        assert_eq!(parsed.records[1].ac_raw, ScoreValue::Missing);
        assert_eq!(parsed.dropped_missing_age, 0);
    }

    #[test]
    fn drops_missing_age_rows() {
        let table = table(vec![
            vec!["BR-101", "visit_1_arm_1", "", "40", "38"],
            vec!["BR-102", "visit_1_arm_1", "3.1", "22", "25"],
        ]);
        let parsed =
            parse_subjects(&table, &ColumnBindings::default(), &identity_normalizer).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.dropped_missing_age, 1);
        assert_eq!(parsed.records[0].subject_id, "BR-102");
    }

    #[test]
    fn missing_required_column_fails() {
        let mut table = table(vec![]);
        table.headers.remove(2);
        let error = parse_subjects(&table, &ColumnBindings::default(), &identity_normalizer)
            .unwrap_err();
        assert!(error.to_string().contains("chron_age_pls"));
    }

    #[test]
    fn non_integer_score_fails() {
        let table = table(vec![vec!["BR-101", "visit_1_arm_1", "2.6", "forty", "38"]]);
        let error = parse_subjects(&table, &ColumnBindings::default(), &identity_normalizer)
            .unwrap_err();
        assert!(error.to_string().contains("pls_aud_comp_raw"));
    }
}
