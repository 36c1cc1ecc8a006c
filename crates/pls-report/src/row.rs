//! Flattening a scored subject into one output row.

use pls_model::schema::{FORM_COMPLETE, OUTPUT_COLUMNS, SUBJECT_ID};
use pls_model::ScoredSubject;

/// Header row: the key column followed by the import whitelist.
pub fn header() -> Vec<String> {
    let mut cells = Vec::with_capacity(OUTPUT_COLUMNS.len() + 1);
    cells.push(SUBJECT_ID.to_string());
    cells.extend(OUTPUT_COLUMNS.iter().map(|column| column.to_string()));
    cells
}

/// One output row in whitelist order. Sentinels render in their wire
/// form; age-equivalent cells were formatted at scoring time.
pub fn render(scored: &ScoredSubject) -> Vec<String> {
    let record = &scored.record;
    vec![
        record.subject_id.clone(),
        record.event_name.clone(),
        record.ac_raw.to_string(),
        scored.ac.standard.to_string(),
        scored.ac.percentile.to_string(),
        scored.ac_equivalent.years_months.clone(),
        scored.ac_equivalent.months.clone(),
        record.ec_raw.to_string(),
        scored.ec.standard.to_string(),
        scored.ec.percentile.to_string(),
        scored.ec_equivalent.years_months.clone(),
        scored.ec_equivalent.months.clone(),
        scored.total.standard.to_string(),
        scored.total.percentile.to_string(),
        scored.total_equivalent.years_months.clone(),
        scored.total_equivalent.months.clone(),
        scored.ac_gsv.to_string(),
        scored.ec_gsv.to_string(),
        FORM_COMPLETE.to_string(),
    ]
}
