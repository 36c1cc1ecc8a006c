//! Target import schema: the fixed output column whitelist.
//!
//! Column names match the clinical data repository's PLS instrument;
//! the importer rejects files whose header deviates from this set.

/// Key column of the output file.
pub const SUBJECT_ID: &str = "subject_id";

/// Output columns after the key, in import order.
pub const OUTPUT_COLUMNS: [&str; 18] = [
    "redcap_event_name",
    "pls_aud_comp_raw",
    "pls_aud_comp_ss",
    "pls_aud_comp_pr",
    "pls_aud_comp_ae_ym",
    "pls_aud_comp_ae_m",
    "pls_exp_comm_raw",
    "pls_exp_comm_ss",
    "pls_exp_comm_pr",
    "pls_exp_comm_ae_ym",
    "pls_exp_comm_ae_m",
    "pls_total_ss_2",
    "pls_total_pr",
    "pls_total_ae_ym",
    "pls_total_ae_m",
    "pls_gsv_ac",
    "pls_gsv_ec",
    "preschool_language_scale_complete",
];

/// Instrument status appended to every row: 2 = form complete.
pub const FORM_COMPLETE: i64 = 2;

/// Stem of the output filename; the run date is appended.
pub const OUTPUT_FILE_STEM: &str = "Importable_PLS";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_has_no_duplicates() {
        let mut seen = std::collections::BTreeSet::new();
        for column in OUTPUT_COLUMNS {
            assert!(seen.insert(column), "duplicate column {column}");
        }
        assert!(!seen.contains(SUBJECT_ID));
    }

    #[test]
    fn status_column_is_last() {
        assert_eq!(
            OUTPUT_COLUMNS.last().copied(),
            Some("preschool_language_scale_complete")
        );
    }
}
