//! Total Language composite: sum the two standard scores, look up the
//! sum in the composite table.

use pls_model::{NormScores, ScoreValue};
use pls_tables::CompositeTable;

/// Composite standard score and percentile from the two subtest
/// standard scores.
///
/// Either input out-of-range forces both outputs out-of-range; either
/// missing forces both missing (in that precedence order). Otherwise
/// the sum is matched against the table's single-value and inclusive
/// range keys, first match wins — ranges are non-overlapping and
/// contiguous, so early exit is sound.
pub fn composite_scores(
    ac_standard: ScoreValue,
    ec_standard: ScoreValue,
    table: &CompositeTable,
) -> NormScores {
    if ac_standard == ScoreValue::OutOfRange || ec_standard == ScoreValue::OutOfRange {
        return NormScores::out_of_range();
    }
    let (Some(ac), Some(ec)) = (ac_standard.as_value(), ec_standard.as_value()) else {
        return NormScores::missing();
    };
    match table.find(ac + ec) {
        Some(row) => NormScores {
            standard: ScoreValue::Value(row.standard),
            percentile: ScoreValue::Value(row.percentile),
        },
        None => NormScores::missing(),
    }
}

/// Sum of the two raw scores for the combined age-equivalent lookup.
/// Missing unless both are real values.
pub fn sum_raw(ac_raw: ScoreValue, ec_raw: ScoreValue) -> ScoreValue {
    match (ac_raw.as_value(), ec_raw.as_value()) {
        (Some(ac), Some(ec)) => ScoreValue::Value(ac + ec),
        _ => ScoreValue::Missing,
    }
}
