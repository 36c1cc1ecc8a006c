//! Raw-score lookup against a per-band norm table.

use pls_model::{NormScores, ScoreValue};
use pls_tables::{NormRow, NormTable};

/// Resolve standard score and percentile rank for one raw score.
///
/// Sentinels short-circuit: missing stays missing, out-of-range stays
/// out-of-range on both outputs. Real values go through `scan`.
pub fn lookup_norm(raw: ScoreValue, table: &NormTable) -> NormScores {
    match raw {
        ScoreValue::Missing => NormScores::missing(),
        ScoreValue::OutOfRange => NormScores::out_of_range(),
        ScoreValue::Value(value) => NormScores {
            standard: scan(value, table, |row| row.standard),
            percentile: scan(value, table, |row| row.percentile),
        },
    }
}

/// Exhaustive scan over every row, last match wins.
///
/// This is the boundary policy of record, kept bit-for-bit: every row
/// is visited, an exact raw-score match takes that row's value, and a
/// raw below the second row's key takes the first row's value (the
/// floor clamp). When both fire across the scan — a raw that exactly
/// matches the first row is also below the clamp threshold — the
/// later clamp assignments win, and they carry the same first-row
/// value, so the outcome is unchanged. A raw above the table maximum
/// with no exact match assigns nothing and the result keeps its
/// missing initialization; the tables list every scoreable raw, so
/// this arm only fires on inputs the instrument cannot score.
fn scan(raw: i64, table: &NormTable, column: impl Fn(NormRow) -> i64) -> ScoreValue {
    let mut result = ScoreValue::Missing;
    for row in &table.rows {
        if raw == row.raw {
            result = ScoreValue::Value(column(*row));
        } else if raw < table.clamp_threshold() {
            result = ScoreValue::Value(column(table.floor_row()));
        }
    }
    result
}
