//! Per-band norm tables: raw score → standard score + percentile rank.

use pls_model::{PlsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormRow {
    pub raw: i64,
    pub standard: i64,
    pub percentile: i64,
}

/// One subtest's table for one age band, rows ascending by raw score.
#[derive(Debug, Clone)]
pub struct NormTable {
    pub band: String,
    pub rows: Vec<NormRow>,
}

impl NormTable {
    /// Build a table, enforcing the invariants the lookup scan relies
    /// on: at least two rows (the floor clamp reads row two's key and
    /// row one's values) and strictly ascending raw scores.
    pub fn new(band: impl Into<String>, rows: Vec<NormRow>) -> Result<Self> {
        let band = band.into();
        if rows.len() < 2 {
            return Err(PlsError::Table(format!(
                "norm table {band}: needs at least 2 rows, got {}",
                rows.len()
            )));
        }
        for pair in rows.windows(2) {
            if pair[0].raw >= pair[1].raw {
                return Err(PlsError::Table(format!(
                    "norm table {band}: raw scores not ascending at {}",
                    pair[1].raw
                )));
            }
        }
        Ok(Self { band, rows })
    }

    /// Raw-score key of the second row — the floor-clamp threshold.
    pub fn clamp_threshold(&self) -> i64 {
        self.rows[1].raw
    }

    /// Values of the first row — what raw scores below the threshold
    /// clamp to.
    pub fn floor_row(&self) -> NormRow {
        self.rows[0]
    }
}
