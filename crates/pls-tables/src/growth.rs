//! Growth tables: raw score → age-equivalent token + growth scale
//! value. Lookup is exact-match only; the AE token stays unparsed
//! until a row is actually used, matching the published tables where
//! only reachable rows are guaranteed well-formed.

use pls_model::ScoreValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthRow {
    pub raw: i64,
    /// Age-equivalent token as published, e.g. `"2-6"` or `"<1-0"`.
    pub equivalent: String,
    /// Growth scale value; `Missing` when the table has no GSV column
    /// (the combined total table).
    pub gsv: ScoreValue,
}

#[derive(Debug, Clone)]
pub struct GrowthTable {
    pub name: String,
    pub rows: Vec<GrowthRow>,
}

impl GrowthTable {
    pub fn new(name: impl Into<String>, rows: Vec<GrowthRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Exact-match row for a raw score. No clamping at either end.
    pub fn find(&self, raw: i64) -> Option<&GrowthRow> {
        self.rows.iter().find(|row| row.raw == raw)
    }
}
