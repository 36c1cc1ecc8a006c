//! Age-equivalent formatting and growth scale values.

use pls_model::{AgeEquivalent, EquivalentOutput, Result, ScoreValue};
use pls_tables::GrowthTable;

/// Age-equivalent outputs plus the growth scale value from one growth
/// table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equivalents {
    pub output: EquivalentOutput,
    pub gsv: ScoreValue,
}

impl Equivalents {
    fn missing() -> Self {
        Self {
            output: EquivalentOutput::missing(),
            gsv: ScoreValue::Missing,
        }
    }
}

/// Resolve age equivalent and GSV for a raw score.
///
/// Exact-match only — no clamping at either end. Sentinels and
/// unmatched raws yield missing outputs; out-of-range raws never
/// appear as table keys, so they fall out the same way. A matched row
/// whose age-equivalent token does not parse aborts the run: that is
/// corrupt reference data, not a subject-level condition.
pub fn resolve_equivalents(raw: ScoreValue, table: &GrowthTable) -> Result<Equivalents> {
    let Some(value) = raw.as_value() else {
        return Ok(Equivalents::missing());
    };
    let Some(row) = table.find(value) else {
        return Ok(Equivalents::missing());
    };
    let equivalent = AgeEquivalent::parse(&row.equivalent)?;
    Ok(Equivalents {
        output: EquivalentOutput {
            years_months: equivalent.display_ym(),
            months: equivalent.display_months(),
        },
        gsv: row.gsv,
    })
}
