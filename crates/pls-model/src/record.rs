//! Subject records and their scored counterparts.

use serde::{Deserialize, Serialize};

use crate::age::CanonicalAge;
use crate::score::{NormScores, ScoreValue};

/// One parsed input row. Immutable once built; lives for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    /// Base identifier from the input file.
    pub subject_id: String,
    /// Event label carried through to the output untouched.
    pub event_name: String,
    /// Canonical chronological age.
    pub age: CanonicalAge,
    /// Auditory Comprehension raw score.
    pub ac_raw: ScoreValue,
    /// Expressive Communication raw score.
    pub ec_raw: ScoreValue,
}

impl SubjectRecord {
    /// Processing key: base id with the age appended. Repeat visits of
    /// the same subject stay distinct while scoring; the report strips
    /// the suffix again.
    pub fn processing_key(&self) -> String {
        format!("{}-{}", self.subject_id, self.age)
    }
}

/// Whether a subject's age is covered by the reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeValidity {
    /// Covered; holds the matched band name (e.g. `"2.6-2.11"`).
    Valid(String),
    /// Not covered by any band, or age zero. The subject is excluded
    /// from numeric scoring but stays in the output.
    Invalid,
}

impl AgeValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, AgeValidity::Valid(_))
    }

    pub fn band_name(&self) -> Option<&str> {
        match self {
            AgeValidity::Valid(name) => Some(name),
            AgeValidity::Invalid => None,
        }
    }
}

/// Formatted age-equivalent outputs for one score. Both fields carry
/// the missing-sentinel wire form when no table row matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalentOutput {
    /// Display form, e.g. `"2y6m"`, `"<1y0m"`, or `"-999"`.
    pub years_months: String,
    /// Total-months form, e.g. `"30"`, `"<12"`, or `"-999"`.
    pub months: String,
}

impl EquivalentOutput {
    pub fn missing() -> Self {
        Self {
            years_months: ScoreValue::Missing.to_string(),
            months: ScoreValue::Missing.to_string(),
        }
    }
}

/// Everything derived for one subject. Computed once, merged into the
/// output row, never mutated afterward.
#[derive(Debug, Clone)]
pub struct ScoredSubject {
    pub record: SubjectRecord,
    pub validity: AgeValidity,
    pub ac: NormScores,
    pub ec: NormScores,
    pub total: NormScores,
    pub ac_equivalent: EquivalentOutput,
    pub ec_equivalent: EquivalentOutput,
    pub total_equivalent: EquivalentOutput,
    pub ac_gsv: ScoreValue,
    pub ec_gsv: ScoreValue,
}

impl ScoredSubject {
    /// Sentinel-filled result for a subject whose age no band covers.
    pub fn unscored(record: SubjectRecord) -> Self {
        Self {
            record,
            validity: AgeValidity::Invalid,
            ac: NormScores::missing(),
            ec: NormScores::missing(),
            total: NormScores::missing(),
            ac_equivalent: EquivalentOutput::missing(),
            ec_equivalent: EquivalentOutput::missing(),
            total_equivalent: EquivalentOutput::missing(),
            ac_gsv: ScoreValue::Missing,
            ec_gsv: ScoreValue::Missing,
        }
    }
}

/// Names of the five required input columns. The injected configuration
/// object replacing the original's hardcoded globals; loadable from a
/// JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnBindings {
    pub subject_id: String,
    pub event_name: String,
    pub age: String,
    pub ac_raw: String,
    pub ec_raw: String,
}

impl Default for ColumnBindings {
    fn default() -> Self {
        Self {
            subject_id: "subject_id".to_string(),
            event_name: "redcap_event_name".to_string(),
            age: "chron_age_pls".to_string(),
            ac_raw: "pls_aud_comp_raw".to_string(),
            ec_raw: "pls_exp_comm_raw".to_string(),
        }
    }
}
