//! Score values and the two reserved sentinel states.
//!
//! Published import files encode "no data" as `-999` and "present but
//! unscoreable by table design" as `999`. Those magic numbers are
//! confined to the wire: everywhere else a score is one of three
//! explicit states so the two sentinels can never be confused with a
//! real value or with each other.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire encoding for a missing input or output.
pub const MISSING_WIRE: i64 = -999;

/// Wire encoding for a score outside the reference table's range.
pub const OUT_OF_RANGE_WIRE: i64 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreValue {
    /// No data was collected. Propagates through every computation.
    Missing,
    /// Collected, but the published tables cannot score it.
    OutOfRange,
    Value(i64),
}

impl ScoreValue {
    /// Parse a raw input cell. Empty cells and the `-999` wire form are
    /// missing; `999` is the out-of-range marker.
    pub fn parse(cell: &str) -> Option<Self> {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Some(ScoreValue::Missing);
        }
        let raw = parse_wire_int(trimmed)?;
        Some(Self::from_wire(raw))
    }

    pub fn from_wire(raw: i64) -> Self {
        match raw {
            MISSING_WIRE => ScoreValue::Missing,
            OUT_OF_RANGE_WIRE => ScoreValue::OutOfRange,
            value => ScoreValue::Value(value),
        }
    }

    /// Render back to the numeric wire form used by the import files.
    pub fn wire(&self) -> i64 {
        match self {
            ScoreValue::Missing => MISSING_WIRE,
            ScoreValue::OutOfRange => OUT_OF_RANGE_WIRE,
            ScoreValue::Value(value) => *value,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ScoreValue::Missing)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, ScoreValue::Value(_))
    }

    pub fn as_value(&self) -> Option<i64> {
        match self {
            ScoreValue::Value(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire())
    }
}

/// Integer parse tolerant of the float renditions spreadsheets leave
/// behind (`"85.0"` parses as 85; `"85.5"` does not parse).
fn parse_wire_int(value: &str) -> Option<i64> {
    if let Ok(parsed) = value.parse::<i64>() {
        return Some(parsed);
    }
    let parsed = value.parse::<f64>().ok()?;
    if parsed.fract() == 0.0 && parsed.abs() < i64::MAX as f64 {
        Some(parsed as i64)
    } else {
        None
    }
}

/// A standard score / percentile rank pair from one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormScores {
    pub standard: ScoreValue,
    pub percentile: ScoreValue,
}

impl NormScores {
    pub fn missing() -> Self {
        Self {
            standard: ScoreValue::Missing,
            percentile: ScoreValue::Missing,
        }
    }

    pub fn out_of_range() -> Self {
        Self {
            standard: ScoreValue::OutOfRange,
            percentile: ScoreValue::OutOfRange,
        }
    }
}
