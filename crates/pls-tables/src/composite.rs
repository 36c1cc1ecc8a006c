//! Composite (Total Language) table: summed standard scores →
//! composite standard score + percentile rank.

use pls_model::{PlsError, Result};

/// A composite table key: one summed value or a hyphenated inclusive
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKey {
    Single(i64),
    Range(i64, i64),
}

impl CompositeKey {
    /// Parse a key cell, e.g. `"160"` or `"165-175"`.
    pub fn parse(cell: &str) -> Result<Self> {
        let trimmed = cell.trim();
        if let Some((low, high)) = trimmed.split_once('-') {
            let (Ok(low), Ok(high)) = (low.trim().parse::<i64>(), high.trim().parse::<i64>())
            else {
                return Err(PlsError::Table(format!(
                    "composite key {trimmed:?} is not an integer range"
                )));
            };
            if low > high {
                return Err(PlsError::Table(format!(
                    "composite range {trimmed:?} is inverted"
                )));
            }
            return Ok(CompositeKey::Range(low, high));
        }
        trimmed
            .parse::<i64>()
            .map(CompositeKey::Single)
            .map_err(|_| PlsError::Table(format!("composite key {trimmed:?} is not an integer")))
    }

    pub fn contains(&self, sum: i64) -> bool {
        match self {
            CompositeKey::Single(value) => sum == *value,
            CompositeKey::Range(low, high) => *low <= sum && sum <= *high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeRow {
    pub key: CompositeKey,
    pub standard: i64,
    pub percentile: i64,
}

/// Rows ascending by key; ranges are non-overlapping and contiguous,
/// so the scan can stop at the first containing row.
#[derive(Debug, Clone)]
pub struct CompositeTable {
    pub rows: Vec<CompositeRow>,
}

impl CompositeTable {
    pub fn new(rows: Vec<CompositeRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(PlsError::Table("composite table is empty".to_string()));
        }
        Ok(Self { rows })
    }

    /// First row whose key contains the sum.
    pub fn find(&self, sum: i64) -> Option<&CompositeRow> {
        self.rows.iter().find(|row| row.key.contains(sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_and_range_keys() {
        assert_eq!(CompositeKey::parse("160").unwrap(), CompositeKey::Single(160));
        assert_eq!(
            CompositeKey::parse("165-175").unwrap(),
            CompositeKey::Range(165, 175)
        );
        assert_eq!(
            CompositeKey::parse(" 165 - 175 ").unwrap(),
            CompositeKey::Range(165, 175)
        );
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(CompositeKey::parse("abc").is_err());
        assert!(CompositeKey::parse("175-165").is_err());
    }

    #[test]
    fn containment_is_inclusive() {
        let key = CompositeKey::Range(165, 175);
        assert!(key.contains(165));
        assert!(key.contains(170));
        assert!(key.contains(175));
        assert!(!key.contains(176));
    }

    #[test]
    fn find_returns_first_containing_row() {
        let table = CompositeTable::new(vec![
            CompositeRow {
                key: CompositeKey::Single(160),
                standard: 80,
                percentile: 9,
            },
            CompositeRow {
                key: CompositeKey::Range(165, 175),
                standard: 84,
                percentile: 14,
            },
        ])
        .unwrap();
        assert_eq!(table.find(160).unwrap().standard, 80);
        assert_eq!(table.find(170).unwrap().standard, 84);
        assert!(table.find(200).is_none());
    }
}
