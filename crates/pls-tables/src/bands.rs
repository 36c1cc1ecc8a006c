//! Age bands and band resolution.
//!
//! Each band is named `"startY.startM-endY.endM"` and owns one pair of
//! norm tables (AC and EC). The list is scanned in publication order
//! and the first match wins, so the order encodes the partition —
//! including the `0.9-1.1` / `1.0-1.5` seam, where ages 1.0 and 1.1
//! belong to the earlier band.

use pls_model::{CanonicalAge, PlsError, Result};

/// Band names in scan order, as published.
pub const BAND_NAMES: [&str; 18] = [
    "0.0-0.2",
    "0.3-0.5",
    "0.6-0.8",
    "0.9-1.1",
    "1.0-1.5",
    "1.6-1.11",
    "2.0-2.5",
    "2.6-2.11",
    "3.0-3.5",
    "3.6-3.11",
    "4.0-4.5",
    "4.6-4.11",
    "5.0-5.5",
    "5.6-5.11",
    "6.0-6.5",
    "6.6-6.11",
    "7.0-7.5",
    "7.6-7.11",
];

/// A closed range of canonical ages sharing one reference table pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBand {
    pub name: String,
    pub start: CanonicalAge,
    pub end: CanonicalAge,
}

impl AgeBand {
    /// Parse a band from its `"Y.M-Y.M"` name.
    pub fn parse_name(name: &str) -> Result<Self> {
        let Some((start_token, end_token)) = name.split_once('-') else {
            return Err(PlsError::Table(format!("malformed band name {name:?}")));
        };
        Ok(Self {
            name: name.to_string(),
            start: CanonicalAge::parse(start_token)?,
            end: CanonicalAge::parse(end_token)?,
        })
    }

    /// Band membership per the published matching rules. Month parts
    /// only constrain the boundary years; interior years match
    /// outright.
    pub fn contains(&self, age: CanonicalAge) -> bool {
        let (start, end) = (self.start, self.end);
        if age.years == start.years && age.years == end.years {
            return start.months <= age.months && age.months <= end.months;
        }
        if age.years == start.years && start.years < end.years {
            return age.months >= start.months;
        }
        if age.years == end.years && start.years < end.years {
            return age.months <= end.months;
        }
        start.years < age.years && age.years < end.years
    }
}

/// The ordered band list.
#[derive(Debug, Clone)]
pub struct AgeBands {
    bands: Vec<AgeBand>,
}

impl AgeBands {
    pub fn new(bands: Vec<AgeBand>) -> Self {
        Self { bands }
    }

    /// The published 18-band list.
    pub fn published() -> Self {
        let bands = BAND_NAMES
            .iter()
            .map(|name| AgeBand::parse_name(name).expect("published band names parse"))
            .collect();
        Self { bands }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgeBand> {
        self.bands.iter()
    }

    /// First band containing the age, in scan order. Zero ages are
    /// never resolvable: the instrument has no norms for them.
    pub fn resolve(&self, age: CanonicalAge) -> Option<&AgeBand> {
        if age.is_zero() {
            return None;
        }
        self.bands.iter().find(|band| band.contains(age))
    }
}

impl Default for AgeBands {
    fn default() -> Self {
        Self::published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(token: &str) -> Option<String> {
        AgeBands::published()
            .resolve(CanonicalAge::parse(token).unwrap())
            .map(|band| band.name.clone())
    }

    #[test]
    fn resolves_within_single_year_band() {
        assert_eq!(resolve("2.3").as_deref(), Some("2.0-2.5"));
        assert_eq!(resolve("2.9").as_deref(), Some("2.6-2.11"));
    }

    #[test]
    fn resolves_boundary_months_inclusively() {
        assert_eq!(resolve("2.0").as_deref(), Some("2.0-2.5"));
        assert_eq!(resolve("2.5").as_deref(), Some("2.0-2.5"));
        assert_eq!(resolve("7.11").as_deref(), Some("7.6-7.11"));
    }

    #[test]
    fn year_spanning_band_matches_both_years() {
        // 0.9-1.1 spans the year boundary: 0y11m and 1y1m both land in it.
        assert_eq!(resolve("0.11").as_deref(), Some("0.9-1.1"));
        assert_eq!(resolve("1.1").as_deref(), Some("0.9-1.1"));
    }

    #[test]
    fn seam_prefers_earlier_band() {
        // 1.0 satisfies both 0.9-1.1 and 1.0-1.5; first match wins.
        assert_eq!(resolve("1.0").as_deref(), Some("0.9-1.1"));
        assert_eq!(resolve("1.2").as_deref(), Some("1.0-1.5"));
    }

    #[test]
    fn out_of_range_ages_do_not_resolve() {
        assert_eq!(resolve("8.0"), None);
        assert_eq!(resolve("12.4"), None);
    }

    #[test]
    fn zero_age_does_not_resolve() {
        assert_eq!(resolve("0.0"), None);
        assert_eq!(resolve("0"), None);
        // A real one-month-old is still covered.
        assert_eq!(resolve("0.1").as_deref(), Some("0.0-0.2"));
    }

    #[test]
    fn malformed_band_name_is_an_error() {
        assert!(AgeBand::parse_name("2.0").is_err());
        assert!(AgeBand::parse_name("a.b-c.d").is_err());
    }
}
