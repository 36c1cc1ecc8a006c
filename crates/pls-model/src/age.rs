//! Chronological ages and age equivalents.
//!
//! A canonical age is the `"Y.M"` token the band resolver works with:
//! integer years, then a literal period, then integer months. The
//! period is a separator, not a decimal point — `"2.11"` is two years
//! eleven months.

use std::fmt;

use crate::error::{PlsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalAge {
    pub years: u32,
    pub months: u32,
}

impl CanonicalAge {
    pub fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    /// Parse a canonical `"Y.M"` token. A bare `"Y"` is year with zero
    /// months. Anything else is a fatal age-format error.
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let (years_part, months_part) = match trimmed.split_once('.') {
            Some((years, months)) => (years, months),
            None => (trimmed, "0"),
        };
        let years = years_part.parse::<u32>().map_err(|_| PlsError::AgeFormat {
            token: token.to_string(),
        })?;
        let months = months_part
            .parse::<u32>()
            .map_err(|_| PlsError::AgeFormat {
                token: token.to_string(),
            })?;
        Ok(Self { years, months })
    }

    /// True for age zero, which never gets a normed score.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0
    }
}

impl fmt::Display for CanonicalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.years, self.months)
    }
}

/// Comparison marker carried by boundary rows of the published
/// age-equivalent tables (`<1-0`, `>7-11`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Below,
    Above,
}

impl Bound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bound::Below => "<",
            Bound::Above => ">",
        }
    }
}

/// An age equivalent as published: optional comparison marker, years,
/// months. The marker stays a literal prefix in both output forms; it
/// is never interpreted numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeEquivalent {
    pub bound: Option<Bound>,
    pub years: u32,
    pub months: u32,
}

impl AgeEquivalent {
    /// Parse a table token of the form `[<|>]years-months`.
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let (bound, rest) = match trimmed.as_bytes().first() {
            Some(b'<') => (Some(Bound::Below), &trimmed[1..]),
            Some(b'>') => (Some(Bound::Above), &trimmed[1..]),
            _ => (None, trimmed),
        };
        let Some((years_part, months_part)) = rest.split_once('-') else {
            return Err(PlsError::AgeEquivalentFormat {
                token: token.to_string(),
            });
        };
        let (Ok(years), Ok(months)) = (years_part.parse::<u32>(), months_part.parse::<u32>())
        else {
            return Err(PlsError::AgeEquivalentFormat {
                token: token.to_string(),
            });
        };
        Ok(Self {
            bound,
            years,
            months,
        })
    }

    fn prefix(&self) -> &'static str {
        self.bound.map(|bound| bound.as_str()).unwrap_or("")
    }

    /// Display form, e.g. `"2y6m"` or `"<1y0m"`.
    pub fn display_ym(&self) -> String {
        format!("{}{}y{}m", self.prefix(), self.years, self.months)
    }

    /// Total-months form, e.g. `"30"` or `"<12"`. The marker is a
    /// literal leading character; the months total is not adjusted.
    pub fn display_months(&self) -> String {
        format!("{}{}", self.prefix(), self.years * 12 + self.months)
    }
}
