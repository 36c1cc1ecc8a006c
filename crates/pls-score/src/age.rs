//! Age token normalization.
//!
//! Ages arrive in three encodings: `"3:4"` (colon-separated),
//! `"2y6m"` (letter form), and `"2.6"` (already canonical). All three
//! normalize to the canonical `"Y.M"` token the band resolver expects.

use pls_model::{PlsError, Result};

/// Normalize a raw age token to canonical `"Y.M"` form.
///
/// - a token containing `:` has the colon substituted with `.`;
/// - a `\d+y\d+m` token is decomposed and reassembled;
/// - a token containing `y` and `m` that does not fit the pattern is
///   a fatal format error;
/// - anything else passes through trimmed.
///
/// Normalization is idempotent for tokens without a colon or letter
/// form: the pass-through arm returns its input.
pub fn normalize_age_token(token: &str) -> Result<String> {
    let trimmed = token.trim();
    if trimmed.contains(':') {
        return Ok(trimmed.replace(':', "."));
    }
    if trimmed.contains('y') && trimmed.contains('m') {
        let Some((years, months)) = split_years_months(trimmed) else {
            return Err(PlsError::AgeFormat {
                token: token.to_string(),
            });
        };
        return Ok(format!("{years}.{months}"));
    }
    Ok(trimmed.to_string())
}

/// Decompose a full `\d+y\d+m` token.
fn split_years_months(token: &str) -> Option<(u32, u32)> {
    let (years_part, rest) = token.split_once('y')?;
    let (months_part, tail) = rest.split_once('m')?;
    if !tail.is_empty() || years_part.is_empty() || months_part.is_empty() {
        return None;
    }
    let years = years_part.parse::<u32>().ok()?;
    let months = months_part.parse::<u32>().ok()?;
    Some((years, months))
}
