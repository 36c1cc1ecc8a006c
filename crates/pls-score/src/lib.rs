//! Score derivation for PLS-5 subjects: age normalization, per-band
//! norm lookup, the Total Language composite, and age-equivalent /
//! growth-scale-value resolution.

pub mod age;
pub mod assemble;
pub mod composite;
pub mod equivalents;
pub mod lookup;

pub use age::normalize_age_token;
pub use assemble::score_subject;
pub use composite::{composite_scores, sum_raw};
pub use equivalents::{Equivalents, resolve_equivalents};
pub use lookup::lookup_norm;
