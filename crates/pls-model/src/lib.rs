pub mod age;
pub mod error;
pub mod record;
pub mod schema;
pub mod score;

pub use age::{AgeEquivalent, Bound, CanonicalAge};
pub use error::{PlsError, Result};
pub use record::{
    AgeValidity, ColumnBindings, EquivalentOutput, ScoredSubject, SubjectRecord,
};
pub use score::{MISSING_WIRE, NormScores, OUT_OF_RANGE_WIRE, ScoreValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_round_trip_json() {
        let bindings = ColumnBindings {
            age: "age_col".to_string(),
            ..ColumnBindings::default()
        };
        let json = serde_json::to_string(&bindings).expect("serialize bindings");
        let round: ColumnBindings = serde_json::from_str(&json).expect("deserialize bindings");
        assert_eq!(round, bindings);
    }

    #[test]
    fn sentinel_wire_values_are_distinct() {
        assert_ne!(MISSING_WIRE, OUT_OF_RANGE_WIRE);
        assert_ne!(ScoreValue::Missing, ScoreValue::OutOfRange);
    }
}
