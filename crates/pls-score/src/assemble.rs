//! Per-subject scoring: band resolution through the final derived set.

use pls_model::{AgeValidity, PlsError, Result, ScoredSubject, SubjectRecord};
use pls_tables::RefLibrary;
use tracing::warn;

use crate::composite::{composite_scores, sum_raw};
use crate::equivalents::resolve_equivalents;
use crate::lookup::lookup_norm;

/// Derive every output score for one subject.
///
/// A subject whose age no band covers is logged and returned with all
/// scores at the missing sentinel; it still occupies its row in the
/// output. Scoring itself only fails on corrupt reference data.
pub fn score_subject(record: SubjectRecord, library: &RefLibrary) -> Result<ScoredSubject> {
    let Some(band) = library.bands.resolve(record.age) else {
        warn!(
            age = %record.age,
            "FIX AGE INPUT FOR {}: no norm band covers this age, emitting sentinels",
            record.processing_key()
        );
        return Ok(ScoredSubject::unscored(record));
    };
    let band_name = band.name.clone();

    let ac_table = library
        .ac_norm(&band_name)
        .ok_or_else(|| PlsError::Table(format!("no AC norm table for band {band_name}")))?;
    let ec_table = library
        .ec_norm(&band_name)
        .ok_or_else(|| PlsError::Table(format!("no EC norm table for band {band_name}")))?;

    let ac = lookup_norm(record.ac_raw, ac_table);
    let ec = lookup_norm(record.ec_raw, ec_table);
    let total = composite_scores(ac.standard, ec.standard, &library.composite);

    let ac_equivalent = resolve_equivalents(record.ac_raw, &library.ac_growth)?;
    let ec_equivalent = resolve_equivalents(record.ec_raw, &library.ec_growth)?;
    let total_equivalent =
        resolve_equivalents(sum_raw(record.ac_raw, record.ec_raw), &library.total_growth)?;

    Ok(ScoredSubject {
        record,
        validity: AgeValidity::Valid(band_name),
        ac,
        ec,
        total,
        ac_equivalent: ac_equivalent.output,
        ec_equivalent: ec_equivalent.output,
        total_equivalent: total_equivalent.output,
        ac_gsv: ac_equivalent.gsv,
        ec_gsv: ec_equivalent.gsv,
    })
}

#[cfg(test)]
mod tests {
    use pls_model::{CanonicalAge, ScoreValue};
    use pls_tables::{
        AgeBands, CompositeKey, CompositeRow, CompositeTable, GrowthRow, GrowthTable, NormRow,
        NormTable, RefLibrary,
    };

    use super::*;

    fn norm_rows() -> Vec<NormRow> {
        vec![
            NormRow {
                raw: 10,
                standard: 85,
                percentile: 16,
            },
            NormRow {
                raw: 12,
                standard: 90,
                percentile: 25,
            },
        ]
    }

    fn library() -> RefLibrary {
        let bands = AgeBands::published();
        let mut tables = Vec::new();
        for band in bands.iter() {
            tables.push((
                band.name.clone(),
                NormTable::new(&band.name, norm_rows()).unwrap(),
                NormTable::new(&band.name, norm_rows()).unwrap(),
            ));
        }
        RefLibrary::from_parts(
            bands,
            tables,
            CompositeTable::new(vec![
                CompositeRow {
                    key: CompositeKey::Single(175),
                    standard: 87,
                    percentile: 19,
                },
                CompositeRow {
                    key: CompositeKey::Range(176, 184),
                    standard: 90,
                    percentile: 25,
                },
            ])
            .unwrap(),
            GrowthTable::new(
                "ac",
                vec![GrowthRow {
                    raw: 12,
                    equivalent: "2-6".to_string(),
                    gsv: ScoreValue::Value(420),
                }],
            ),
            GrowthTable::new(
                "ec",
                vec![GrowthRow {
                    raw: 10,
                    equivalent: "<1-0".to_string(),
                    gsv: ScoreValue::Value(380),
                }],
            ),
            GrowthTable::new(
                "total",
                vec![GrowthRow {
                    raw: 22,
                    equivalent: "1-8".to_string(),
                    gsv: ScoreValue::Missing,
                }],
            ),
        )
    }

    fn record(age: &str, ac: ScoreValue, ec: ScoreValue) -> SubjectRecord {
        SubjectRecord {
            subject_id: "BR-101".to_string(),
            event_name: "visit_1_arm_1".to_string(),
            age: CanonicalAge::parse(age).unwrap(),
            ac_raw: ac,
            ec_raw: ec,
        }
    }

    #[test]
    fn full_derivation_for_a_covered_subject() {
        let scored = score_subject(
            record("2.3", ScoreValue::Value(12), ScoreValue::Value(10)),
            &library(),
        )
        .unwrap();
        assert_eq!(scored.validity.band_name(), Some("2.0-2.5"));
        assert_eq!(scored.ac.standard, ScoreValue::Value(90));
        assert_eq!(scored.ec.standard, ScoreValue::Value(85));
        // 90 + 85 = 175 matches the single-value composite row.
        assert_eq!(scored.total.standard, ScoreValue::Value(87));
        assert_eq!(scored.total.percentile, ScoreValue::Value(19));
        assert_eq!(scored.ac_equivalent.years_months, "2y6m");
        assert_eq!(scored.ac_equivalent.months, "30");
        assert_eq!(scored.ec_equivalent.years_months, "<1y0m");
        assert_eq!(scored.ec_equivalent.months, "<12");
        // 12 + 10 = 22 matches the total growth row.
        assert_eq!(scored.total_equivalent.years_months, "1y8m");
        assert_eq!(scored.total_equivalent.months, "20");
        assert_eq!(scored.ac_gsv, ScoreValue::Value(420));
        assert_eq!(scored.ec_gsv, ScoreValue::Value(380));
    }

    #[test]
    fn uncovered_age_yields_unscored_row() {
        let scored = score_subject(
            record("9.2", ScoreValue::Value(12), ScoreValue::Value(10)),
            &library(),
        )
        .unwrap();
        assert!(!scored.validity.is_valid());
        assert_eq!(scored.ac.standard, ScoreValue::Missing);
        assert_eq!(scored.total_equivalent.months, "-999");
    }

    #[test]
    fn missing_raw_cascades_through_total() {
        let scored = score_subject(
            record("2.3", ScoreValue::Missing, ScoreValue::Value(10)),
            &library(),
        )
        .unwrap();
        assert_eq!(scored.ac.standard, ScoreValue::Missing);
        assert_eq!(scored.total.standard, ScoreValue::Missing);
        assert_eq!(scored.ac_equivalent.years_months, "-999");
        assert_eq!(scored.total_equivalent.months, "-999");
        // The EC side still scores on its own.
        assert_eq!(scored.ec.standard, ScoreValue::Value(85));
    }

    #[test]
    fn out_of_range_raw_marks_subtest_and_total() {
        let scored = score_subject(
            record("2.3", ScoreValue::OutOfRange, ScoreValue::Value(12)),
            &library(),
        )
        .unwrap();
        assert_eq!(scored.ac.standard, ScoreValue::OutOfRange);
        assert_eq!(scored.total.standard, ScoreValue::OutOfRange);
        // Age equivalents have no out-of-range arm; they go missing.
        assert_eq!(scored.ac_equivalent.years_months, "-999");
    }
}
