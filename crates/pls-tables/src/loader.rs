//! Reference library loading.
//!
//! Layout of the reference directory (CSV renditions of the published
//! tables):
//!
//! ```text
//! ref/
//!   ac_scores/<band>.csv        raw, standard score, percentile rank
//!   ec_scores/<band>.csv        raw, standard score, percentile rank
//!   total_standard_score.csv    summed-SS key, standard score, percentile
//!   ac_gsv_ae.csv               raw, age-equivalent token, GSV
//!   ec_gsv_ae.csv               raw, age-equivalent token, GSV
//!   total_ae.csv                summed raw, age-equivalent token
//! ```
//!
//! Tables may carry a single leading header row; it is detected by a
//! first cell that does not parse as that table's key and skipped.
//! Everything loads eagerly into an immutable library before any
//! subject is scored.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use tracing::{debug, info};

use pls_model::ScoreValue;

use crate::bands::AgeBands;
use crate::composite::{CompositeKey, CompositeRow, CompositeTable};
use crate::growth::{GrowthRow, GrowthTable};
use crate::norm::{NormRow, NormTable};

pub const AC_SCORES_DIR: &str = "ac_scores";
pub const EC_SCORES_DIR: &str = "ec_scores";
pub const COMPOSITE_FILE: &str = "total_standard_score.csv";
pub const AC_GROWTH_FILE: &str = "ac_gsv_ae.csv";
pub const EC_GROWTH_FILE: &str = "ec_gsv_ae.csv";
pub const TOTAL_GROWTH_FILE: &str = "total_ae.csv";

/// Every reference table for one run, loaded once.
#[derive(Debug, Clone)]
pub struct RefLibrary {
    pub bands: AgeBands,
    ac_norms: BTreeMap<String, NormTable>,
    ec_norms: BTreeMap<String, NormTable>,
    pub composite: CompositeTable,
    pub ac_growth: GrowthTable,
    pub ec_growth: GrowthTable,
    pub total_growth: GrowthTable,
}

impl RefLibrary {
    /// Load the full library from a reference directory. A missing
    /// band file is an error here, not at scoring time.
    pub fn load(ref_dir: &Path) -> Result<Self> {
        let bands = AgeBands::published();
        let mut ac_norms = BTreeMap::new();
        let mut ec_norms = BTreeMap::new();
        for band in bands.iter() {
            let ac_path = ref_dir.join(AC_SCORES_DIR).join(band_file_name(&band.name));
            let ec_path = ref_dir.join(EC_SCORES_DIR).join(band_file_name(&band.name));
            ac_norms.insert(band.name.clone(), load_norm_table(&ac_path, &band.name)?);
            ec_norms.insert(band.name.clone(), load_norm_table(&ec_path, &band.name)?);
            debug!(band = %band.name, "loaded norm tables");
        }

        let composite = load_composite_table(&ref_dir.join(COMPOSITE_FILE))?;
        let ac_growth = load_growth_table(&ref_dir.join(AC_GROWTH_FILE), "ac")?;
        let ec_growth = load_growth_table(&ref_dir.join(EC_GROWTH_FILE), "ec")?;
        let total_growth = load_growth_table(&ref_dir.join(TOTAL_GROWTH_FILE), "total")?;

        info!(
            band_count = ac_norms.len(),
            composite_rows = composite.rows.len(),
            "reference library loaded"
        );
        Ok(Self {
            bands,
            ac_norms,
            ec_norms,
            composite,
            ac_growth,
            ec_growth,
            total_growth,
        })
    }

    /// Assemble a library from already-built tables. Callers provide
    /// one (band name, AC table, EC table) triple per band.
    pub fn from_parts(
        bands: AgeBands,
        norm_tables: Vec<(String, NormTable, NormTable)>,
        composite: CompositeTable,
        ac_growth: GrowthTable,
        ec_growth: GrowthTable,
        total_growth: GrowthTable,
    ) -> Self {
        let mut ac_norms = BTreeMap::new();
        let mut ec_norms = BTreeMap::new();
        for (band, ac, ec) in norm_tables {
            ac_norms.insert(band.clone(), ac);
            ec_norms.insert(band, ec);
        }
        Self {
            bands,
            ac_norms,
            ec_norms,
            composite,
            ac_growth,
            ec_growth,
            total_growth,
        }
    }

    pub fn ac_norm(&self, band: &str) -> Option<&NormTable> {
        self.ac_norms.get(band)
    }

    pub fn ec_norm(&self, band: &str) -> Option<&NormTable> {
        self.ec_norms.get(band)
    }
}

fn band_file_name(band: &str) -> String {
    format!("{band}.csv")
}

/// Read all non-blank rows, then drop a single leading header row when
/// its first cell is not a valid key for this table.
fn read_rows(path: &Path, is_key_cell: impl Fn(&str) -> bool) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read reference table: {}", path.display()))?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    if let Some(first) = rows.first()
        && !is_key_cell(&first[0])
    {
        rows.remove(0);
    }
    Ok(rows)
}

/// Integer parse tolerant of spreadsheet float renditions ("85.0").
fn parse_int(cell: &str) -> Option<i64> {
    if let Ok(value) = cell.parse::<i64>() {
        return Some(value);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.fract() == 0.0 { Some(value as i64) } else { None }
}

fn require_int(row: &[String], idx: usize, path: &Path) -> Result<i64> {
    let cell = row
        .get(idx)
        .ok_or_else(|| anyhow!("{}: missing column {}", path.display(), idx + 1))?;
    parse_int(cell).ok_or_else(|| anyhow!("{}: {cell:?} is not an integer", path.display()))
}

fn load_norm_table(path: &Path, band: &str) -> Result<NormTable> {
    let mut rows = Vec::new();
    for row in read_rows(path, |cell| parse_int(cell).is_some())? {
        rows.push(NormRow {
            raw: require_int(&row, 0, path)?,
            standard: require_int(&row, 1, path)?,
            percentile: require_int(&row, 2, path)?,
        });
    }
    NormTable::new(band, rows).with_context(|| format!("load {}", path.display()))
}

fn load_composite_table(path: &Path) -> Result<CompositeTable> {
    let mut rows = Vec::new();
    for row in read_rows(path, |cell| CompositeKey::parse(cell).is_ok())? {
        let key_cell = row
            .first()
            .ok_or_else(|| anyhow!("{}: empty row", path.display()))?;
        rows.push(CompositeRow {
            key: CompositeKey::parse(key_cell)
                .with_context(|| format!("load {}", path.display()))?,
            standard: require_int(&row, 1, path)?,
            percentile: require_int(&row, 2, path)?,
        });
    }
    CompositeTable::new(rows).with_context(|| format!("load {}", path.display()))
}

fn load_growth_table(path: &Path, name: &str) -> Result<GrowthTable> {
    let mut rows = Vec::new();
    for row in read_rows(path, |cell| parse_int(cell).is_some())? {
        let raw = require_int(&row, 0, path)?;
        let equivalent = row
            .get(1)
            .cloned()
            .ok_or_else(|| anyhow!("{}: missing age-equivalent column", path.display()))?;
        let gsv = match row.get(2) {
            Some(cell) => ScoreValue::parse(cell)
                .ok_or_else(|| anyhow!("{}: {cell:?} is not a GSV", path.display()))?,
            None => ScoreValue::Missing,
        };
        rows.push(GrowthRow {
            raw,
            equivalent,
            gsv,
        });
    }
    Ok(GrowthTable::new(name, rows))
}
