//! Loader tests against a reference directory built on disk.

use std::fs;
use std::path::Path;

use pls_tables::{BAND_NAMES, RefLibrary};

fn write_band_tables(ref_dir: &Path) {
    for subtest in ["ac_scores", "ec_scores"] {
        let dir = ref_dir.join(subtest);
        fs::create_dir_all(&dir).unwrap();
        for band in BAND_NAMES {
            // Small but valid: ascending raws, three rows.
            fs::write(
                dir.join(format!("{band}.csv")),
                "10,85,16\n12,90,25\n14,95,37\n",
            )
            .unwrap();
        }
    }
}

fn write_global_tables(ref_dir: &Path) {
    fs::write(
        ref_dir.join("total_standard_score.csv"),
        "160,80,9\n161-164,82,12\n165-175,84,14\n",
    )
    .unwrap();
    fs::write(
        ref_dir.join("ac_gsv_ae.csv"),
        "Raw Score,Age Equivalent,GSV\n10,<1-0,220\n12,1-2,245\n",
    )
    .unwrap();
    fs::write(ref_dir.join("ec_gsv_ae.csv"), "10,<1-0,210\n12,1-3,240\n").unwrap();
    fs::write(ref_dir.join("total_ae.csv"), "20,1-0\n24,1-4\n").unwrap();
}

#[test]
fn loads_full_library() {
    let dir = tempfile::tempdir().unwrap();
    write_band_tables(dir.path());
    write_global_tables(dir.path());

    let library = RefLibrary::load(dir.path()).unwrap();
    let table = library.ac_norm("2.0-2.5").expect("band table present");
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.clamp_threshold(), 12);
    assert_eq!(library.composite.find(170).unwrap().standard, 84);

    // Header row on the AC growth table was skipped.
    assert_eq!(library.ac_growth.rows.len(), 2);
    assert_eq!(library.ac_growth.find(10).unwrap().equivalent, "<1-0");

    // total_ae has no GSV column.
    assert!(library.total_growth.find(20).unwrap().gsv.is_missing());
}

#[test]
fn composite_range_first_row_survives_header_detection() {
    let dir = tempfile::tempdir().unwrap();
    write_band_tables(dir.path());
    write_global_tables(dir.path());
    // Range key in the very first row must not be mistaken for a header.
    fs::write(
        dir.path().join("total_standard_score.csv"),
        "100-120,50,1\n121,55,2\n",
    )
    .unwrap();

    let library = RefLibrary::load(dir.path()).unwrap();
    assert_eq!(library.composite.rows.len(), 2);
    assert_eq!(library.composite.find(110).unwrap().standard, 50);
}

#[test]
fn missing_band_file_fails_at_load() {
    let dir = tempfile::tempdir().unwrap();
    write_band_tables(dir.path());
    write_global_tables(dir.path());
    fs::remove_file(dir.path().join("ac_scores").join("3.0-3.5.csv")).unwrap();

    let error = RefLibrary::load(dir.path()).unwrap_err();
    assert!(error.to_string().contains("3.0-3.5"));
}

#[test]
fn float_renditions_parse_as_integers() {
    let dir = tempfile::tempdir().unwrap();
    write_band_tables(dir.path());
    write_global_tables(dir.path());
    fs::write(
        dir.path().join("ac_scores").join("0.0-0.2.csv"),
        "10.0,85.0,16.0\n12.0,90.0,25.0\n",
    )
    .unwrap();

    let library = RefLibrary::load(dir.path()).unwrap();
    let table = library.ac_norm("0.0-0.2").unwrap();
    assert_eq!(table.rows[0].standard, 85);
}
