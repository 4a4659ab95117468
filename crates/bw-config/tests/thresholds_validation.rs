//! File-based threshold loading and validation tests.

use std::io::Write;

use bw_config::Thresholds;

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_empty_file_as_defaults() {
    let file = write_toml("");
    let thresholds = Thresholds::load(file.path()).unwrap();
    assert_eq!(thresholds, Thresholds::default());
}

#[test]
fn loads_partial_override() {
    let file = write_toml(
        r#"
        [detector]
        min_peak_ndvi = 0.35

        [predictor]
        max_confidence = 80.0
        "#,
    );
    let thresholds = Thresholds::load(file.path()).unwrap();
    assert_eq!(thresholds.detector.min_peak_ndvi, 0.35);
    assert_eq!(thresholds.predictor.max_confidence, 80.0);
    assert_eq!(thresholds.detector.min_increase, 0.10);
}

#[test]
fn rejects_semantically_invalid_file() {
    let file = write_toml(
        r#"
        [detector]
        moderate_increase = 0.9
        "#,
    );
    let err = Thresholds::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn rejects_unparseable_file() {
    let file = write_toml("detector = \"not a table\"");
    assert!(Thresholds::load(file.path()).is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Thresholds::load(std::path::Path::new("/nonexistent/thresholds.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}
