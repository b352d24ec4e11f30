// tests/unit_config.rs
#![allow(clippy::float_cmp)]

use pagerank_core::config::{io, Config, EngineConfig, ReportConfig, CONFIG_FILE};
use pagerank_core::error::RankError;
use std::fs;

#[test]
fn test_defaults() {
    let e = EngineConfig::default();
    assert_eq!(e.max_iterations, 1000);
    assert_eq!(e.epsilon, 1e-7);
    assert!(!e.commit_on_cap);

    let r = ReportConfig::default();
    assert_eq!(r.precision, 6);
    assert!(r.show_links);
}

#[test]
fn test_parse_partial_toml() {
    let c = Config::parse_toml("[engine]\nmax_iterations = 50\n").unwrap();
    assert_eq!(c.engine.max_iterations, 50);
    assert_eq!(c.engine.epsilon, 1e-7, "unset keys keep their defaults");
    assert_eq!(c.report.precision, 6);
}

#[test]
fn test_parse_full_toml() {
    let c = Config::parse_toml(
        "[engine]\nmax_iterations = 10\nepsilon = 0.001\ncommit_on_cap = true\n\
         [report]\nprecision = 3\nshow_links = false\n",
    )
    .unwrap();
    assert_eq!(c.engine.max_iterations, 10);
    assert_eq!(c.engine.epsilon, 0.001);
    assert!(c.engine.commit_on_cap);
    assert_eq!(c.report.precision, 3);
    assert!(!c.report.show_links);
}

#[test]
fn test_empty_toml_is_default() {
    let c = Config::parse_toml("").unwrap();
    assert_eq!(c.engine.max_iterations, 1000);
}

#[test]
fn test_malformed_toml() {
    let err = Config::parse_toml("[engine\nmax_iterations = ").unwrap_err();
    assert!(matches!(err, RankError::Config(_)));
}

#[test]
fn test_negative_epsilon_rejected() {
    let err = Config::parse_toml("[engine]\nepsilon = -0.5\n").unwrap_err();
    assert!(matches!(err, RankError::InvalidArgument(_)));
}

#[test]
fn test_excessive_precision_rejected() {
    assert!(Config::parse_toml("[report]\nprecision = 40\n").is_err());
}

#[test]
fn test_load_from_dir() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[engine]\nmax_iterations = 7").unwrap();
    let c = io::load_from_dir(d.path()).unwrap();
    assert_eq!(c.engine.max_iterations, 7);
}

#[test]
fn test_missing_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = io::load_from_dir(d.path()).unwrap();
    assert_eq!(c.engine.max_iterations, 1000);
}

#[test]
fn test_load_from_explicit_path() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("custom.toml");
    fs::write(&path, "[report]\nprecision = 2").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.report.precision, 2);
}

#[test]
fn test_load_from_missing_path_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load_from(&d.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
    assert!(!err.is_input_error());
}
