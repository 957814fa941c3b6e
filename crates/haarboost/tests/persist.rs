//! Round-trip and validation tests for JSON model persistence.

use haarboost::model::{AdaBoostModel, BoostConfig, ConfigError};
use haarboost::persist::{self, PersistError, FORMAT_VERSION};
use haarboost::testing::synthetic_set;
use haarboost::training::{StumpWeighting, Verbosity};
use serde_json::Value;

fn trained_model() -> AdaBoostModel {
    let set = synthetic_set(12, 9, 10, 5).expect("synthetic set");
    let config = BoostConfig::builder()
        .n_rounds(4)
        .stump_weighting(StumpWeighting::Distribution)
        .verbosity(Verbosity::Warning)
        .build()
        .expect("valid config");
    AdaBoostModel::train(&set, config, 1).expect("training succeeds")
}

fn model_value() -> Value {
    let json = persist::to_json_string(&trained_model()).expect("serialize");
    serde_json::from_str(&json).expect("parse json")
}

fn load_err(v: Value) -> PersistError {
    let json = serde_json::to_string(&v).expect("serialize mutated json");
    persist::from_json_str(&json).expect_err("expected error")
}

#[test]
fn json_round_trip_preserves_model() {
    let model = trained_model();
    let json = persist::to_json_string(&model).unwrap();
    let loaded = persist::from_json_str(&json).unwrap();

    assert_eq!(loaded, model);
    assert_eq!(loaded.alphas(), model.alphas());
    assert_eq!(loaded.error_history(), model.error_history());
}

#[test]
fn file_round_trip_preserves_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let model = trained_model();
    persist::save_json(&model, &path).unwrap();
    assert_eq!(persist::load_json(&path).unwrap(), model);
}

#[test]
fn document_uses_stable_names() {
    let v = model_value();
    assert_eq!(v["format_version"], Value::from(FORMAT_VERSION));
    assert_eq!(v["config"]["features"][0], "two_rectangle");
    assert_eq!(v["config"]["stump_weighting"], "distribution");
    assert_eq!(v["rounds"].as_array().map(Vec::len), Some(4));
}

#[test]
fn rejects_unknown_version() {
    let mut v = model_value();
    v["format_version"] = Value::from(99u32);
    let err = load_err(v);
    assert!(
        matches!(err, PersistError::UnsupportedVersion { found: 99, supported } if supported == FORMAT_VERSION),
        "got: {err:?}"
    );
}

#[test]
fn rejects_out_of_range_block() {
    let mut v = model_value();
    v["rounds"][0]["block"] = Value::from(9u64);
    let err = load_err(v);
    assert!(matches!(err, PersistError::Validation(_)), "got: {err:?}");
}

#[test]
fn rejects_round_count_mismatch() {
    let mut v = model_value();
    v["rounds"].as_array_mut().expect("rounds array").pop();
    let err = load_err(v);
    assert!(matches!(err, PersistError::Validation(_)), "got: {err:?}");
}

#[test]
fn rejects_feature_outside_bank() {
    let mut v = model_value();
    v["config"]["features"] = Value::from(vec!["four_rectangle"]);
    v["rounds"][0]["feature"] = Value::from("two_rectangle");
    let err = load_err(v);
    assert!(matches!(err, PersistError::Validation(_)), "got: {err:?}");
}

#[test]
fn rejects_invalid_config() {
    let mut v = model_value();
    v["config"]["n_rounds"] = Value::from(0u32);
    let err = load_err(v);
    assert!(matches!(err, PersistError::Config(ConfigError::InvalidNRounds)), "got: {err:?}");
}

#[test]
fn rejects_unknown_feature_name() {
    let mut v = model_value();
    v["rounds"][0]["feature"] = Value::from("five_rectangle");
    let err = load_err(v);
    assert!(matches!(err, PersistError::Json(_)), "got: {err:?}");
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = persist::load_json(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, PersistError::Io(_)), "got: {err:?}");
}
