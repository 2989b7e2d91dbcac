use std::fs;

use hqet_cli::{load_config, parse_config, RunConfig};
use tempfile::tempdir;

#[test]
fn yaml_sections_merge_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    fs::write(
        &path,
        r#"
parameters:
  "B(*)->D(*)::xi'(1)@HQET": -1.2
  "mass::B_d": 5.28
options:
  z-order-lp: 2
  q: s
constants:
  alpha_s: 0.0
"#,
    )
    .unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.parameters.get("B(*)->D(*)::xi'(1)@HQET").unwrap(), -1.2);
    assert_eq!(config.parameters.get("mass::B_d").unwrap(), 5.28);
    assert_eq!(config.parameters.get("mass::D_u").unwrap(), 1.86484);
    assert_eq!(config.options.get("z-order-lp"), Some("2"));
    assert_eq!(config.options.get("q"), Some("s"));
    assert_eq!(config.constants.alpha_s, 0.0);
    assert_eq!(config.constants.m_b_1s, 4.71);
}

#[test]
fn json_documents_are_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.json");
    fs::write(&path, r#"{"options": {"z-order-bound": "1"}}"#).unwrap();
    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.options.get("z-order-bound"), Some("1"));
    assert_eq!(config.parameters, RunConfig::default().parameters);
}

#[test]
fn missing_path_means_defaults() {
    assert_eq!(load_config(None).unwrap(), RunConfig::default());
    let dir = tempdir().unwrap();
    assert!(load_config(Some(dir.path().join("absent.yaml").as_path())).is_err());
}

#[test]
fn malformed_documents_fail_with_stable_codes() {
    let err = parse_config("parameters: [1, 2").unwrap_err();
    assert_eq!(err.info().code, "yaml-decode");

    let err = parse_config("paramters: {}").unwrap_err();
    assert_eq!(err.info().code, "yaml-decode");

    let err = parse_config("parameters:\n  \"B(*)->D(*)::xi(1)@HQET\": 1.0\n").unwrap_err();
    assert_eq!(err.info().code, "parameter-unknown");

    let err = parse_config("options:\n  z-oder-lp: 2\n").unwrap_err();
    assert_eq!(err.info().code, "option-unknown");

    let err = parse_config("options:\n  model-lp: gaussian\n").unwrap_err();
    assert_eq!(err.info().code, "option-unsupported");
}
