use hqet_core::errors::{ErrorInfo, HqetError};
use hqet_core::options::{Options, CATALOGUE, Z_ORDER_BOUND};
use hqet_core::{Kinematics, Parameters, ZMap};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("key", "mass::B_d")
        .with_hint("check the configuration")
}

#[test]
fn config_error_surface() {
    let err = Options::new()
        .with("z-order-bound", "0")
        .resolve(&Z_ORDER_BOUND)
        .unwrap_err();
    assert!(matches!(err, HqetError::Config(_)));
    assert_eq!(err.info().code, "option-unsupported");
    assert_eq!(err.info().context["option"], "z-order-bound");
}

#[test]
fn unknown_option_surface() {
    let err = Options::new()
        .with("model", "exponential")
        .validate(&CATALOGUE)
        .unwrap_err();
    assert_eq!(err.info().code, "option-unknown");
}

#[test]
fn parameter_error_surface() {
    let err = Parameters::defaults().get("mass::B_c").unwrap_err();
    assert!(matches!(err, HqetError::Parameter(_)));
    assert_eq!(err.info().code, "parameter-unknown");
    assert!(err.info().hint.is_some());
}

#[test]
fn kinematics_error_surface() {
    let err = Kinematics::new(5.28, -1.0).unwrap_err();
    assert!(matches!(err, HqetError::Kinematics(_)));
    assert_eq!(err.info().code, "mass-invalid");
}

#[test]
fn zmap_error_surface() {
    let err = ZMap::new(0.0).unwrap_err();
    assert!(matches!(err, HqetError::Config(_)));
    assert_eq!(err.info().code, "zmap-invalid-a");
}

#[test]
fn display_renders_context_and_hint() {
    let err = HqetError::Parameter(sample_info("parameter-unknown", "parameter is not registered"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("parameter error: parameter is not registered"));
    assert!(rendered.contains("(code: parameter-unknown)"));
    assert!(rendered.contains("key=mass::B_d"));
    assert!(rendered.ends_with("hint: check the configuration"));
}

#[test]
fn errors_round_trip_json() {
    let err = HqetError::Serde(sample_info("yaml-decode", "bad document"));
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Serde\""));
    let restored: HqetError = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, err);
}
