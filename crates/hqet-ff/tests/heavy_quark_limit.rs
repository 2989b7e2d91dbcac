use hqet_core::{hqet_key, HqetConstants, Options, Parameters};
use hqet_ff::{FormFactors, Transition};

/// `alpha_s = 0` and `LambdaBar = 0`: every h-function collapses onto `xi`.
fn symmetric(transition: Transition) -> FormFactors {
    let constants = HqetConstants {
        alpha_s: 0.0,
        lambda_1: 0.0,
        ..HqetConstants::default()
    };
    let prefix = transition.sector().prefix();
    let mut params = Parameters::defaults();
    params
        .set(&hqet_key(prefix, "mBar"), constants.m_b_pole())
        .unwrap();
    FormFactors::with_constants(transition, &params, &Options::new(), constants).unwrap()
}

fn check(transition: Transition, unit: &[&str]) {
    let ff = symmetric(transition);
    let base = ff.base();
    assert_eq!(base.corrections().eps_b, 0.0);
    assert_eq!(base.corrections().eps_c, 0.0);

    for w in [1.0, 1.15, 1.3, 1.45] {
        let q2 = base.q2(w);
        let xi = base.xi(q2);
        for (label, value) in ff.h_functions(q2) {
            let expected = if unit.contains(&label) { xi } else { 0.0 };
            assert!(
                (value - expected).abs() < 1e-14,
                "{transition} {label}(w = {w}): expected {expected}, got {value}"
            );
        }
    }
}

#[test]
fn pseudoscalar_to_pseudoscalar() {
    check(Transition::BToD, &["h_+", "h_S", "h_T"]);
    check(Transition::BsToDs, &["h_+", "h_S", "h_T"]);
}

#[test]
fn pseudoscalar_to_vector() {
    check(Transition::BToDstar, &["h_A1", "h_A3", "h_V", "h_T1"]);
}

#[test]
fn vector_to_pseudoscalar() {
    check(Transition::BstarToD, &["h_Abar1", "h_Abar3", "h_Vbar"]);
}

#[test]
fn vector_to_vector() {
    check(
        Transition::BstarToDstar,
        &["h_1", "h_3", "h_4", "h_7"],
    );
    check(
        Transition::BsstarToDsstar,
        &["h_1", "h_3", "h_4", "h_7"],
    );
}

#[test]
fn symmetric_b_to_d_form_factors_follow_from_xi() {
    let ff = symmetric(Transition::BToD);
    let pp = ff.as_p_to_p().unwrap();
    let r = ff.base().kinematics().ratio();
    for q2 in [0.0, 4.0, 9.0] {
        let xi = ff.base().xi(q2);
        let expected = (1.0 + r) / (2.0 * r.sqrt()) * xi;
        assert!((pp.f_p(q2) - expected).abs() < 1e-14);
        assert!((pp.f_t(q2) - expected).abs() < 1e-14);
    }
}
