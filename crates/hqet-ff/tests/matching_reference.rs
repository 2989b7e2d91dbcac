use hqet_core::{HqetConstants, NEAR_THRESHOLD};
use hqet_ff::special::{omega_closed, omega_limit, r_closed, r_limit};
use hqet_ff::{omega, r, WilsonCoefficients};

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual}"
    );
}

const THRESHOLD_W: [f64; 5] = [1.1, 1.0007, 1.0001, 1.00005, 1.0];

#[test]
fn r_matches_recorded_values() {
    let expected = [0.967945, 0.999767, 0.999967, 0.999983, 1.0];
    for (w, value) in THRESHOLD_W.into_iter().zip(expected) {
        assert_close(r(w), value, 1e-6, &format!("r({w})"));
    }
}

#[test]
fn omega_matches_recorded_values() {
    let at_025 = [1.294026, 1.310389, 1.310476, 1.310483, 1.310491];
    let at_020 = [1.403808, 1.414099, 1.414149, 1.414153, 1.414157];
    for (i, w) in THRESHOLD_W.into_iter().enumerate() {
        assert_close(omega(w, 0.25), at_025[i], 1e-6, &format!("Omega({w}, 0.25)"));
        assert_close(omega(w, 0.20), at_020[i], 1e-6, &format!("Omega({w}, 0.20)"));
    }
}

#[test]
fn wilson_coefficients_match_recorded_values() {
    let at_12_020 = [
        -0.591250, 0.659746, 1.123905, -0.454499, -0.162046, -0.127091, -1.247185, 0.316106,
        0.694295, -0.931381, 0.319615,
    ];
    let at_10_025 = [
        -0.666667, 0.666667, 0.977157, -0.478135, -0.188532, -0.356176, -1.250411, 0.381601,
        0.413987, -0.956270, 0.377063,
    ];
    let wc = WilsonCoefficients::at(1.2, 0.20);
    for ((name, value), expected) in wc.labelled().zip(at_12_020) {
        assert_close(value, expected, 1e-6, name);
    }
    let wc = WilsonCoefficients::at(1.0, 0.25);
    for ((name, value), expected) in wc.labelled().zip(at_10_025) {
        assert_close(value, expected, 1e-6, name);
    }
}

#[test]
fn threshold_branches_agree_across_the_switch() {
    let edge = 1.0 + NEAR_THRESHOLD;
    for w in [edge - 1.0e-7, edge + 1.0e-7] {
        assert_close(r_closed(w), r_limit(w), 1e-8, "r closed form vs limit");
        for z in [0.20, 0.25] {
            assert_close(
                omega_closed(w, z),
                omega_limit(w, z),
                1e-8,
                "Omega closed form vs limit",
            );
        }
    }
}

#[test]
fn threshold_is_pinned() {
    assert_eq!(NEAR_THRESHOLD, 1.0e-5);
    assert_eq!(r(1.0 + 0.9e-5), r_limit(1.0 + 0.9e-5));
    assert_eq!(r(1.0 + 1.1e-5), r_closed(1.0 + 1.1e-5));
}

#[test]
fn pole_mass_ratio_uses_1s_scheme() {
    let constants = HqetConstants::default();
    assert_close(constants.z_mass(), 0.288815210764493, 1e-12, "m_c / m_b");
}
