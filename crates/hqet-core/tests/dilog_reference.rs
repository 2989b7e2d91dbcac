use hqet_core::dilog;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-14 * expected.abs().max(1.0),
        "{actual} != {expected}"
    );
}

#[test]
fn matches_reference_values_on_every_branch() {
    assert_close(dilog(-3.0), -1.9393754207667089);
    assert_close(dilog(-0.3125), -0.29097887100255793);
    assert_close(dilog(0.3), 0.32612951007547608);
    assert_close(dilog(0.7), 0.88937762428603861);
    assert_close(dilog(0.99), 1.5886254480763753);
    assert_close(dilog(3.0), 2.3201804233130985);
}

#[test]
fn euler_reflection_holds() {
    for &x in &[0.05, 0.2, 0.45, 0.6, 0.85] {
        let lhs = dilog(x) + dilog(1.0 - x);
        let rhs = std::f64::consts::PI.powi(2) / 6.0 - x.ln() * (1.0 - x).ln();
        assert_close(lhs, rhs);
    }
}

#[test]
fn nan_propagates() {
    assert!(dilog(f64::NAN).is_nan());
}
