use hqet_core::{HqetConstants, Options, Parameters};
use hqet_ff::{FormFactors, SpinStructure, Transition};

fn dump_len(spin: SpinStructure) -> usize {
    let h = match spin {
        SpinStructure::PToP | SpinStructure::VToP => 4,
        SpinStructure::PToV => 7,
        SpinStructure::VToV => 10,
    };
    2 + 4 + 3 + 20 + 5 + 10 + 22 + 3 * h
}

#[test]
fn layout_depends_only_on_spin_structure() {
    let params = Parameters::defaults();
    for transition in Transition::ALL {
        let ff = FormFactors::new(transition, &params, &Options::new()).unwrap();
        let dump = ff.diagnostics();
        assert_eq!(dump.len(), dump_len(transition.spin_structure()), "{transition}");
    }
}

#[test]
fn switches_and_limits_are_reported() {
    let ff = FormFactors::new(Transition::BToD, &Parameters::defaults(), &Options::new()).unwrap();
    let dump = ff.diagnostics();

    let z = HqetConstants::default().z_mass();
    assert_eq!(dump.get("z = m_c_pole / m_b_pole"), Some(z));
    assert_eq!(dump.get("enable LP  z^3 terms"), Some(1.0));
    assert_eq!(dump.get("enable LP  z^4 terms"), Some(0.0));
    assert_eq!(dump.get("enable SLP z^2 terms"), Some(1.0));
    assert_eq!(dump.get("xi(w = 1.00)"), Some(1.0));
    assert_eq!(dump.get("r(w = 1.0)"), Some(1.0));

    let omega = dump.get("Omega(w = 1.0, z = 0.25)").unwrap();
    assert!((omega - 1.310491).abs() < 1e-6);
    let cs = dump.get("C_{S  }(w = 1.0, z = 0.25)").unwrap();
    assert!((cs + 2.0 / 3.0).abs() < 1e-6);
    assert!(dump.get("h_S(w = 1.2)").is_some());
}

#[test]
fn fingerprint_is_reproducible() {
    let params = Parameters::defaults();
    let first = FormFactors::new(Transition::BToDstar, &params, &Options::new())
        .unwrap()
        .diagnostics()
        .fingerprint()
        .unwrap();
    let second = FormFactors::new(Transition::BToDstar, &params, &Options::new())
        .unwrap()
        .diagnostics()
        .fingerprint()
        .unwrap();
    assert_eq!(first, second);

    let truncated = FormFactors::new(
        Transition::BToDstar,
        &params,
        &Options::new().with("z-order-lp", "2"),
    )
    .unwrap()
    .diagnostics()
    .fingerprint()
    .unwrap();
    assert_ne!(first, truncated);
}
