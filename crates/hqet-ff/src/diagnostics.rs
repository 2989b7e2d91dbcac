//! Regression dump of a bound transition.

use hqet_core::Diagnostics;

use crate::hqet::HqetBase;
use crate::physical::Assembler;
use crate::special::{omega, r, wz};
use crate::wilson::WilsonCoefficients;

const Z_POINTS: [(f64, &str); 3] = [(1.10, "1.10"), (1.05, "1.05"), (1.00, "1.00")];

const IW_POINTS: [(f64, &str); 5] = [
    (2.10, "2.10"),
    (1.60, "1.60"),
    (1.10, "1.10"),
    (1.05, "1.05"),
    (1.00, "1.00"),
];

const THRESHOLD_POINTS: [(f64, &str); 5] = [
    (1.1, "1.1"),
    (1.0007, "1.0007"),
    (1.0001, "1.0001"),
    (1.00005, "1.00005"),
    (1.0, "1.0"),
];

const WILSON_POINTS: [(f64, f64, &str); 2] = [
    (1.2, 0.20, "w = 1.2, z = 0.20"),
    (1.0, 0.25, "w = 1.0, z = 0.25"),
];

const H_POINTS: [(f64, &str); 3] = [(1.4, "1.4"), (1.2, "1.2"), (1.0, "1.0")];

/// Named evaluations of every layer of `ff` at fixed kinematic points.
pub fn dump(ff: &dyn Assembler) -> Diagnostics {
    let base = ff.base();
    let mut results = Diagnostics::new();

    let z = base.constants().z_mass();
    results.add(z, "z = m_c_pole / m_b_pole");
    results.add(wz(z), "w_z");

    let orders = base.bank().orders();
    results.add(orders.lp_switch(3), "enable LP  z^3 terms");
    results.add(orders.lp_switch(4), "enable LP  z^4 terms");
    results.add(orders.lp_switch(5), "enable LP  z^5 terms");
    results.add(orders.slp_switch(2), "enable SLP z^2 terms");

    for (w, label) in Z_POINTS {
        results.add(base.z(base.q2(w)), format!("z(w = {label})"));
    }

    let iw: [(&str, fn(&HqetBase, f64) -> f64); 4] = [
        ("xi", |b, q2| b.xi(q2)),
        ("chi2", |b, q2| b.chi2(q2)),
        ("chi3", |b, q2| b.chi3(q2)),
        ("eta", |b, q2| b.eta(q2)),
    ];
    for (name, eval) in iw {
        for (w, label) in IW_POINTS {
            results.add(eval(base, base.q2(w)), format!("{name}(w = {label})"));
        }
    }

    for (w, label) in THRESHOLD_POINTS {
        results.add(r(w), format!("r(w = {label})"));
    }
    for z in [0.25, 0.20] {
        for (w, label) in THRESHOLD_POINTS {
            results.add(omega(w, z), format!("Omega(w = {label}, z = {z:.2})"));
        }
    }

    for (w, z, label) in WILSON_POINTS {
        for (name, value) in WilsonCoefficients::at(w, z).labelled() {
            results.add(value, format!("{name}({label})"));
        }
    }

    for (w, label) in H_POINTS {
        for (name, value) in ff.h_functions(base.q2(w)) {
            results.add(value, format!("{name}(w = {label})"));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use hqet_core::{Options, Parameters};

    use super::*;
    use crate::physical::FormFactors;
    use crate::process::Transition;

    #[test]
    fn dump_layout_is_stable() {
        let ff =
            FormFactors::new(Transition::BToD, &Parameters::defaults(), &Options::new()).unwrap();
        let diagnostics = dump(ff.assembler());
        // 2 + 4 + 3 + 20 + 5 + 10 + 22 + 3 * 4
        assert_eq!(diagnostics.len(), 78);
        assert_eq!(diagnostics.entries()[0].description, "z = m_c_pole / m_b_pole");
        assert_eq!(diagnostics.get("r(w = 1.0)"), Some(1.0));
        assert!(diagnostics.get("h_+(w = 1.4)").is_some());
    }
}
