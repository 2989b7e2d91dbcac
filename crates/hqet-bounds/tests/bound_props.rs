use hqet_bounds::{BglParametrisationBounds, Channel, HqetUnitarityBounds};
use hqet_core::{hqet_key, Options, Parameters};
use proptest::prelude::*;

const NS: &str = "B(*)->D(*)";
const S: &str = "B_s(*)->D_s(*)";

proptest! {
    #[test]
    fn hqet_bounds_are_non_negative(
        xi1 in -2.0f64..0.0,
        xi2 in 0.0f64..4.0,
        eta in -1.0f64..1.0,
        l1 in -5.0f64..5.0,
        n_s in 0.0f64..2.0,
    ) {
        let params = Parameters::defaults()
            .with_overrides([
                (hqet_key(NS, "xi'(1)"), xi1),
                (hqet_key(NS, "xi''(1)"), xi2),
                (hqet_key(S, "eta(1)"), eta),
                (hqet_key(NS, "l_1(1)"), l1),
                (hqet_key(S, "n_s"), n_s),
            ])
            .unwrap();
        let bounds = HqetUnitarityBounds::new(&params, &Options::new()).unwrap();
        for channel in Channel::ALL {
            prop_assert!(bounds.bound(channel) >= 0.0);
        }
    }

    #[test]
    fn higher_order_never_lowers_a_bound(xi1 in -2.0f64..0.0, chi2 in -0.5f64..0.5) {
        let params = Parameters::defaults()
            .with_overrides([(hqet_key(NS, "xi'(1)"), xi1), (hqet_key(NS, "chi_2(1)"), chi2)])
            .unwrap();
        let first = HqetUnitarityBounds::new(&params, &Options::new().with("z-order-bound", "1")).unwrap();
        let second = HqetUnitarityBounds::new(&params, &Options::new()).unwrap();
        for channel in Channel::ALL {
            prop_assert!(second.bound(channel) >= first.bound(channel));
        }
    }

    #[test]
    fn bgl_parametrisation_bounds_are_non_negative(a in proptest::array::uniform4(-1.0f64..1.0)) {
        let mut params = Parameters::defaults();
        for (index, value) in a.iter().enumerate() {
            params.set(&format!("B->D^*::a^g_{index}@BGL1997"), *value).unwrap();
            params.set(&format!("B->D::a^f0_{index}@BGL1997"), -value).unwrap();
        }
        let bounds = BglParametrisationBounds::new(&params, &Options::new()).unwrap();
        for channel in Channel::CURRENTS {
            prop_assert!(bounds.bound(channel).unwrap() >= 0.0);
        }
    }
}
