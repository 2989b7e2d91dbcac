use hqet_core::{Kinematics, ZMap};
use proptest::prelude::*;

proptest! {
    #[test]
    fn z_stays_inside_unit_disc(a in 0.2f64..5.0, w in 1.0f64..1.6) {
        let map = ZMap::new(a).unwrap();
        prop_assert!(map.z(w).abs() < 1.0);
    }

    #[test]
    fn zero_recoil_maps_to_expansion_point(a in 0.05f64..20.0) {
        let map = ZMap::new(a).unwrap();
        prop_assert!((map.z(1.0) - map.z0()).abs() < 1e-12);
        prop_assert!(map.dz(1.0).abs() < 1e-12);
    }

    #[test]
    fn recoil_round_trips_through_q2(m1 in 4.0f64..6.0, m2 in 1.0f64..2.5, w in 1.0f64..1.6) {
        let kin = Kinematics::new(m1, m2).unwrap();
        prop_assert!((kin.w(kin.q2(w)) - w).abs() < 1e-12);
        prop_assert!(kin.q2(w) <= kin.q2_max() + 1e-12);
    }
}
