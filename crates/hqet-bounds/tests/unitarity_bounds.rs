use hqet_bounds::{
    saturation, BglCoefficients, BglFormFactor, BoundKind, BoundReport, Channel,
    HqetUnitarityBounds, OpeBounds,
};
use hqet_core::{Options, Parameters, Sector};

fn relative(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

#[test]
fn hqet_bounds_at_second_order() {
    let bounds = HqetUnitarityBounds::new(&Parameters::defaults(), &Options::new()).unwrap();
    assert_eq!(bounds.order(), 2);
    let expected = [
        (Channel::ZeroPlus, 1.190934107333579),
        (Channel::ZeroMinus, 0.9848860151824648),
        (Channel::OnePlus, 0.13771238387351364),
        (Channel::OneMinus, 0.14923785599458297),
        (Channel::OneMinusTensor, 0.3678981717943721),
        (Channel::OnePlusTensor, 0.08653032317152728),
    ];
    for (channel, value) in expected {
        assert!(relative(bounds.bound(channel), value) < 1e-12, "{channel}");
    }
}

#[test]
fn hqet_bounds_at_first_order() {
    let options = Options::new().with("z-order-bound", "1");
    let bounds = HqetUnitarityBounds::new(&Parameters::defaults(), &options).unwrap();
    let expected = [
        (Channel::ZeroPlus, 0.07406274643918302),
        (Channel::ZeroMinus, 0.04877992240279799),
        (Channel::OnePlus, 0.005381204266015764),
        (Channel::OneMinus, 0.004330716092339941),
        (Channel::OneMinusTensor, 0.00803854143605745),
        (Channel::OnePlusTensor, 0.0014249527107328473),
    ];
    let report = bounds.report();
    assert_eq!(report.kind, BoundKind::Hqet);
    assert_eq!(report.z_order, Some(1));
    for (channel, value) in expected {
        let reported = report.get(channel).unwrap();
        assert!(relative(reported, value) < 1e-12, "{channel}");
    }
}

#[test]
fn toy_aggregation_matches_hand_sum() {
    // Two channels, first order.
    let scalar = [[0.5, -0.25, 9.0], [0.1, 0.2, 9.0]];
    let pseudo = [[-1.0, 0.5, 9.0]];
    let zero_plus = saturation([(&scalar[0], 2.0), (&scalar[1], 1.0)], 1);
    let zero_minus = saturation([(&pseudo[0], 3.0)], 1);
    assert!((zero_plus - (2.0 * (0.25 + 0.0625) + (0.01 + 0.04))).abs() < 1e-15);
    assert!((zero_minus - 3.0 * 1.25).abs() < 1e-15);
}

#[test]
fn channel_sum_follows_the_table() {
    let params = Parameters::defaults();
    let options = Options::new();
    let table = BglCoefficients::new(&params, &options).unwrap();
    let bounds = HqetUnitarityBounds::from_table(table.clone(), 3.0, 0.5, 2);

    let mut expected = 0.0;
    for ff in Channel::OnePlus.members() {
        for a in table.coefficients(Sector::NonStrange, *ff) {
            expected += 3.0 * a * a;
        }
        for a in table.coefficients(Sector::Strange, *ff) {
            expected += 0.5 * a * a;
        }
    }
    assert!(relative(bounds.bound(Channel::OnePlus), expected) < 1e-14);
    assert!(Channel::OnePlus.members().contains(&BglFormFactor::V4));
}

#[test]
fn unsupported_z_order_is_a_configuration_error() {
    let params = Parameters::defaults();
    for value in ["0", "3"] {
        let options = Options::new().with("z-order-bound", value);
        let err = HqetUnitarityBounds::new(&params, &options).unwrap_err();
        assert_eq!(err.info().code, "zorder-bound-unsupported");
    }
}

#[test]
fn ope_bounds_at_defaults() {
    let ope = OpeBounds::new(&Parameters::defaults()).unwrap();
    let report = ope.report();
    assert_eq!(report.kind, BoundKind::Ope);
    assert_eq!(report.entries.len(), 4);
    let expected = [
        (Channel::ZeroPlus, 0.0046960058414540168),
        (Channel::ZeroMinus, 0.024845527767394159),
        (Channel::OnePlus, 0.00033136940041873041),
        (Channel::OneMinus, 0.00056855309142246767),
    ];
    for (channel, value) in expected {
        assert!(relative(report.get(channel).unwrap(), value) < 1e-12, "{channel}");
    }
    assert_eq!(ope.bound(Channel::OnePlusTensor), None);
}

#[test]
fn ope_limits_match_reference_values() {
    let ope = OpeBounds::new(&Parameters::defaults()).unwrap();
    assert!(relative(ope.chi_t(0.0), 0.00053477032434786168) < 1e-12);
    assert!(relative(ope.chi_l(0.0), 0.014792368251289121) < 1e-12);

    let near_unit = [
        (0.99, 88.128980654233294, -1.5748093880281089),
        (-0.99, 952.06877097669838, -2.401278173862429),
        (0.985, 11.680125002301751, -0.46949546084775218),
    ];
    for (u, chi_t, chi_l) in near_unit {
        assert!(relative(ope.chi_t(u), chi_t) < 1e-10, "chi_T({u})");
        assert!(relative(ope.chi_l(u), chi_l) < 1e-10, "chi_L({u})");
    }
}

#[test]
fn reports_serialise_with_channel_labels() {
    let report = OpeBounds::new(&Parameters::defaults()).unwrap().report();
    let json = String::from_utf8(report.to_json_bytes().unwrap()).unwrap();
    assert!(json.contains("\"channel\":\"0+\""));
    assert!(json.contains("\"kind\":\"ope\""));
    assert!(!json.contains("z_order"));
    assert_eq!(report.fingerprint().unwrap(), report.fingerprint().unwrap());

    let decoded: BoundReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.kind, BoundKind::Ope);
    assert_eq!(decoded.z_order, None);
    assert_eq!(decoded.entries.len(), 4);
    assert_eq!(decoded.entries[0].channel, Channel::ZeroPlus);
}
