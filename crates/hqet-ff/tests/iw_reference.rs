use hqet_core::{hqet_key, Options, Parameters};
use hqet_ff::{IsgurWiseBank, LpModel};

const NS: &str = "B(*)->D(*)";
const RECOILS: [f64; 5] = [2.1, 1.6, 1.1, 1.05, 1.0];

struct Recorded {
    xi: [f64; 5],
    chi2: [f64; 5],
    chi3: [f64; 5],
    eta: [f64; 5],
}

fn bank(overrides: &[(&str, f64)], options: &Options) -> IsgurWiseBank {
    let params = Parameters::defaults()
        .with_overrides(
            overrides
                .iter()
                .map(|(symbol, value)| (hqet_key(NS, symbol), *value)),
        )
        .unwrap();
    IsgurWiseBank::from_parameters(&params, options, NS).unwrap()
}

fn check(bank: &IsgurWiseBank, recorded: &Recorded) {
    for (i, w) in RECOILS.into_iter().enumerate() {
        let rows = [
            ("xi", bank.xi(w), recorded.xi[i]),
            ("chi2", bank.chi2(w), recorded.chi2[i]),
            ("chi3", bank.chi3(w), recorded.chi3[i]),
            ("eta", bank.eta(w), recorded.eta[i]),
        ];
        for (name, actual, expected) in rows {
            assert!(
                (actual - expected).abs() < 1e-10,
                "{name}({w}): expected {expected}, got {actual}"
            );
        }
    }
}

#[test]
fn quadratic_leading_power_matches_recorded_values() {
    let bank = bank(
        &[
            ("xi'(1)", -0.849472),
            ("xi''(1)", 2.0 * 0.583711),
            ("xi'''(1)", 0.0),
            ("chi_2(1)", -0.0600533),
            ("chi_2'(1)", 6.97061e-6),
            ("chi_2''(1)", 0.0314499),
            ("chi_3'(1)", 0.0400298),
            ("chi_3''(1)", -0.039123),
            ("eta(1)", 0.604052),
            ("eta'(1)", -0.00545745),
            ("eta''(1)", -0.268764),
        ],
        &Options::new()
            .with("z-order-lp", "2")
            .with("z-order-slp", "2"),
    );
    check(
        &bank,
        &Recorded {
            xi: [
                0.5414183217007007,
                0.6568489837621547,
                0.920647901791313,
                0.958954812486435,
                1.0,
            ],
            chi2: [
                -0.048060914608401645,
                -0.05573184885804643,
                -0.059902886374273184,
                -0.060014600895604224,
                -0.0600533,
            ],
            chi3: [
                0.027665048646549117,
                0.01835162181471731,
                0.003814963439484184,
                0.001953554790750231,
                0.0,
            ],
            eta: [
                0.4958267144707682,
                0.5639229519932633,
                0.6022270487714765,
                0.6034514225703487,
                0.604052,
            ],
        },
    );
}

#[test]
fn cubic_leading_power_with_linear_subleading_matches_recorded_values() {
    let bank = bank(
        &[
            ("xi'(1)", -1.5),
            ("xi''(1)", 3.0),
            ("xi'''(1)", 6.0),
            ("xi''''(1)", -9.0),
            ("chi_2(1)", 0.5),
            ("chi_2'(1)", -1.0),
            ("chi_2''(1)", 2.0),
            ("chi_3'(1)", -1.5),
            ("chi_3''(1)", 2.5),
            ("eta(1)", 0.25),
            ("eta'(1)", -1.25),
            ("eta''(1)", 1.75),
        ],
        &Options::new()
            .with("z-order-lp", "3")
            .with("z-order-slp", "1"),
    );
    check(
        &bank,
        &Recorded {
            xi: [
                1.6655393862111918,
                0.7645436930896199,
                0.8659083172247454,
                0.9288690998573731,
                1.0,
            ],
            chi2: [
                -0.3730193513055057,
                -0.02397732804597441,
                0.4024245107071483,
                0.4506154021307823,
                0.5,
            ],
            chi3: [
                -1.3095290269582585,
                -0.7859659920689617,
                -0.14636323393927753,
                -0.07407689680382652,
                0.0,
            ],
            eta: [
                -0.841274189131882,
                -0.404971660057468,
                0.12803063838393539,
                0.1882692526634779,
                0.25,
            ],
        },
    );
}

#[test]
fn leading_power_models_differ_away_from_zero_recoil() {
    let params = Parameters::defaults();
    let series = IsgurWiseBank::from_parameters(&params, &Options::new(), NS).unwrap();
    let exponential = IsgurWiseBank::from_parameters(
        &params,
        &Options::new().with("model-lp", "exponential"),
        NS,
    )
    .unwrap();

    assert_eq!(series.model(), LpModel::PowerSeries);
    assert_eq!(exponential.model(), LpModel::Exponential);
    assert!((series.xi(1.3) - 0.7297338774786774).abs() < 1e-10);
    assert!((exponential.xi(1.3) - 1.1618448948764448).abs() < 1e-10);
    assert_eq!(series.xi(1.0), 1.0);
    assert_eq!(exponential.xi(1.0), 1.0);
}

#[test]
fn subsubleading_order_zero_freezes_l_at_zero_recoil() {
    let params = Parameters::defaults();
    let frozen =
        IsgurWiseBank::from_parameters(&params, &Options::new().with("z-order-sslp", "0"), NS)
            .unwrap();
    let at_one = frozen.l(1.0);
    for w in [1.1, 1.3, 1.5] {
        assert_eq!(frozen.l(w), at_one);
    }
    assert_eq!(at_one[0], 0.12);
    assert_eq!(at_one[5], 3.53);
}
