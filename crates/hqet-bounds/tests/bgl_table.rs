use hqet_bounds::{BglCoefficients, BglFormFactor, SectorInputs};
use hqet_core::{Options, Parameters, Sector};

fn assert_close(actual: [f64; 3], expected: [f64; 3], label: &str) {
    for (k, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-14, "{label} a_{k}: expected {e}, got {a}");
    }
}

fn defaults() -> BglCoefficients {
    BglCoefficients::new(&Parameters::defaults(), &Options::new()).unwrap()
}

#[test]
fn non_strange_coefficients_at_defaults() {
    let table = defaults();
    let cases = [
        (
            BglFormFactor::V1,
            [0.009176992150026781, -0.020874909725330085, -0.07578348589256093],
        ),
        (
            BglFormFactor::A1,
            [0.007556149088330887, 0.003260930257005438, -0.06363666534595719],
        ),
        (
            BglFormFactor::T10,
            [0.014760924733656948, -0.023086622866317293, -0.19459107574185155],
        ),
        (
            BglFormFactor::T23Bar,
            [-0.0121072823427243, 0.0018597580505499934, 0.12713940041194785],
        ),
    ];
    for (ff, expected) in cases {
        assert_close(table.coefficients(Sector::NonStrange, ff), expected, ff.name());
    }
    assert_eq!(
        table.a1(Sector::NonStrange, BglFormFactor::V1),
        table.coefficients(Sector::NonStrange, BglFormFactor::V1)[1]
    );
}

#[test]
fn strange_coefficients_at_defaults() {
    let table = defaults();
    assert_close(
        table.coefficients(Sector::Strange, BglFormFactor::FT),
        [0.010359156438922075, -0.00409439622171287, -0.06799343805525077],
        "fTs",
    );
    assert_close(
        table.coefficients(Sector::Strange, BglFormFactor::T1Bar),
        [0.006315177134501614, -0.008022592183103158, -0.0503523469973677],
        "T1bars",
    );
}

#[test]
fn su3_limit_reads_non_strange_l_parameters() {
    let options = Options::new().with("SU3F-limit-sslp", "1");
    let table = BglCoefficients::new(&Parameters::defaults(), &options).unwrap();
    assert_close(
        table.coefficients(Sector::Strange, BglFormFactor::T1Bar),
        [0.006428890789102038, -0.014164297198229928, -0.044659221466440115],
        "T1bars",
    );
    assert_eq!(
        table.coefficients(Sector::NonStrange, BglFormFactor::T1Bar),
        defaults().coefficients(Sector::NonStrange, BglFormFactor::T1Bar)
    );
}

fn heavy_quark_limit(xi_p: f64, xi_pp: f64, spread: f64) -> SectorInputs {
    SectorInputs {
        alpha_s: 0.0,
        eps_b: 0.0,
        eps_c: 0.0,
        xi_p,
        xi_pp,
        chi2: 0.3 * spread,
        chi2_p: -0.7 * spread,
        chi3_p: 1.1 * spread,
        chi3_pp: -0.4 * spread,
        eta: 0.9 * spread,
        eta_p: 0.2 * spread,
        eta_pp: -1.3 * spread,
        l: [1.0, -2.0, 0.5, 3.0, -1.5, 2.5].map(|x| x * spread),
        l_p: [-0.5, 1.5, 2.0, -3.0, 0.25, 1.0].map(|x| x * spread),
    }
}

#[test]
fn heavy_quark_limit_ignores_power_corrections() {
    let bare = heavy_quark_limit(-1.3, 2.1, 0.0);
    let bare = BglCoefficients::from_inputs(bare, bare);
    for spread in [1.0, -2.5] {
        let dressed = heavy_quark_limit(-1.3, 2.1, spread);
        let dressed = BglCoefficients::from_inputs(dressed, dressed);
        for sector in Sector::ALL {
            for ff in BglFormFactor::ALL {
                assert_eq!(
                    dressed.coefficients(sector, ff),
                    bare.coefficients(sector, ff),
                    "{}",
                    ff.qualified_name(sector)
                );
            }
        }
    }
}

#[test]
fn heavy_quark_limit_fixes_the_leading_coefficient() {
    let steep = heavy_quark_limit(-1.8, 2.1, 0.0);
    let flat = heavy_quark_limit(-0.4, 2.1, 0.0);
    let steep = BglCoefficients::from_inputs(steep, steep);
    let flat = BglCoefficients::from_inputs(flat, flat);
    for sector in Sector::ALL {
        for ff in BglFormFactor::ALL {
            assert_eq!(steep.a0(sector, ff), flat.a0(sector, ff), "{ff}");
            assert_ne!(steep.coefficients(sector, ff), [0.0; 3], "{ff}");
        }
    }

    let limit = heavy_quark_limit(-1.3, 2.1, 0.0);
    let limit = BglCoefficients::from_inputs(limit, limit);
    assert_close(
        limit.coefficients(Sector::NonStrange, BglFormFactor::V1),
        [0.008703312831206973, -0.030286460746015265, -0.09187978220700088],
        "V1",
    );
}

#[test]
fn table_lists_both_sectors_in_order() {
    let table = defaults().table(&Sector::ALL);
    assert_eq!(table.len(), 2 * BglFormFactor::ALL.len());
    assert_eq!(table[0].name, "V1");
    assert_eq!(table[34].name, "V1s");
    assert_eq!(table[67].name, "T10s");
    assert_eq!(table[67].sector, Sector::Strange);
}
