use hqet_core::{hqet_key, Options, Parameters};
use hqet_ff::{omega, r, FormFactors, IsgurWiseBank, Transition};
use proptest::prelude::*;

const NS: &str = "B(*)->D(*)";

fn with(symbol: &str, value: f64) -> Parameters {
    let mut params = Parameters::defaults();
    params.set(&hqet_key(NS, symbol), value).unwrap();
    params
}

proptest! {
    #[test]
    fn quadratic_lp_ignores_third_derivative(xi3 in -20.0f64..20.0, w in 1.0f64..1.6) {
        let options = Options::new().with("z-order-lp", "2");
        let free = IsgurWiseBank::from_parameters(&with("xi'''(1)", xi3), &options, NS).unwrap();
        let zero = IsgurWiseBank::from_parameters(&with("xi'''(1)", 0.0), &options, NS).unwrap();
        prop_assert_eq!(free.xi(w), zero.xi(w));
    }

    #[test]
    fn linear_slp_ignores_second_derivative(chi2pp in -5.0f64..5.0, w in 1.0f64..1.6) {
        let options = Options::new().with("z-order-slp", "1");
        let free = IsgurWiseBank::from_parameters(&with("chi_2''(1)", chi2pp), &options, NS).unwrap();
        let zero = IsgurWiseBank::from_parameters(&with("chi_2''(1)", 0.0), &options, NS).unwrap();
        prop_assert_eq!(free.chi2(w), zero.chi2(w));
    }

    #[test]
    fn constant_sslp_ignores_every_derivative(lp in -10.0f64..10.0, w in 1.0f64..1.6) {
        let options = Options::new().with("z-order-sslp", "0");
        let params = with("l_3'(1)", lp);
        let bank = IsgurWiseBank::from_parameters(&params, &options, NS).unwrap();
        prop_assert_eq!(bank.l(w), bank.l(1.0));
    }

    #[test]
    fn f_plus_meets_f_zero_at_maximal_recoil(xi1 in -2.0f64..-0.5, xi2 in 0.5f64..3.0) {
        let mut params = with("xi'(1)", xi1);
        params.set(&hqet_key(NS, "xi''(1)"), xi2).unwrap();
        let ff = FormFactors::new(Transition::BToD, &params, &Options::new()).unwrap();
        let pp = ff.as_p_to_p().unwrap();
        prop_assert!((pp.f_p(0.0) - pp.f_0(0.0)).abs() < 1e-12);
    }

    #[test]
    fn matching_functions_are_finite_above_threshold(w in 1.0f64..2.0, z in 0.15f64..0.45) {
        prop_assert!(r(w).is_finite());
        prop_assert!(omega(w, z).is_finite());
    }

    #[test]
    fn matching_functions_are_smooth_through_the_switch(z in 0.15f64..0.45, d in 0.0f64..5.0e-6) {
        let w = 1.0 + 1.0e-5;
        prop_assert!((r(w + d) - r(w - d)).abs() < 1.0e-5);
        prop_assert!((omega(w + d, z) - omega(w - d, z)).abs() < 1.0e-5);
    }
}
