use hqet_core::{hqet_key, Options, Parameters};
use hqet_ff::{FormFactors, Transition};

const NS: &str = "B(*)->D(*)";

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual}"
    );
}

fn bind(transition: Transition, params: &Parameters, options: &Options) -> FormFactors {
    FormFactors::new(transition, params, options).expect("transition binds")
}

fn value(list: &[(&'static str, f64)], label: &str) -> f64 {
    list.iter()
        .find(|(name, _)| *name == label)
        .map(|(_, v)| *v)
        .unwrap_or_else(|| panic!("missing {label}"))
}

/// Fit-like inputs with quadratic leading power and linear sslp.
fn case_one() -> (Parameters, Options) {
    let mut overrides: Vec<(String, f64)> = vec![
        ("mass::B_d".into(), 5.27942),
        ("mass::D_u".into(), 1.86723),
        (hqet_key(NS, "xi'(1)"), -0.849472),
        (hqet_key(NS, "xi''(1)"), 2.0 * 0.583711),
        (hqet_key(NS, "xi'''(1)"), 0.0),
        (hqet_key(NS, "chi_2(1)"), -0.0600533),
        (hqet_key(NS, "chi_2'(1)"), 6.97061e-6),
        (hqet_key(NS, "chi_2''(1)"), 0.0314499),
        (hqet_key(NS, "chi_3'(1)"), 0.0400298),
        (hqet_key(NS, "chi_3''(1)"), -0.039123),
        (hqet_key(NS, "eta(1)"), 0.604052),
        (hqet_key(NS, "eta'(1)"), -0.00545745),
        (hqet_key(NS, "eta''(1)"), -0.268764),
    ];
    let l = [0.111274, -2.01963, 0.0687349, -2.02231, 4.21978, 4.52949];
    let l_prime = [-15.0241, -9.43754, -0.616533, 0.604533, 0.115125, -1.4777];
    for k in 0..6 {
        overrides.push((hqet_key(NS, &format!("l_{}(1)", k + 1)), l[k]));
        overrides.push((hqet_key(NS, &format!("l_{}'(1)", k + 1)), l_prime[k]));
    }
    let params = Parameters::defaults().with_overrides(overrides).unwrap();
    let options = Options::new()
        .with("z-order-lp", "2")
        .with("z-order-slp", "2")
        .with("z-order-sslp", "1");
    (params, options)
}

#[test]
fn b_to_d_defaults_at_fixed_q2() {
    let ff = bind(Transition::BToD, &Parameters::defaults(), &Options::new());
    let pp = ff.as_p_to_p().unwrap();

    assert_close(pp.f_p(0.0), 0.6683313163814144, 1e-9, "f_+(0)");
    assert_close(pp.f_0(0.0), 0.6683313163814144, 1e-9, "f_0(0)");
    assert_close(pp.f_t(0.0), 0.7469283682696467, 1e-9, "f_T(0)");

    assert_close(pp.f_p(5.0), 0.8388662706317195, 1e-9, "f_+(5)");
    assert_close(pp.f_0(5.0), 0.7485614062829555, 1e-9, "f_0(5)");
    assert_close(pp.f_t(5.0), 0.9312824689147982, 1e-9, "f_T(5)");
}

#[test]
fn vector_and_scalar_coincide_at_maximal_recoil() {
    let ff = bind(Transition::BToD, &Parameters::defaults(), &Options::new());
    let pp = ff.as_p_to_p().unwrap();
    assert_close(pp.f_p(0.0), pp.f_0(0.0), 1e-14, "f_+(0) - f_0(0)");

    let physical = ff.physical(0.0);
    assert_eq!(physical.len(), 5);
    assert_eq!(value(&physical, "f_+"), pp.f_p(0.0));
}

#[test]
fn b_to_dstar_defaults_at_fixed_q2() {
    let ff = bind(Transition::BToDstar, &Parameters::defaults(), &Options::new());
    let pv = ff.as_p_to_v().unwrap();

    assert_close(pv.v(0.0), 0.7107099129698423, 1e-9, "V(0)");
    assert_close(pv.a_0(0.0), 0.6632523085834183, 1e-9, "A_0(0)");
    assert_close(pv.a_1(0.0), 0.6090568039153659, 1e-9, "A_1(0)");
    assert_close(pv.a_2(0.0), 0.5425926654269837, 1e-9, "A_2(0)");
    assert_close(pv.t_1(0.0), 0.6683866339010781, 1e-9, "T_1(0)");
    assert_close(pv.a_1(6.0), 0.7035924519451041, 1e-9, "A_1(6)");

    assert_eq!(ff.physical(2.0).len(), 17);
}

#[test]
fn bstar_to_d_defaults_at_fixed_recoil() {
    let ff = bind(Transition::BstarToD, &Parameters::defaults(), &Options::new());
    let q2 = ff.base().q2(1.2);
    let vp = ff.as_v_to_p().unwrap();

    assert_close(vp.h_abar_1(q2), 0.783836245665291, 1e-9, "h_Abar1");
    assert_close(vp.h_abar_2(q2), -0.09727863366343377, 1e-9, "h_Abar2");
    assert_close(vp.h_abar_3(q2), 0.8700705890368094, 1e-9, "h_Abar3");
    assert_close(vp.h_vbar(q2), 0.9290885732618659, 1e-9, "h_Vbar");
}

#[test]
fn bstar_to_dstar_defaults_at_fixed_recoil() {
    let ff = bind(Transition::BstarToDstar, &Parameters::defaults(), &Options::new());
    let q2 = ff.base().q2(1.2);
    let vv = ff.as_v_to_v().unwrap();

    let expected = [
        0.7523256594245296,
        -0.027737110756176332,
        1.0447816514413855,
        0.9409407458290909,
        0.13522635371261293,
        0.06409454992060301,
        0.7041988683729593,
        -0.06496352599956604,
        0.18238266730819444,
        0.07740866784037569,
    ];
    for (k, want) in expected.into_iter().enumerate() {
        assert_close(vv.h_k(k + 1, q2), want, 1e-9, &format!("h_{}", k + 1));
    }
    assert!(vv.h_k(0, q2).is_nan());
    assert!(vv.h_k(11, q2).is_nan());
}

#[test]
fn strange_transition_reads_its_own_sector() {
    let params = Parameters::defaults();
    let own = bind(Transition::BsToDs, &params, &Options::new());
    let pp = own.as_p_to_p().unwrap();
    assert_close(pp.f_p(0.0), 0.7274453651731634, 1e-9, "f_+(0)");
    assert_close(pp.f_t(0.0), 0.7505460311367573, 1e-9, "f_T(0)");

    let limit = bind(
        Transition::BsToDs,
        &params,
        &Options::new().with("SU3F-limit-sslp", "1"),
    );
    let pp = limit.as_p_to_p().unwrap();
    assert_close(pp.f_p(0.0), 0.7005836934602222, 1e-9, "f_+(0) SU(3)");
    assert_close(pp.f_t(0.0), 0.7433617998715624, 1e-9, "f_T(0) SU(3)");
}

#[test]
fn su3_limit_is_inert_for_non_strange_transitions() {
    let params = Parameters::defaults();
    let plain = bind(Transition::BToD, &params, &Options::new());
    let limit = bind(
        Transition::BToD,
        &params,
        &Options::new().with("SU3F-limit-sslp", "1"),
    );
    assert_eq!(plain.physical(3.0), limit.physical(3.0));
}

#[test]
fn fit_inputs_reproduce_recorded_h_functions() {
    let (params, options) = case_one();
    let ff = bind(Transition::BToD, &params, &options);

    let recorded = [
        (1.4, [0.6699709878501192, -0.04308850833952392, 0.6208951142166081, 0.7754058912278246]),
        (1.2, [0.8203651084830849, -0.04988980300906497, 0.7599920166301859, 0.9369066447244496]),
        (1.0, [1.0244022235705343, -0.06131285745672842, 0.9484799801772638, 1.1594681426644697]),
    ];
    for (w, expected) in recorded {
        let h = ff.h_functions(ff.base().q2(w));
        for ((label, actual), want) in h.into_iter().zip(expected) {
            assert_close(actual, want, 1e-9, &format!("{label}(w = {w})"));
        }
    }

    let ff = bind(Transition::BToDstar, &params, &options);
    let recorded = [
        (
            1.4,
            [
                0.6010210712547224,
                -0.18062560884668138,
                0.5987660428680841,
                0.6932754640506139,
                0.6306813420647001,
                -0.0704405858746151,
                -0.09517455177055725,
            ],
        ),
        (
            1.0,
            [
                0.8992600474691024,
                -0.2827621281869305,
                0.8647228414031922,
                1.0413640965364168,
                0.9613499376703194,
                -0.09699560814071054,
                -0.17756665015886333,
            ],
        ),
    ];
    for (w, expected) in recorded {
        let h = ff.h_functions(ff.base().q2(w));
        assert_eq!(h.len(), 7);
        for ((label, actual), want) in h.into_iter().zip(expected) {
            assert_close(actual, want, 1e-9, &format!("{label}(w = {w})"));
        }
    }
}

#[test]
fn cubic_fit_reproduces_recorded_form_factors() {
    let overrides = [
        ("mass::B_d".to_string(), 5.27942),
        ("mass::D_u".to_string(), 1.86723),
        (hqet_key(NS, "xi'(1)"), -1.5),
        (hqet_key(NS, "xi''(1)"), 3.0),
        (hqet_key(NS, "xi'''(1)"), 6.0),
        (hqet_key(NS, "xi''''(1)"), -9.0),
        (hqet_key(NS, "chi_2(1)"), 0.5),
        (hqet_key(NS, "chi_2'(1)"), -1.0),
        (hqet_key(NS, "chi_2''(1)"), 2.0),
        (hqet_key(NS, "chi_3'(1)"), -1.5),
        (hqet_key(NS, "chi_3''(1)"), 2.5),
        (hqet_key(NS, "eta(1)"), 0.25),
        (hqet_key(NS, "eta'(1)"), -1.25),
        (hqet_key(NS, "eta''(1)"), 1.75),
        (hqet_key(NS, "l_1(1)"), 0.5),
        (hqet_key(NS, "l_2(1)"), -2.0),
        (hqet_key(NS, "l_3(1)"), 0.0),
        (hqet_key(NS, "l_4(1)"), 0.0),
        (hqet_key(NS, "l_5(1)"), 0.0),
        (hqet_key(NS, "l_6(1)"), 0.0),
        (hqet_key(NS, "l_1'(1)"), 0.0),
        (hqet_key(NS, "l_2'(1)"), 0.0),
        (hqet_key(NS, "l_3'(1)"), 0.0),
        (hqet_key(NS, "l_4'(1)"), 0.0),
        (hqet_key(NS, "l_5'(1)"), 0.0),
        (hqet_key(NS, "l_6'(1)"), 0.0),
    ];
    let params = Parameters::defaults().with_overrides(overrides).unwrap();
    let options = Options::new()
        .with("z-order-lp", "3")
        .with("z-order-slp", "1")
        .with("z-order-sslp", "1");
    let ff = bind(Transition::BToD, &params, &options);
    let pp = ff.as_p_to_p().unwrap();

    let recorded = [
        (4.0, -0.3170994890967723, -0.3119254087134752, -0.0438079153599185),
        (8.0, 0.2731872366666769, 0.1983518673965164, 0.5141500654688089),
        (10.0, 0.7216425300580179, 0.5445122089475589, 0.9528295856530875),
    ];
    for (q2, f_p, f_0, f_t) in recorded {
        assert_close(pp.f_p(q2), f_p, 1e-9, &format!("f_+({q2})"));
        assert_close(pp.f_0(q2), f_0, 1e-9, &format!("f_0({q2})"));
        assert_close(pp.f_t(q2), f_t, 1e-9, &format!("f_T({q2})"));
    }
}

#[test]
fn every_transition_is_finite_across_its_phase_space() {
    let params = Parameters::defaults();
    let options = Options::new();
    for transition in Transition::ALL {
        let ff = bind(transition, &params, &options);
        let q2_max = ff.base().kinematics().q2_max();
        for step in 0..10 {
            let q2 = q2_max * f64::from(step) / 10.0;
            for (label, value) in ff.physical(q2) {
                assert!(value.is_finite(), "{transition} {label}({q2}) = {value}");
            }
        }
    }
}

#[test]
fn unphysical_recoil_propagates_nan() {
    let ff = bind(Transition::BToD, &Parameters::defaults(), &Options::new());
    let q2_max = ff.base().kinematics().q2_max();
    let pp = ff.as_p_to_p().unwrap();
    assert!(pp.f_p(q2_max + 0.5).is_nan());
}

#[test]
fn invalid_option_is_rejected_at_construction() {
    let err = FormFactors::new(
        Transition::BToD,
        &Parameters::defaults(),
        &Options::new().with("z-order-lp", "7"),
    )
    .unwrap_err();
    assert_eq!(err.info().code, "option-unsupported");
}
