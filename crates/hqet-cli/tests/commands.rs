use hqet_bounds::{BoundKind, Channel};
use hqet_cli::commands::bgl::{self, BglArgs, SectorChoice};
use hqet_cli::commands::bounds::{self, BoundChoice, BoundsArgs};
use hqet_cli::commands::diagnostics::{self, DiagnosticsArgs};
use hqet_cli::commands::form_factors::{self, Basis, FormFactorsArgs};
use hqet_cli::commands::params::{self, ParamsArgs};
use hqet_cli::commands::zero_recoil;
use hqet_cli::commands::ConfigArgs;
use hqet_cli::{parse_config, RunConfig};
use hqet_core::Sector;

fn form_factor_args(transition: &str, q2: Vec<f64>, basis: Basis) -> FormFactorsArgs {
    FormFactorsArgs {
        transition: transition.to_string(),
        q2,
        basis,
        config: ConfigArgs::default(),
    }
}

#[test]
fn form_factor_table_reproduces_the_engine() {
    let args = form_factor_args("B->D", vec![0.0, 5.0], Basis::Physical);
    let table = form_factors::tabulate(&args, &RunConfig::default()).unwrap();
    assert_eq!(table.transition, "B->D");
    assert_eq!(table.points.len(), 2);
    let f_p = table.points[0].values["f_+"];
    assert!((f_p - 0.6683313163814144).abs() < 1e-9);
    assert_eq!(table.points[1].values.len(), 5);

    let args = form_factor_args("B->D^*", vec![1.0], Basis::Hqet);
    let table = form_factors::tabulate(&args, &RunConfig::default()).unwrap();
    assert_eq!(table.points[0].values.len(), 7);
}

#[test]
fn unknown_transitions_are_reported() {
    let args = form_factor_args("B->K", vec![0.0], Basis::Physical);
    let err = form_factors::tabulate(&args, &RunConfig::default()).unwrap_err();
    assert!(err.to_string().contains("transition-unknown"));
}

#[test]
fn diagnostics_carry_a_fingerprint() {
    let args = DiagnosticsArgs {
        transition: "B^*->D^*".to_string(),
        config: ConfigArgs::default(),
    };
    let first = diagnostics::collect(&args, &RunConfig::default()).unwrap();
    let second = diagnostics::collect(&args, &RunConfig::default()).unwrap();
    assert_eq!(first.entries.len(), 96);
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.fingerprint.len(), 64);
}

#[test]
fn bgl_listing_honours_the_sector_filter() {
    let args = BglArgs {
        sector: SectorChoice::Strange,
        config: ConfigArgs::default(),
    };
    let entries = bgl::tabulate(&args, &RunConfig::default()).unwrap();
    assert_eq!(entries.len(), 34);
    assert!(entries.iter().all(|entry| entry.sector == Sector::Strange));
    assert_eq!(entries[2].name, "fTs");
}

#[test]
fn bounds_follow_the_configured_order() {
    let config = parse_config("options:\n  z-order-bound: 1\n").unwrap();
    let args = BoundsArgs {
        kind: BoundChoice::Hqet,
        config: ConfigArgs::default(),
    };
    let report = bounds::evaluate(&args, &config).unwrap();
    assert_eq!(report.kind, BoundKind::Hqet);
    let zero_plus = report.get(Channel::ZeroPlus).unwrap();
    assert!((zero_plus - 0.07406274643918302).abs() < 1e-12);

    let args = BoundsArgs {
        kind: BoundChoice::Bgl,
        config: ConfigArgs::default(),
    };
    let report = bounds::evaluate(&args, &RunConfig::default()).unwrap();
    assert_eq!(report.entries.len(), 4);
    assert!(report.entries.iter().all(|entry| entry.value == 0.0));
}

#[test]
fn params_filter_by_prefix_and_zero_recoil_follows_q() {
    let args = ParamsArgs {
        prefix: Some("mass::".to_string()),
        config: ConfigArgs::default(),
    };
    let listed = params::list(&args, &RunConfig::default());
    assert_eq!(listed.len(), 10);
    assert_eq!(listed["mass::D_s^*"], 2.1122);

    let config = parse_config("options:\n  q: s\n").unwrap();
    let snapshot = zero_recoil::snapshot(&config).unwrap();
    assert_eq!(snapshot.sector(), Sector::Strange);
    assert_eq!(snapshot.xi_prime(), -1.25);
}
