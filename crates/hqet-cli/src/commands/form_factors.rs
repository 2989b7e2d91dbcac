use std::collections::BTreeMap;
use std::error::Error;

use clap::{Args, ValueEnum};
use hqet_ff::{FormFactors, Transition};
use serde::Serialize;
use tracing::info;

use super::{to_pretty_json, ConfigArgs};
use crate::config::RunConfig;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Basis {
    /// Physical-basis form factors such as `f_p` or `a_1`.
    #[default]
    Physical,
    /// HQET h-functions.
    Hqet,
}

#[derive(Args, Debug, Clone)]
pub struct FormFactorsArgs {
    /// Process name, e.g. `B->D^*` or `B_s^*->D_s`.
    #[arg(long)]
    pub transition: String,
    /// Comma-separated momentum transfers in GeV^2.
    #[arg(long, value_delimiter = ',', default_value = "0")]
    pub q2: Vec<f64>,
    /// Which set of functions to tabulate.
    #[arg(long, value_enum, default_value_t = Basis::Physical)]
    pub basis: Basis,
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Serialize)]
pub struct Point {
    pub q2: f64,
    pub values: BTreeMap<&'static str, f64>,
}

#[derive(Debug, Serialize)]
pub struct FormFactorTable {
    pub transition: String,
    pub q2_max: f64,
    pub points: Vec<Point>,
}

pub fn tabulate(args: &FormFactorsArgs, config: &RunConfig) -> Result<FormFactorTable, Box<dyn Error>> {
    let transition: Transition = args.transition.parse()?;
    let ff = FormFactors::with_constants(
        transition,
        &config.parameters,
        &config.options,
        config.constants,
    )?;
    let points = args
        .q2
        .iter()
        .map(|&q2| {
            let values = match args.basis {
                Basis::Physical => ff.physical(q2),
                Basis::Hqet => ff.h_functions(q2),
            };
            Point {
                q2,
                values: values.into_iter().collect(),
            }
        })
        .collect::<Vec<_>>();
    info!(%transition, points = points.len(), basis = ?args.basis, "tabulated form factors");
    Ok(FormFactorTable {
        transition: transition.name().to_string(),
        q2_max: ff.base().kinematics().q2_max(),
        points,
    })
}

pub fn run(args: &FormFactorsArgs) -> Result<(), Box<dyn Error>> {
    let config = args.config.load()?;
    let table = tabulate(args, &config)?;
    println!("{}", to_pretty_json(&table)?);
    Ok(())
}
