use std::error::Error;

use clap::{Args, ValueEnum};
use hqet_bounds::{BglParametrisationBounds, BoundReport, HqetUnitarityBounds, OpeBounds};

use super::{to_pretty_json, ConfigArgs};
use crate::config::RunConfig;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundChoice {
    /// Saturation by the HQET coefficients, six channels.
    #[default]
    Hqet,
    /// OPE susceptibilities, four channels.
    Ope,
    /// Saturation by the `@BGL1997` coefficients, four channels.
    Bgl,
}

#[derive(Args, Debug, Clone)]
pub struct BoundsArgs {
    /// Estimator to evaluate.
    #[arg(long, value_enum, default_value_t = BoundChoice::Hqet)]
    pub kind: BoundChoice,
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn evaluate(args: &BoundsArgs, config: &RunConfig) -> Result<BoundReport, Box<dyn Error>> {
    let report = match args.kind {
        BoundChoice::Hqet => HqetUnitarityBounds::with_constants(
            &config.parameters,
            &config.options,
            &config.constants,
        )?
        .report(),
        BoundChoice::Ope => OpeBounds::new(&config.parameters)?.report(),
        BoundChoice::Bgl => {
            BglParametrisationBounds::new(&config.parameters, &config.options)?.report()
        }
    };
    Ok(report)
}

pub fn run(args: &BoundsArgs) -> Result<(), Box<dyn Error>> {
    let config = args.config.load()?;
    println!("{}", to_pretty_json(&evaluate(args, &config)?)?);
    Ok(())
}
