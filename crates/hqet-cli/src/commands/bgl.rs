use std::error::Error;

use clap::{Args, ValueEnum};
use hqet_bounds::{BglCoefficients, BglEntry};
use hqet_core::Sector;
use tracing::info;

use super::{to_pretty_json, ConfigArgs};
use crate::config::RunConfig;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectorChoice {
    /// Both spectator sectors.
    #[default]
    All,
    /// `B(*) -> D(*)` only.
    NonStrange,
    /// `B_s(*) -> D_s(*)` only.
    Strange,
}

impl SectorChoice {
    fn sectors(self) -> &'static [Sector] {
        match self {
            SectorChoice::All => &Sector::ALL,
            SectorChoice::NonStrange => &[Sector::NonStrange],
            SectorChoice::Strange => &[Sector::Strange],
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BglArgs {
    /// Spectator sectors to list.
    #[arg(long, value_enum, default_value_t = SectorChoice::All)]
    pub sector: SectorChoice,
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn tabulate(args: &BglArgs, config: &RunConfig) -> Result<Vec<BglEntry>, Box<dyn Error>> {
    let table =
        BglCoefficients::with_constants(&config.parameters, &config.options, &config.constants)?;
    let entries = table.table(args.sector.sectors());
    info!(entries = entries.len(), "tabulated BGL coefficients");
    Ok(entries)
}

pub fn run(args: &BglArgs) -> Result<(), Box<dyn Error>> {
    let config = args.config.load()?;
    println!("{}", to_pretty_json(&tabulate(args, &config)?)?);
    Ok(())
}
