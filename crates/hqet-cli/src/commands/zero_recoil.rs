use std::error::Error;

use clap::Args;
use hqet_ff::IsgurWiseParameters;

use super::{to_pretty_json, ConfigArgs};
use crate::config::RunConfig;

#[derive(Args, Debug, Clone)]
pub struct ZeroRecoilArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Zero-recoil IW inputs of the sector picked by option `q`.
pub fn snapshot(config: &RunConfig) -> Result<IsgurWiseParameters, Box<dyn Error>> {
    Ok(IsgurWiseParameters::new(&config.parameters, &config.options)?)
}

pub fn run(args: &ZeroRecoilArgs) -> Result<(), Box<dyn Error>> {
    let config = args.config.load()?;
    println!("{}", to_pretty_json(&snapshot(&config)?)?);
    Ok(())
}
