use std::collections::BTreeMap;
use std::error::Error;

use clap::Args;

use super::{to_pretty_json, ConfigArgs};
use crate::config::RunConfig;

#[derive(Args, Debug, Clone)]
pub struct ParamsArgs {
    /// Only list keys starting with this prefix, e.g. `B_s(*)->D_s(*)`.
    #[arg(long)]
    pub prefix: Option<String>,
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn list(args: &ParamsArgs, config: &RunConfig) -> BTreeMap<String, f64> {
    let prefix = args.prefix.as_deref().unwrap_or("");
    config
        .parameters
        .iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

pub fn run(args: &ParamsArgs) -> Result<(), Box<dyn Error>> {
    let config = args.config.load()?;
    println!("{}", to_pretty_json(&list(args, &config))?);
    Ok(())
}
