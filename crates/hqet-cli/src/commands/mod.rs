use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::config::{load_config, RunConfig};

pub mod bgl;
pub mod bounds;
pub mod diagnostics;
pub mod form_factors;
pub mod params;
pub mod zero_recoil;

/// `--config` flag shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// YAML or JSON document with `parameters`, `options` and `constants`.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<RunConfig, Box<dyn Error>> {
        load_config(self.config.as_deref())
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(value)?)
}
