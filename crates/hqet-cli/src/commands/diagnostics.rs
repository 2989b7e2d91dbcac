use std::error::Error;

use clap::Args;
use hqet_core::DiagnosticEntry;
use hqet_ff::{FormFactors, Transition};
use serde::Serialize;
use tracing::info;

use super::{to_pretty_json, ConfigArgs};
use crate::config::RunConfig;

#[derive(Args, Debug, Clone)]
pub struct DiagnosticsArgs {
    /// Process name, e.g. `B->D`.
    #[arg(long)]
    pub transition: String,
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub transition: String,
    pub fingerprint: String,
    pub entries: Vec<DiagnosticEntry>,
}

pub fn collect(args: &DiagnosticsArgs, config: &RunConfig) -> Result<DiagnosticsReport, Box<dyn Error>> {
    let transition: Transition = args.transition.parse()?;
    let ff = FormFactors::with_constants(
        transition,
        &config.parameters,
        &config.options,
        config.constants,
    )?;
    let dump = ff.diagnostics();
    let fingerprint = dump.fingerprint()?;
    info!(%transition, entries = dump.len(), %fingerprint, "diagnostics dump");
    Ok(DiagnosticsReport {
        transition: transition.name().to_string(),
        fingerprint,
        entries: dump.entries().to_vec(),
    })
}

pub fn run(args: &DiagnosticsArgs) -> Result<(), Box<dyn Error>> {
    let config = args.config.load()?;
    println!("{}", to_pretty_json(&collect(args, &config)?)?);
    Ok(())
}
