use std::error::Error;

use clap::{Parser, Subcommand};
use hqet_cli::commands::{
    bgl::{self, BglArgs},
    bounds::{self, BoundsArgs},
    diagnostics::{self, DiagnosticsArgs},
    form_factors::{self, FormFactorsArgs},
    params::{self, ParamsArgs},
    zero_recoil::{self, ZeroRecoilArgs},
};
use hqet_cli::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "hqet", about = "HQET form factors and unitarity bounds for b -> c transitions")]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tabulate physical-basis or HQET form factors of one transition.
    FormFactors(FormFactorsArgs),
    /// Dump the regression diagnostics of one transition with its fingerprint.
    Diagnostics(DiagnosticsArgs),
    /// List the BGL coefficients predicted by HQET.
    Bgl(BglArgs),
    /// Evaluate the HQET, OPE or BGL-parametrisation unitarity bounds.
    Bounds(BoundsArgs),
    /// Print the parameter store after configuration overrides.
    Params(ParamsArgs),
    /// Print the zero-recoil Isgur-Wise inputs of the sector selected by `q`.
    ZeroRecoil(ZeroRecoilArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);
    match cli.command {
        Command::FormFactors(args) => form_factors::run(&args),
        Command::Diagnostics(args) => diagnostics::run(&args),
        Command::Bgl(args) => bgl::run(&args),
        Command::Bounds(args) => bounds::run(&args),
        Command::Params(args) => params::run(&args),
        Command::ZeroRecoil(args) => zero_recoil::run(&args),
    }
}
