//! Library half of the `hqet` binary: configuration loading, tracing setup
//! and one module per subcommand.

pub mod commands;
pub mod config;
pub mod logging;

pub use config::{load_config, parse_config, RunConfig};
pub use logging::init_tracing;
