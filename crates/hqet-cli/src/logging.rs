use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber on first call; later calls are no-ops.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Events go to
/// stderr so that stdout carries only the command output.
pub fn init_tracing(json: bool) -> bool {
    if INITIALISED.set(()).is_err() {
        return false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);
        Registry::default().with(filter).with(layer).try_init()
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);
        Registry::default().with(filter).with(layer).try_init()
    };
    installed.is_ok()
}
