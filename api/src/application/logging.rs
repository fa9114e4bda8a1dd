use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::LogArgs;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `--log-filter` when both are present.
pub fn init_logger(args: &LogArgs) -> Result<(), anyhow::Error> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.filter))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if args.json {
        registry
            .with(fmt::layer().json().with_current_span(true).with_target(true))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().compact().with_target(true))
            .try_init()?;
    }

    tracing::debug!("Tracing initialized");
    Ok(())
}
