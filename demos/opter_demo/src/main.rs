//! Demo entry-point: resolve the layered configuration and print it.

use opter::parser::ClapFlagParser;
use opter::{ConfigBuilder, OpterError, ResolvedConfig};

use opter_demo::error::Result;
use opter_demo::{options, print_report};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;
    run().map_err(color_eyre::eyre::Report::from)
}

/// Logs to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

fn run() -> Result<()> {
    let config = resolve_config()?;
    tracing::debug!(flags = config.flags().len(), "configuration resolved");
    print_report(&config)
}

fn resolve_config() -> Result<ResolvedConfig> {
    ConfigBuilder::new()
        .options(options())
        .version(env!("CARGO_PKG_VERSION"))
        .parser(ClapFlagParser::new("opter_demo"))
        .resolve()
        .map_err(|err| {
            if let OpterError::CliParsing(clap_err) = &err
                && err.is_display_request()
            {
                clap_err.exit();
            }
            err.into()
        })
}
