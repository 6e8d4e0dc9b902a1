//! Option declarations and report rendering for the `opter_demo` binary.
//!
//! The binary resolves a small server-style configuration from the command
//! line, the environment, an `opter.json` next to the executable and the
//! declared defaults, then prints the merged tree as JSON.

pub mod error;

use std::io::{self, Write};

use opter::{OptionMap, OptionSpec, OptionType, ResolvedConfig};
use serde::Deserialize;

use crate::error::Result;

/// Returns the options understood by the demo.
#[must_use]
pub fn options() -> OptionMap {
    OptionMap::new()
        .with(
            "listen.port",
            OptionSpec::new()
                .argument("port")
                .option_type(OptionType::Number)
                .description("Port to listen on.")
                .default_value(8080),
        )
        .with(
            "listen.host",
            OptionSpec::new()
                .argument("host")
                .description("Address to bind.")
                .default_value("127.0.0.1"),
        )
        .with(
            "verbose",
            OptionSpec::new()
                .option_type(OptionType::Boolean)
                .description("Log every request."),
        )
        .with(
            "startedAt",
            OptionSpec::new()
                .argument("when")
                .option_type(OptionType::Date)
                .description("Timestamp reported as the start time."),
        )
        .with(
            "db.settings",
            OptionSpec::new()
                .argument("json")
                .option_type(OptionType::Object)
                .description("Extra database settings as JSON."),
        )
        .with(
            "name",
            OptionSpec::new()
                .character('n')
                .argument("name")
                .option_type(OptionType::String)
                .default_value("demo"),
        )
}

/// Listener settings extracted from a resolved configuration.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Listen {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

/// Typed view over the parts of the configuration the demo acts on.
#[derive(Debug, Deserialize, PartialEq)]
pub struct DemoSettings {
    /// Listener settings.
    pub listen: Listen,
    /// Whether verbose logging was requested.
    pub verbose: bool,
    /// Service name.
    pub name: String,
}

/// Writes the resolved tree as pretty JSON followed by a summary line.
///
/// # Errors
///
/// Returns an error when the typed settings cannot be extracted or when
/// writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, config: &ResolvedConfig) -> Result<()> {
    let settings: DemoSettings = config.extract()?;
    let tree = serde_json::to_string_pretty(&config.to_json())?;
    writeln!(out, "{tree}")?;
    writeln!(
        out,
        "{} would listen on {}:{}{}",
        settings.name,
        settings.listen.host,
        settings.listen.port,
        if settings.verbose { " (verbose)" } else { "" }
    )?;
    Ok(())
}

/// Writes the report to standard output.
///
/// # Errors
///
/// See [`write_report`].
pub fn print_report(config: &ResolvedConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, config)
}
