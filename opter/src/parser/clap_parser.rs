//! `clap`-backed implementation of [`FlagParser`].

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;

use super::FlagParser;
use crate::error::OpterResult;
use crate::flag::CompiledFlag;

/// Builds a [`clap::Command`] from compiled flags.
///
/// `<label>` flags take exactly one value and `[label]` flags take an
/// optional one, yielding `true` when given bare. No argument is marked
/// required for clap: required-ness is enforced after every source has been
/// consulted.
#[derive(Debug)]
pub struct ClapFlagParser {
    command: Command,
    matches: Option<ArgMatches>,
}

impl ClapFlagParser {
    /// Creates a parser for a program called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            command: Command::new(name.into()).override_usage("[options]"),
            matches: None,
        }
    }

    /// Returns the command built so far, e.g. to render help.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    fn update(&mut self, apply: impl FnOnce(Command) -> Command) {
        let command = std::mem::take(&mut self.command);
        self.command = apply(command);
    }
}

impl Default for ClapFlagParser {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

fn build_arg(flag: &CompiledFlag) -> Arg {
    let arg = Arg::new(flag.option.clone())
        .short(flag.short)
        .long(flag.long.clone())
        .help(flag.help.clone());
    match &flag.placeholder {
        None => arg.action(ArgAction::SetTrue),
        Some(placeholder) if placeholder.required => arg
            .action(ArgAction::Set)
            .num_args(1)
            .value_name(placeholder.label.clone()),
        Some(placeholder) => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .value_name(placeholder.label.clone()),
    }
}

impl FlagParser for ClapFlagParser {
    fn register_version(&mut self, version: &str) {
        let owned = version.to_owned();
        self.update(|command| command.version(owned));
    }

    fn register(&mut self, flag: &CompiledFlag) {
        let arg = build_arg(flag);
        self.update(|command| command.arg(arg));
    }

    fn parse(&mut self, args: Vec<OsString>) -> OpterResult<()> {
        let matches = self.command.try_get_matches_from_mut(args)?;
        self.matches = Some(matches);
        Ok(())
    }

    fn value(&self, option: &str) -> Option<Value> {
        let matches = self.matches.as_ref()?;
        if matches.value_source(option) != Some(ValueSource::CommandLine) {
            return None;
        }
        match matches.try_get_one::<String>(option) {
            Ok(Some(text)) => Some(Value::String(text.clone())),
            Ok(None) | Err(_) => Some(Value::Bool(true)),
        }
    }
}
