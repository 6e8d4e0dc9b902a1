//! Per-option walk of the source chain.
//!
//! Sources are consulted in fixed order: command line, environment,
//! configuration file, default. The first source that supplied a value wins,
//! even when that value is `""`, `0`, `false` or `null`; presence is always
//! checked explicitly and never inferred from the value itself.

use std::fmt;

use serde_json::Value;

use crate::env::{EnvironmentSource, variable_name};
use crate::option::OptionSpec;
use crate::parser::FlagParser;
use crate::path;

/// Source that supplied an option's value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Provenance {
    /// Supplied on the command line.
    Cli,
    /// Read from an environment variable.
    Environment,
    /// Found in the configuration file.
    File,
    /// Taken from the option's default.
    Defaults,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cli => "command line",
            Self::Environment => "environment",
            Self::File => "configuration file",
            Self::Defaults => "default",
        };
        f.write_str(label)
    }
}

/// A raw value together with the source that supplied it.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    /// Raw value before coercion.
    pub value: Value,
    /// Winning source.
    pub provenance: Provenance,
}

/// The collaborators consulted for every option.
pub struct Sources<'a> {
    /// Parsed command line.
    pub cli: &'a dyn FlagParser,
    /// Environment variables.
    pub env: &'a dyn EnvironmentSource,
    /// Parsed configuration file, if one was found.
    pub file: Option<&'a Value>,
}

impl fmt::Debug for Sources<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sources")
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

/// Resolves the raw value of `option`, or `None` when no source has one.
///
/// A boolean flag (no argument label) without a declared default falls back
/// to `false`.
#[must_use]
pub fn resolve(option: &str, spec: &OptionSpec, sources: &Sources<'_>) -> Option<Resolved> {
    let found = sources
        .cli
        .value(option)
        .map(|value| (value, Provenance::Cli))
        .or_else(|| {
            sources
                .env
                .var(&variable_name(option))
                .map(|value| (Value::String(value), Provenance::Environment))
        })
        .or_else(|| {
            sources
                .file
                .and_then(|file| path::get(file, option))
                .map(|value| (value.clone(), Provenance::File))
        })
        .or_else(|| {
            effective_default(spec).map(|value| (value, Provenance::Defaults))
        });
    found.map(|(value, provenance)| Resolved { value, provenance })
}

fn effective_default(spec: &OptionSpec) -> Option<Value> {
    match &spec.default_value {
        Some(value) => Some(value.clone()),
        None if !spec.takes_value() => Some(Value::Bool(false)),
        None => None,
    }
}
