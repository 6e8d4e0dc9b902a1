//! Orchestration of a full resolution.
//!
//! [`ConfigBuilder::resolve`] moves through a fixed sequence of stages:
//!
//! 1. `Validating` claims every explicit short flag and checks that typed
//!    options declare an argument label;
//! 2. `Compiling` allocates the remaining short flags in option order and
//!    registers every compiled flag with the argument parser;
//! 3. `ExternalParse` hands the raw arguments to the parser exactly once;
//! 4. `Resolving` walks the source chain, coerces, enforces required-ness
//!    and writes each value into the tree.
//!
//! The first failure aborts the whole resolution.

mod stages;

use std::ffi::OsString;

use camino::Utf8PathBuf;
use serde_json::Value;

use crate::config::ResolvedConfig;
use crate::env::{EnvironmentSource, ProcessEnv};
use crate::error::{OpterError, OpterResult};
use crate::file::ConfigFileSource;
use crate::option::OptionMap;
use crate::parser::{ClapFlagParser, FlagParser};

use stages::Stage;

/// Builder for a one-shot resolution of an [`OptionMap`].
///
/// Defaults to the process arguments, the process environment, `opter.json`
/// next to the running executable and a [`ClapFlagParser`]. Every call to
/// [`ConfigBuilder::resolve`] consumes the builder, so registries and parser
/// state are never shared between resolutions.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use opter::{ConfigBuilder, OptionMap, OptionSpec, OptionType};
///
/// let options = OptionMap::new()
///     .with("count", OptionSpec::new().character('c').argument("n").option_type(OptionType::Number).default_value("10"))
///     .with("verbose", OptionSpec::new());
/// let env = HashMap::from([("verbose".to_owned(), "true".to_owned())]);
///
/// let config = ConfigBuilder::new()
///     .options(options)
///     .version("0.1.0")
///     .args(["app", "-c", "3"])
///     .env(env)
///     .without_config_file()
///     .resolve()?;
///
/// assert_eq!(config.get_number("count"), Some(3.0));
/// assert_eq!(config.get_str("verbose"), Some("true"));
/// # Ok::<_, opter::OpterError>(())
/// ```
#[derive(Debug)]
#[must_use]
pub struct ConfigBuilder<E = ProcessEnv, P = ClapFlagParser> {
    options: Option<OptionMap>,
    version: Option<String>,
    args: Option<Vec<OsString>>,
    env: E,
    parser: P,
    config_file: ConfigFileSource,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Creates a builder with the process defaults.
    pub fn new() -> Self {
        Self {
            options: None,
            version: None,
            args: None,
            env: ProcessEnv,
            parser: ClapFlagParser::default(),
            config_file: ConfigFileSource::default(),
        }
    }
}

impl<E, P> ConfigBuilder<E, P> {
    /// Sets the option map to resolve.
    pub fn options(mut self, options: OptionMap) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the application version reported by `--version`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Overrides the raw arguments, program name first.
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Chooses where the file layer comes from.
    pub fn config_file(mut self, source: ConfigFileSource) -> Self {
        self.config_file = source;
        self
    }

    /// Reads the file layer from `path` instead of discovering it.
    pub fn config_path(self, path: impl Into<Utf8PathBuf>) -> Self {
        self.config_file(ConfigFileSource::Path(path.into()))
    }

    /// Uses already-parsed content as the file layer.
    pub fn config_value(self, value: Value) -> Self {
        self.config_file(ConfigFileSource::Value(value))
    }

    /// Disables the file layer.
    pub fn without_config_file(self) -> Self {
        self.config_file(ConfigFileSource::None)
    }

    /// Replaces the environment source.
    pub fn env<E2: EnvironmentSource>(self, env: E2) -> ConfigBuilder<E2, P> {
        ConfigBuilder {
            options: self.options,
            version: self.version,
            args: self.args,
            env,
            parser: self.parser,
            config_file: self.config_file,
        }
    }

    /// Replaces the argument parser.
    pub fn parser<P2: FlagParser>(self, parser: P2) -> ConfigBuilder<E, P2> {
        ConfigBuilder {
            options: self.options,
            version: self.version,
            args: self.args,
            env: self.env,
            parser,
            config_file: self.config_file,
        }
    }
}

impl<E: EnvironmentSource, P: FlagParser> ConfigBuilder<E, P> {
    /// Runs the resolution.
    ///
    /// # Errors
    ///
    /// - [`OpterError::MissingArguments`] when no option map or no
    ///   (non-blank) version was supplied;
    /// - [`OpterError::DuplicateCharacter`], [`OpterError::InvalidCharacter`]
    ///   or [`OpterError::ArgumentRequiredForType`] from validation, before
    ///   any argument is parsed;
    /// - [`OpterError::ExhaustedCharacterSpace`] while compiling flags;
    /// - [`OpterError::CliParsing`] when the parser rejects the arguments or
    ///   displays help/version;
    /// - [`OpterError::Coercion`] or [`OpterError::RequiredOptionMissing`]
    ///   while resolving values.
    pub fn resolve(self) -> OpterResult<ResolvedConfig> {
        let Self {
            options: declared_options,
            version: declared_version,
            args,
            env,
            mut parser,
            config_file,
        } = self;
        let options = declared_options.ok_or(OpterError::MissingArguments {
            argument: "options",
        })?;
        let version = declared_version
            .filter(|version| !version.trim().is_empty())
            .ok_or(OpterError::MissingArguments {
                argument: "version",
            })?;

        let mut stage = Stage::Init;
        stage.advance(Stage::Validating);
        let mut registry = stages::validate(&options)?;

        stage.advance(Stage::Compiling);
        parser.register_version(&version);
        let flags = stages::compile(&options, &mut registry)?;
        for flag in &flags {
            parser.register(flag);
        }

        stage.advance(Stage::ExternalParse);
        parser.parse(args.unwrap_or_else(|| std::env::args_os().collect()))?;

        stage.advance(Stage::Resolving);
        let file = config_file.load();
        let (tree, provenance) = stages::resolve_values(&options, &parser, &env, file.as_ref())?;

        stage.advance(Stage::Done);
        Ok(ResolvedConfig::new(tree, provenance, flags))
    }
}

/// Resolves `options` against the process arguments, the process environment
/// and `opter.json` next to the running executable.
///
/// # Errors
///
/// See [`ConfigBuilder::resolve`].
pub fn resolve(options: OptionMap, version: &str) -> OpterResult<ResolvedConfig> {
    ConfigBuilder::new().options(options).version(version).resolve()
}

#[cfg(test)]
mod tests;
