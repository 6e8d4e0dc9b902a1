//! Argument-parsing collaborators.
//!
//! The resolver never tokenizes argv itself. It registers compiled flags with
//! a [`FlagParser`], asks it to parse once, and then reads back the values of
//! flags that were actually given on the command line.

mod clap_parser;

pub use clap_parser::ClapFlagParser;

use std::ffi::OsString;

use serde_json::Value;

use crate::error::OpterResult;
use crate::flag::CompiledFlag;

/// Contract for the external argument parser.
pub trait FlagParser {
    /// Records the application version shown by `-V/--version`.
    fn register_version(&mut self, version: &str);

    /// Registers one compiled flag.
    fn register(&mut self, flag: &CompiledFlag);

    /// Parses the raw process arguments, program name first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OpterError::CliParsing`] when the arguments are
    /// rejected or a help/version display was requested.
    fn parse(&mut self, args: Vec<OsString>) -> OpterResult<()>;

    /// Returns the value supplied on the command line for `option`.
    ///
    /// `None` means the flag was not given; parser-side defaults never count
    /// as supplied. Boolean flags yield `true` when present.
    fn value(&self, option: &str) -> Option<Value>;
}

impl<P: FlagParser + ?Sized> FlagParser for &mut P {
    fn register_version(&mut self, version: &str) {
        (**self).register_version(version);
    }

    fn register(&mut self, flag: &CompiledFlag) {
        (**self).register(flag);
    }

    fn parse(&mut self, args: Vec<OsString>) -> OpterResult<()> {
        (**self).parse(args)
    }

    fn value(&self, option: &str) -> Option<Value> {
        (**self).value(option)
    }
}
