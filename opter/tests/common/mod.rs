//! Shared helpers for integration tests.

use std::collections::HashMap;

use opter::ConfigBuilder;

/// Builds an in-memory environment from `(name, value)` pairs.
#[must_use]
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

/// A builder isolated from the process: no file layer and an empty
/// environment.
#[must_use]
pub fn isolated_builder(args: &[&str]) -> ConfigBuilder<HashMap<String, String>> {
    ConfigBuilder::new()
        .version("0.1.0")
        .args(std::iter::once("prog").chain(args.iter().copied()))
        .env(HashMap::new())
        .without_config_file()
}
