//! Environment variable sources.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Flat name-to-string lookup consulted during resolution.
pub trait EnvironmentSource {
    /// Returns the value of `name`, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
///
/// Values that are not valid Unicode are converted lossily.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvironmentSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> EnvironmentSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvironmentSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvironmentSource + ?Sized> EnvironmentSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Derives the environment variable name for a dotted option name.
///
/// Every `.` becomes `_`; case is preserved.
///
/// # Examples
///
/// ```
/// assert_eq!(opter::env::variable_name("nested.config.value"), "nested_config_value");
/// ```
#[must_use]
pub fn variable_name(option: &str) -> String {
    option.replace('.', "_")
}

#[cfg(test)]
mod tests;
