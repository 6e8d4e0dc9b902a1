//! The immutable result of a resolution.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{OpterError, OpterResult};
use crate::flag::CompiledFlag;
use crate::path;
use crate::resolve::Provenance;
use crate::value::ConfigValue;

/// Nested configuration tree produced by a resolution.
///
/// Values are addressed by the same dotted paths used as option names.
/// Options that resolved to nothing are not present in the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    tree: ConfigValue,
    provenance: BTreeMap<String, Provenance>,
    flags: Vec<CompiledFlag>,
}

impl ResolvedConfig {
    pub(crate) const fn new(
        tree: ConfigValue,
        provenance: BTreeMap<String, Provenance>,
        flags: Vec<CompiledFlag>,
    ) -> Self {
        Self {
            tree,
            provenance,
            flags,
        }
    }

    /// Returns the value at the dotted `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        path::get(&self.tree, path)
    }

    /// Returns the boolean at `path`.
    #[must_use]
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(ConfigValue::as_bool)
    }

    /// Returns the number at `path`.
    #[must_use]
    pub fn get_number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(ConfigValue::as_f64)
    }

    /// Returns the string at `path`.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(ConfigValue::as_str)
    }

    /// Returns the valid date at `path`.
    #[must_use]
    pub fn get_date(&self, path: &str) -> Option<&DateTime<Utc>> {
        self.get(path).and_then(ConfigValue::as_date)
    }

    /// Returns which source supplied `option`, if any did.
    #[must_use]
    pub fn provenance(&self, option: &str) -> Option<Provenance> {
        self.provenance.get(option).copied()
    }

    /// Returns the compiled flags, in option order.
    #[must_use]
    pub fn flags(&self) -> &[CompiledFlag] {
        &self.flags
    }

    /// Returns the flag compiled for `option`.
    #[must_use]
    pub fn flag(&self, option: &str) -> Option<&CompiledFlag> {
        self.flags.iter().find(|flag| flag.option == option)
    }

    /// Returns the root of the tree.
    #[must_use]
    pub const fn tree(&self) -> &ConfigValue {
        &self.tree
    }

    /// Consumes the result, returning the tree.
    #[must_use]
    pub fn into_tree(self) -> ConfigValue {
        self.tree
    }

    /// Renders the tree as JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        self.tree.to_json()
    }

    /// Deserializes the tree into `T`.
    ///
    /// Dates are presented as RFC 3339 strings and `NaN` as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`OpterError::Extraction`] when the tree does not match `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use opter::{ConfigBuilder, OptionMap, OptionSpec, OptionType};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Settings {
    ///     count: u32,
    /// }
    ///
    /// let options = OptionMap::new().with(
    ///     "count",
    ///     OptionSpec::new()
    ///         .argument("n")
    ///         .option_type(OptionType::Number)
    ///         .default_value("10"),
    /// );
    /// let resolved = ConfigBuilder::new()
    ///     .options(options)
    ///     .version("1.0.0")
    ///     .args(["app"])
    ///     .env(std::collections::HashMap::<String, String>::new())
    ///     .without_config_file()
    ///     .resolve()?;
    /// let settings: Settings = resolved.extract()?;
    /// assert_eq!(settings.count, 10);
    /// # Ok::<_, opter::OpterError>(())
    /// ```
    pub fn extract<T: DeserializeOwned>(&self) -> OpterResult<T> {
        serde_json::from_value(self.to_json()).map_err(|source| OpterError::Extraction { source })
    }
}
