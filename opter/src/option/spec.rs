//! A single option definition and its declared semantic type.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Semantic type an option's resolved value is coerced into.
///
/// Options without a declared type keep their resolved value unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
pub enum OptionType {
    /// `true` or `false`.
    Boolean,
    /// A floating-point number; unparsable input becomes `NaN`.
    Number,
    /// A point in time, from a millisecond timestamp or a date string.
    Date,
    /// A structured JSON value (mapping or array).
    Object,
    /// The textual representation of the value.
    String,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Object => "Object",
            Self::String => "String",
        };
        f.write_str(name)
    }
}

/// Definition of one resolvable option.
///
/// A missing `default_value` (`None`) is distinct from an explicit JSON
/// `null` default (`Some(Value::Null)`).
///
/// # Examples
///
/// ```
/// use opter::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new()
///     .character('c')
///     .argument("n")
///     .option_type(OptionType::Number)
///     .default_value("10")
///     .description("How many items to fetch.");
/// assert!(spec.takes_value());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionSpec {
    /// Explicit short flag character.
    #[serde(default)]
    pub character: Option<char>,
    /// Label of the flag's value; absent for boolean flags.
    #[serde(default)]
    pub argument: Option<String>,
    /// Terminal fallback value.
    #[serde(default, deserialize_with = "present")]
    pub default_value: Option<Value>,
    /// Help text for the flag.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether resolution fails when no value is found.
    #[serde(default)]
    pub required: bool,
    /// Declared semantic type.
    #[serde(default, rename = "type")]
    pub option_type: Option<OptionType>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; `#[serde(default)]`
/// covers the missing case.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl OptionSpec {
    /// Creates an optional, untyped boolean flag with no description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit short flag character.
    #[must_use]
    pub const fn character(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }

    /// Sets the value label, turning the flag into a value-taking flag.
    #[must_use]
    pub fn argument(mut self, label: impl Into<String>) -> Self {
        self.argument = Some(label.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the help description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the option as required or optional.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Declares the semantic type.
    #[must_use]
    pub const fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// Returns the argument label when one is declared and non-empty.
    #[must_use]
    pub fn argument_label(&self) -> Option<&str> {
        self.argument.as_deref().filter(|label| !label.is_empty())
    }

    /// Returns `true` when the flag takes a value on the command line.
    #[must_use]
    pub fn takes_value(&self) -> bool {
        self.argument_label().is_some()
    }
}
