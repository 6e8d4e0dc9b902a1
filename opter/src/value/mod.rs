//! Values stored in the resolved configuration tree.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// Nested mapping of configuration values.
pub type ConfigTable = BTreeMap<String, ConfigValue>;

/// A resolved configuration value.
///
/// Unlike [`serde_json::Value`], numbers are plain `f64` (so `NaN` survives
/// coercion) and dates are first-class.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// Explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value, possibly `NaN`.
    Number(f64),
    /// Text value.
    String(String),
    /// A valid point in time.
    Date(DateTime<Utc>),
    /// A date that could not be constructed from its input.
    InvalidDate,
    /// Ordered list of values.
    Array(Vec<Self>),
    /// Nested mapping.
    Table(ConfigTable),
}

impl Default for ConfigValue {
    fn default() -> Self {
        Self::Table(ConfigTable::new())
    }
}

impl ConfigValue {
    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the date, if this is a valid one.
    #[must_use]
    pub const fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the nested mapping, if this is one.
    #[must_use]
    pub const fn as_table(&self) -> Option<&ConfigTable> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Returns `true` for [`ConfigValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value as JSON.
    ///
    /// Dates become RFC 3339 strings with millisecond precision; invalid
    /// dates and non-finite numbers become `null`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null | Self::InvalidDate => Value::Null,
            Self::Bool(value) => Value::Bool(*value),
            Self::Number(value) => number_to_json(*value),
            Self::String(value) => Value::String(value.clone()),
            Self::Date(value) => Value::String(format_date(value)),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Table(table) => Value::Object(
                table
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Largest magnitude at which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole numbers render without a fractional part, like `10` rather than
/// `10.0`.
fn whole_number(value: f64) -> Option<i64> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "guarded by the fract and safe-integer checks"
    )]
    let whole = (value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER).then(|| value as i64);
    whole
}

fn number_to_json(value: f64) -> Value {
    whole_number(value).map_or_else(
        || serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number),
        Value::from,
    )
}

fn format_date(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number.as_f64().unwrap_or(f64::NAN)),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Table(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for ConfigValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null | Self::InvalidDate => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(value) => match whole_number(*value) {
                Some(whole) => serializer.serialize_i64(whole),
                None if value.is_finite() => serializer.serialize_f64(*value),
                None => serializer.serialize_unit(),
            },
            Self::String(value) => serializer.serialize_str(value),
            Self::Date(value) => serializer.serialize_str(&format_date(value)),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Table(table) => {
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (key, value) in table {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
