//! Conversion of resolved raw values into declared semantic types.
//!
//! | type    | rule                                                           |
//! |---------|----------------------------------------------------------------|
//! | Boolean | `true` iff the raw value is `true` or the string `"true"`       |
//! | Number  | numeric parse; empty or non-numeric input becomes `NaN`         |
//! | Date    | all-digit strings are millisecond timestamps, else date strings |
//! | Object  | mappings and arrays pass through, strings are parsed as JSON    |
//! | String  | textual representation; `null` and absence pass through        |
//!
//! Without a declared type the raw value passes through unchanged.

mod date;
mod error;

pub use error::CoercionError;

use serde_json::Value;

use crate::option::OptionType;
use crate::value::ConfigValue;

/// Coerces `raw` into `option_type`.
///
/// `None` means no source supplied a value. Boolean, Number and Date always
/// produce a value (`false`, `NaN` and an invalid date respectively), while
/// String, Object and untyped options keep the absence.
///
/// # Errors
///
/// Returns [`CoercionError`] when an Object-typed value is neither a mapping,
/// an array, nor a string holding valid JSON.
///
/// # Examples
///
/// ```
/// use opter::coerce::coerce;
/// use opter::{ConfigValue, OptionType};
/// use serde_json::json;
///
/// let number = coerce(Some(json!("10")), Some(OptionType::Number))?;
/// assert_eq!(number, Some(ConfigValue::Number(10.0)));
/// # Ok::<_, opter::coerce::CoercionError>(())
/// ```
pub fn coerce(
    raw: Option<Value>,
    option_type: Option<OptionType>,
) -> Result<Option<ConfigValue>, CoercionError> {
    let Some(target) = option_type else {
        return Ok(raw.map(ConfigValue::from));
    };
    let coerced = match target {
        OptionType::Boolean => Some(ConfigValue::Bool(to_bool(raw.as_ref()))),
        OptionType::Number => Some(ConfigValue::Number(raw.as_ref().map_or(f64::NAN, to_number))),
        OptionType::Date => Some(raw.as_ref().map_or(ConfigValue::InvalidDate, date::to_date)),
        OptionType::Object => raw.map(to_object).transpose()?,
        OptionType::String => raw.map(to_text),
    };
    Ok(coerced)
}

fn to_bool(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text == "true",
        _ => false,
    }
}

fn to_number(raw: &Value) -> f64 {
    match raw {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => parse_number(text),
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Decimal literals and the exact spellings `Infinity`, `+Infinity` and
/// `-Infinity`; `inf`, `nan` and friends are not numbers here.
fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn to_object(raw: Value) -> Result<ConfigValue, CoercionError> {
    match raw {
        Value::Object(_) | Value::Array(_) => Ok(ConfigValue::from(raw)),
        Value::String(text) => serde_json::from_str::<Value>(&text)
            .map(ConfigValue::from)
            .map_err(|source| CoercionError::InvalidJson { text, source }),
        other => Err(CoercionError::NotStructured {
            found: kind_of(&other),
        }),
    }
}

fn to_text(raw: Value) -> ConfigValue {
    match raw {
        Value::Null => ConfigValue::Null,
        Value::String(text) => ConfigValue::String(text),
        Value::Bool(flag) => ConfigValue::String(flag.to_string()),
        Value::Number(number) => ConfigValue::String(number.to_string()),
        structured @ (Value::Array(_) | Value::Object(_)) => {
            ConfigValue::String(structured.to_string())
        }
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
