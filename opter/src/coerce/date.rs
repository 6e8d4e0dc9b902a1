//! Date coercion.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::value::ConfigValue;

/// Builds a date from a timestamp or a date string.
///
/// Strings made only of ASCII digits are millisecond timestamps. Other
/// strings are tried as RFC 3339, RFC 2822, a bare `YYYY-MM-DD` date and a
/// zone-less `YYYY-MM-DDTHH:MM:SS[.fff]`; the latter two are read as UTC.
pub(super) fn to_date(raw: &Value) -> ConfigValue {
    let parsed = match raw {
        Value::Number(number) => from_number(number),
        Value::String(text) if is_timestamp(text) => {
            text.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
        }
        Value::String(text) => parse_date(text.trim()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    parsed.map_or(ConfigValue::InvalidDate, ConfigValue::Date)
}

fn is_timestamp(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

fn from_number(number: &serde_json::Number) -> Option<DateTime<Utc>> {
    let millis = match number.as_i64() {
        Some(millis) => millis,
        None => truncate_millis(number.as_f64()?)?,
    };
    DateTime::from_timestamp_millis(millis)
}

fn truncate_millis(value: f64) -> Option<i64> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "timestamps drop fractional milliseconds"
    )]
    let millis = value.is_finite().then(|| value.trunc() as i64);
    millis
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
