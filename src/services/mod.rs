pub mod dashboard;
pub mod expense;
pub mod income;
pub mod payable;
pub mod receivable;
pub mod user;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::error::ApiError;

/// Required-field presence follows the external contract's truthiness:
/// absent, null, false, numeric zero, and the empty string all count as
/// missing.
pub(crate) fn is_missing_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

pub(crate) fn is_missing_str(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Amounts on the income/expense/payable paths arrive as JSON numbers; a
/// non-numeric value is a storage-layer failure (500), not a validation
/// rejection.
pub(crate) fn numeric_amount(value: &Value) -> Result<f64, ApiError> {
    value.as_f64().ok_or_else(|| {
        tracing::error!("Non-numeric amount reached a numeric-amount path: {}", value);
        ApiError::internal_server_error("Internal Server Error")
    })
}

/// Lenient float coercion for receivable amounts: accepts a number as-is,
/// parses the longest leading numeric prefix of a string, and yields NaN
/// for anything else. Replicates the upstream contract's `parseFloat`
/// behavior; non-numeric input is stored as NaN rather than rejected.
pub(crate) fn coerce_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float_prefix(s),
        _ => f64::NAN,
    }
}

fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut negative = false;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    // The literal "Infinity" (exact casing, as in ECMAScript) is a valid
    // prefix; "infinity" and "Inf" are not.
    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            digits += 1;
        }
        // "1." and ".5" are both valid prefixes; a bare "." is not
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Optional exponent, only consumed when at least one digit follows
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the date strings clients send: RFC 3339, a bare `YYYY-MM-DD`
/// (midnight UTC), or a naive datetime. Unparseable input is a 500, matching
/// the contract's lack of date validation.
pub(crate) fn parse_date(value: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = d.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }
    tracing::error!("Unparseable date input: {:?}", value);
    Err(ApiError::internal_server_error("Internal Server Error"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_counts_zero_and_empty_as_missing() {
        assert!(is_missing_value(None));
        assert!(is_missing_value(Some(&Value::Null)));
        assert!(is_missing_value(Some(&json!(0))));
        assert!(is_missing_value(Some(&json!(""))));
        assert!(!is_missing_value(Some(&json!(1200))));
        assert!(!is_missing_value(Some(&json!("Rent"))));
    }

    #[test]
    fn coercion_parses_string_amounts() {
        assert_eq!(coerce_amount(&json!("250.50")), 250.5);
        assert_eq!(coerce_amount(&json!(1200)), 1200.0);
        assert_eq!(coerce_amount(&json!("  3.5abc")), 3.5);
        assert_eq!(coerce_amount(&json!("-2.5")), -2.5);
        assert_eq!(coerce_amount(&json!("1e3")), 1000.0);
        // exponent without digits backtracks to the mantissa
        assert_eq!(coerce_amount(&json!("1e")), 1.0);
        assert_eq!(coerce_amount(&json!(".5")), 0.5);
    }

    #[test]
    fn coercion_recognizes_the_infinity_literal() {
        assert_eq!(coerce_amount(&json!("Infinity")), f64::INFINITY);
        assert_eq!(coerce_amount(&json!("-Infinity")), f64::NEG_INFINITY);
        assert_eq!(coerce_amount(&json!("+Infinity")), f64::INFINITY);
        assert_eq!(coerce_amount(&json!("Infinity and beyond")), f64::INFINITY);
        // case-sensitive, and no partial match
        assert!(coerce_amount(&json!("infinity")).is_nan());
        assert!(coerce_amount(&json!("Inf")).is_nan());
    }

    #[test]
    fn coercion_yields_nan_for_non_numeric() {
        assert!(coerce_amount(&json!("abc")).is_nan());
        assert!(coerce_amount(&json!("")).is_nan());
        assert!(coerce_amount(&json!(".")).is_nan());
        assert!(coerce_amount(&Value::Null).is_nan());
        assert!(coerce_amount(&json!(["x"])).is_nan());
    }

    #[test]
    fn date_only_strings_become_utc_midnight() {
        let dt = parse_date("2024-06-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-01T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_dates_keep_their_instant() {
        let dt = parse_date("2024-06-01T12:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-01T10:30:00+00:00");
    }

    #[test]
    fn bad_dates_are_internal_errors() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("").is_err());
    }
}
