use lazy_static::lazy_static;
use regex::Regex;

use crate::value::Value;

lazy_static! {
    // [0-9] rather than \d: these classes are ASCII-only, while \d also matches
    // other Unicode digits.
    static ref NUMBER_STRING_REGEX: Regex = Regex::new(r"^[0-9.]+$").unwrap();
    static ref INT_STRING_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Returns true if the value is a non-empty string.
///
/// Everything else is useless: any non-string variant (including null and undefined) and the
/// empty string. When this returns true, [Value::as_str] returns Some.
pub fn is_useful_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty())
}

/// The exact negation of [is_useful_string].
pub fn is_useless_string(value: &Value) -> bool {
    !is_useful_string(value)
}

/// Returns true if the value is a finite number.
///
/// NaN and the infinities are useless, as is any non-number variant.
pub fn is_useful_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

/// The exact negation of [is_useful_number].
pub fn is_useless_number(value: &Value) -> bool {
    !is_useful_number(value)
}

/// Returns true if the value is a safe integer: a finite number with no fractional part whose
/// magnitude does not exceed 2^53 - 1.
///
/// When this returns true, [Value::as_int] returns Some.
pub fn is_useful_int(value: &Value) -> bool {
    value.as_int().is_some()
}

/// The exact negation of [is_useful_int].
pub fn is_useless_int(value: &Value) -> bool {
    !is_useful_int(value)
}

/// Returns true if the value is a string of one or more characters, each an ASCII digit or a
/// period.
///
/// This is a character-class check, not a number parser: "1.2.3" and "..." both pass, while
/// signs, exponents, and whitespace do not. Non-strings never pass, even actual numbers.
pub fn is_useful_number_string(value: &Value) -> bool {
    match value.as_str() {
        Some(s) => NUMBER_STRING_REGEX.is_match(s),
        None => false,
    }
}

/// The exact negation of [is_useful_number_string].
pub fn is_useless_number_string(value: &Value) -> bool {
    !is_useful_number_string(value)
}

/// Returns true if the value is a string of one or more ASCII digits.
///
/// No sign, no decimal point, no whitespace. Non-strings never pass, even actual numbers.
pub fn is_useful_int_string(value: &Value) -> bool {
    match value.as_str() {
        Some(s) => INT_STRING_REGEX.is_match(s),
        None => false,
    }
}

/// The exact negation of [is_useful_int_string].
pub fn is_useless_int_string(value: &Value) -> bool {
    !is_useful_int_string(value)
}

/// Combines the null and undefined checks, similar to Lodash's `isNil`.
pub fn is_nil(value: &Value) -> bool {
    value.is_nil()
}
