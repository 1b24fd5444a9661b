use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::util::is_safe_integer;

/// A dynamically typed value submitted for classification.
///
/// `Value` covers the same shapes as JSON, plus a distinct [Value::Undefined] sentinel so that
/// "absent" and "uninitialized" inputs stay distinguishable.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Stores a string value.
    String(String),
    /// Stores an array of values.
    Array(Vec<Value>),
    /// Stores a number.
    Number(f64),
    /// Stores a boolean.
    Bool(bool),
    /// Stores a map of values.
    Object(HashMap<String, Value>),
    /// Stores a null value.
    Null,
    /// Stores an uninitialized value.
    ///
    /// JSON has no counterpart, so this serializes as null and is never produced by
    /// deserialization.
    Undefined,
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(i as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(f)
    }
}

impl<T> From<Vec<T>> for Value
where
    Value: From<T>,
{
    fn from(v: Vec<T>) -> Value {
        v.into_iter().collect()
    }
}

impl<S, T> From<HashMap<S, T>> for Value
where
    String: From<S>,
    Value: From<T>,
{
    fn from(hashmap: HashMap<S, T>) -> Value {
        hashmap.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Value
where
    Value: From<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Value::from).collect())
    }
}

impl<S, T> FromIterator<(S, T)> for Value
where
    String: From<S>,
    Value: From<T>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match v {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => match n.as_f64() {
                Some(float) => Value::Number(float),
                None => {
                    warn!("could not represent number '{}' as f64, keeping its string form", n);
                    Value::String(n.to_string())
                }
            },
            Json::String(s) => Value::String(s.clone()),
            Json::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            Json::Object(obj) => {
                Value::Object(obj.iter().map(|(k, v)| (k.into(), v.into())).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from(&v)
    }
}

impl Value {
    /// Returns None unless self is a String. It will not convert.
    ///
    /// This is the refinement companion of [crate::is_useful_string]: whenever that predicate
    /// returns true, this accessor returns Some.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the wrapped value as a float for numeric types, and None otherwise.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Number(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns None unless self is a bool. It will not convert.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the wrapped number as an i64 if it is integral and small enough for f64 to
    /// retain integer precision, and None otherwise.
    ///
    /// The refinement companion of [crate::is_useful_int]: the two always agree.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Number(f) if is_safe_integer(*f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Returns true for the two "no value" sentinels, [Value::Null] and [Value::Undefined].
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }
}

#[cfg(test)]
pub(crate) mod proptest_generators {
    use super::Value;
    use proptest::collection::{hash_map, vec};
    use proptest::prelude::*;

    // Leaf strings mix arbitrary text with digit-and-period runs so the string-shape
    // predicates see both matching and non-matching inputs.
    fn any_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            Just(Value::Undefined),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(Value::Number),
            prop_oneof![".*", "[0-9.]{1,10}"].prop_map(Value::String),
        ]
    }

    /// Generate any value: nested arrays and objects, non-finite numbers, and both nil
    /// sentinels included.
    pub(crate) fn any_value() -> impl Strategy<Value = Value> {
        any_leaf().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                vec(inner.clone(), 0..4).prop_map(Value::Array),
                hash_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Object),
            ]
        })
    }
}
