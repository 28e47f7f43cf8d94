//! Dynamically typed property and vertex values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// The named, typed attribute collection carried by an element.
///
/// Keys are unique; iteration follows insertion order, which is also the
/// order the JSON codec emits.
pub type Properties = IndexMap<String, Value>;

/// A dynamically typed value as supplied by the graph engine.
///
/// Vertex ids and property values are not constrained to a single native
/// type, so both are modelled with this enum. Every variant except a
/// non-finite float has an exact JSON representation; serialising a
/// non-finite float is an error rather than a silent substitution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Properties),
}

impl Value {
    /// Return the inner string, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Return the inner boolean, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Return the inner integer, if this is an integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Return the inner float, if this is a float value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(number) => Some(*number),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(flag) => serializer.serialize_bool(*flag),
            Value::Integer(number) => serializer.serialize_i64(*number),
            Value::Float(number) => {
                if number.is_finite() {
                    serializer.serialize_f64(*number)
                } else {
                    Err(serde::ser::Error::custom(format!(
                        "float value {number} has no JSON representation"
                    )))
                }
            }
            Value::String(text) => serializer.serialize_str(text),
            Value::List(items) => items.serialize(serializer),
            Value::Map(entries) => entries.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Boolean(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Integer(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}
