//! Core data model types.
//!
//! Every pipeline operates on an [`OrderedMap`]: an insertion-ordered map with unique string keys.
//! Values stored in a [`crate::processing::Stream`] may be any type; [`Value`] is the dynamic value
//! used when the caller does not have a concrete type in mind (and the only type a
//! [`crate::structure::Struct`] can check).

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map with unique string keys.
///
/// Inserting an existing key overwrites its value and keeps its original position.
pub type OrderedMap<V> = IndexMap<String, V>;

/// Primitive type names recognised by a [`crate::structure::Struct`] schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `"boolean"`.
    Bool,
    /// `"integer"`: 64-bit signed integer.
    Int64,
    /// `"number"`: any integer or floating point number.
    Float64,
    /// `"string"`: UTF-8 string.
    Utf8,
}

impl DataType {
    /// Every recognised type, in registry order.
    pub const ALL: [DataType; 4] = [Self::Bool, Self::Int64, Self::Float64, Self::Utf8];

    /// Look up a type by its schema name (`boolean`, `integer`, `number`, `string`).
    ///
    /// Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The schema name of this type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int64 => "integer",
            Self::Float64 => "number",
            Self::Utf8 => "string",
        }
    }

    /// Returns `true` if `value` is an instance of this type.
    ///
    /// `number` accepts both integers and floats; numeric strings are never numbers.
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_)) => true,
            (Self::Int64, Value::Int64(_)) => true,
            (Self::Float64, Value::Int64(_) | Value::Float64(_)) => true,
            (Self::Utf8, Value::Utf8(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed value.
///
/// Encodes to JSON structurally: scalars as JSON scalars, [`Value::List`] as an array and
/// [`Value::Map`] as an object (keys in insertion order).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value. Also the absence value of [`Value`].
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Positional sequence of values.
    List(Vec<Value>),
    /// Nested key/value map.
    Map(OrderedMap<Value>),
}

impl Value {
    /// Short name of the variant's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int64(_) => "integer",
            Self::Float64(_) => "float",
            Self::Utf8(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(n) => Some(*n as f64),
            Self::Float64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Scalars render bare (strings without quotes); lists and maps render as JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::Float64(n) => write!(f, "{n}"),
            Self::Utf8(s) => f.write_str(s),
            Self::List(_) | Self::Map(_) => {
                let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int64(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Utf8(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<OrderedMap<Value>> for Value {
    fn from(v: OrderedMap<Value>) -> Self {
        Self::Map(v)
    }
}

/// Immutable two-slot result holder.
///
/// Returned by [`crate::processing::Stream::partition`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    /// Split the pair into its two slots.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataType, OrderedMap, Pair, Value};

    #[test]
    fn data_type_names_round_trip_through_registry() {
        for t in DataType::ALL {
            assert_eq!(DataType::from_name(t.name()), Some(t));
        }
        assert_eq!(DataType::from_name("date"), None);
        assert_eq!(DataType::from_name("String"), None);
    }

    #[test]
    fn number_accepts_integers_but_integer_rejects_floats() {
        assert!(DataType::Float64.matches(&Value::Int64(3)));
        assert!(DataType::Float64.matches(&Value::Float64(3.5)));
        assert!(!DataType::Int64.matches(&Value::Float64(3.0)));
        assert!(!DataType::Float64.matches(&Value::from("29")));
        assert!(!DataType::Utf8.matches(&Value::Null));
    }

    #[test]
    fn value_decodes_json_structurally_and_keeps_key_order() {
        let v: Value = serde_json::from_str(r#"{"b":1,"a":[true,2.5,"x",null]}"#).unwrap();
        let Value::Map(map) = v else {
            panic!("expected map");
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map["b"], Value::Int64(1));
        assert_eq!(
            map["a"],
            Value::List(vec![
                Value::Bool(true),
                Value::Float64(2.5),
                Value::from("x"),
                Value::Null
            ])
        );
    }

    #[test]
    fn value_display_renders_scalars_bare() {
        assert_eq!(Value::from("Jamie").to_string(), "Jamie");
        assert_eq!(Value::from(29).to_string(), "29");
        assert_eq!(Value::Null.to_string(), "");

        let mut inner = OrderedMap::new();
        inner.insert("k".to_string(), Value::from(1));
        assert_eq!(Value::Map(inner).to_string(), r#"{"k":1}"#);
    }

    #[test]
    fn pair_exposes_both_slots() {
        let p = Pair::new(1, "two");
        assert_eq!(*p.first(), 1);
        assert_eq!(*p.second(), "two");
        assert_eq!(p.into_parts(), (1, "two"));
    }
}
