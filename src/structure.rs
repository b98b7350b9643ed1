//! Flat schema validation.
//!
//! A [`Struct`] is built once from a field-name → type-name schema and then checks any number of
//! candidate maps against it. Only the scalar types in [`DataType`] are recognised; nested
//! structure is not validated.
//!
//! ```rust
//! use keyed_stream::structure::Struct;
//! use keyed_stream::types::{OrderedMap, Value};
//!
//! # fn main() -> keyed_stream::StreamResult<()> {
//! let person = Struct::from_pairs([("name", "string"), ("age", "integer")])?;
//!
//! let mut candidate = OrderedMap::new();
//! candidate.insert("name".to_string(), Value::from("Jamie"));
//! candidate.insert("age".to_string(), Value::from(29));
//! assert!(person.validate(&candidate));
//!
//! candidate.insert("age".to_string(), Value::from("29"));
//! assert!(!person.validate(&candidate));
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::error::{StreamError, StreamResult};
use crate::processing::{self, Stream};
use crate::types::{DataType, OrderedMap, Value};

/// Why a candidate failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    /// The candidate has no value for a schema field.
    MissingField { field: String },
    /// The candidate's value is not an instance of the declared type.
    TypeMismatch {
        field: String,
        expected: DataType,
        found: &'static str,
    },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field '{field}'"),
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "field '{field}' expected {expected}, found {found}"),
        }
    }
}

/// An immutable flat schema: an ordered map from field name to [`DataType`].
///
/// Type names are resolved against the fixed registry once, at construction; `validate` only
/// reads. A `Struct` is `Send + Sync` and can be shared between threads for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    fields: OrderedMap<DataType>,
}

impl Struct {
    /// Build a struct from a field-name → type-name schema.
    ///
    /// # Errors
    ///
    /// - [`StreamError::EmptySchema`] if `data_map` has no entries.
    /// - [`StreamError::UnknownType`] for the first field (in schema order) whose type name is not
    ///   one of `boolean`, `integer`, `number`, `string`.
    pub fn new(data_map: OrderedMap<String>) -> StreamResult<Self> {
        if data_map.is_empty() {
            return Err(StreamError::EmptySchema);
        }

        let fields = data_map
            .into_iter()
            .map(|(field, type_name)| match DataType::from_name(&type_name) {
                Some(t) => Ok((field, t)),
                None => Err(StreamError::UnknownType { field, type_name }),
            })
            .collect::<StreamResult<OrderedMap<DataType>>>()?;

        Ok(Self { fields })
    }

    /// Build a struct from `(field, type name)` pairs.
    pub fn from_pairs<I, K, T>(pairs: I) -> StreamResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(k, t)| (k.into(), t.into())).collect())
    }

    /// Build a struct from a JSON object of type names, e.g. `{"name":"string"}`.
    ///
    /// A field whose type is not a JSON string is reported as [`StreamError::UnknownType`].
    pub fn from_json(text: &str) -> StreamResult<Self> {
        let schema: Stream<serde_json::Value> = Stream::from_json(text)?;
        let data_map = schema
            .into_iter()
            .map(|(field, t)| match t {
                serde_json::Value::String(type_name) => Ok((field, type_name)),
                other => Err(StreamError::UnknownType {
                    field,
                    type_name: other.to_string(),
                }),
            })
            .collect::<StreamResult<OrderedMap<String>>>()?;
        Self::new(data_map)
    }

    /// `true` if `candidate` has every schema field with a value of the declared type.
    ///
    /// Fields are checked in schema order and checking stops at the first failure. Extra keys in
    /// `candidate` are ignored.
    pub fn validate(&self, candidate: &OrderedMap<Value>) -> bool {
        processing::all(&self.fields, |field, expected| {
            candidate.get(field).is_some_and(|v| expected.matches(v))
        })
        .unwrap_or(false)
    }

    /// [`Self::validate`] against the pairs of a stream.
    pub fn validate_stream(&self, candidate: &Stream<Value>) -> bool {
        self.validate(candidate.as_map())
    }

    /// The first violation in schema order, or `None` exactly when [`Self::validate`] is `true`.
    pub fn explain(&self, candidate: &OrderedMap<Value>) -> Option<SchemaViolation> {
        self.fields.iter().find_map(|(field, expected)| match candidate.get(field) {
            None => Some(SchemaViolation::MissingField {
                field: field.clone(),
            }),
            Some(v) if !expected.matches(v) => Some(SchemaViolation::TypeMismatch {
                field: field.clone(),
                expected: *expected,
                found: v.kind(),
            }),
            Some(_) => None,
        })
    }

    /// Schema fields and their types, in declaration order.
    pub fn fields(&self) -> &OrderedMap<DataType> {
        &self.fields
    }

    /// Number of schema fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` for a constructed struct; empty schemas are rejected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared type of `field`, if it is part of the schema.
    pub fn field_type(&self, field: &str) -> Option<DataType> {
        self.fields.get(field).copied()
    }
}
