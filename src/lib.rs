//! `keyed-stream` is a small library of chainable, eager pipelines over insertion-ordered
//! key/value maps, plus a flat schema validator.
//!
//! The primary type is [`processing::Stream`], which owns one [`types::OrderedMap`] and exposes
//! filter/map/reduce-style operations over it. [`structure::Struct`] checks candidate maps against
//! a field-name → type-name schema.
//!
//! ## What a stream holds
//!
//! - Keys are strings, unique within a stream. Inserting an existing key overwrites its value and
//!   keeps its position.
//! - Iteration order is insertion order, and it matters: chunking, partitioning and fold/reduce
//!   all follow it.
//! - Values can be any type. [`types::Value`] is the dynamic value used for decoded JSON and the
//!   only type a [`structure::Struct`] can check.
//!
//! ## Quick examples: build a stream
//!
//! ```rust
//! use keyed_stream::{stream, stream_from_json, OrderedMap, Value};
//!
//! # fn main() -> keyed_stream::StreamResult<()> {
//! // From a literal map.
//! let mut map = OrderedMap::new();
//! map.insert("name".to_string(), Value::from("Jamie"));
//! map.insert("age".to_string(), Value::from(29));
//! let s = stream(map);
//!
//! // From JSON text; key order is preserved.
//! let t = stream_from_json(r#"{"name":"Jamie","age":29}"#)?;
//! assert_eq!(s, t);
//!
//! let groups = t.chunked(1)?;
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].keys().collect::<Vec<_>>(), vec!["name"]);
//! # Ok(())
//! # }
//! ```
//!
//! Text that decodes to a positional array (rather than an object) is rejected with
//! [`StreamError::InvalidShape`].
//!
//! ## Quick example: validate against a schema
//!
//! ```rust
//! use keyed_stream::{stream_from_json, structure, OrderedMap};
//!
//! # fn main() -> keyed_stream::StreamResult<()> {
//! let mut schema = OrderedMap::new();
//! schema.insert("name".to_string(), "string".to_string());
//! schema.insert("age".to_string(), "integer".to_string());
//! let person = structure(schema)?;
//!
//! assert!(person.validate_stream(&stream_from_json(r#"{"name":"Jamie","age":29}"#)?));
//! assert!(!person.validate_stream(&stream_from_json(r#"{"name":"Jamie"}"#)?));
//! assert!(!person.validate_stream(&stream_from_json(r#"{"name":"Jamie","age":"29"}"#)?));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the [`processing::Stream`] type and free-function operations over maps
//! - [`structure`]: schema validation
//! - [`types`]: ordered map, dynamic value, type registry and pair types
//! - [`error`]: the error type shared by every fallible operation
//!
//! ## Threading
//!
//! Every operation runs to completion on the calling thread. A stream has a single owner and
//! performs no locking; wrap it in a mutex if it must be shared. A constructed
//! [`structure::Struct`] is immutable and can be validated against from many threads.

pub mod error;
pub mod processing;
pub mod structure;
pub mod types;

pub use error::{StreamError, StreamResult};
pub use processing::{Stream, StreamOptions};
pub use structure::Struct;
pub use types::{DataType, OrderedMap, Pair, Value};

/// `true` if `text` parses as any JSON value.
pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

/// Create a stream over a literal map.
pub fn stream<V>(data: OrderedMap<V>) -> Stream<V> {
    Stream::from(data)
}

/// Create a stream of dynamic values from JSON text holding a flat key/value object.
///
/// # Errors
///
/// See [`Stream::from_json`].
pub fn stream_from_json(text: &str) -> StreamResult<Stream<Value>> {
    Stream::from_json(text)
}

/// Create a [`Struct`] from a field-name → type-name schema.
///
/// # Errors
///
/// See [`Struct::new`].
pub fn structure(data_map: OrderedMap<String>) -> StreamResult<Struct> {
    Struct::new(data_map)
}
