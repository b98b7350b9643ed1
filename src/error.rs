use thiserror::Error;

/// Convenience result type for stream and struct operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Error type returned by [`crate::processing::Stream`] and [`crate::structure::Struct`].
///
/// Every variant is a caller or schema error; nothing here is transient, so nothing is retried.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A predicate returned something other than a boolean.
    ///
    /// The operation is aborted and the stream's stored pairs are left untouched.
    #[error("{operation}: predicate must return a boolean (key '{key}')")]
    InvalidPredicateResult { operation: &'static str, key: String },

    /// An argument is outside its accepted range (e.g. a chunk size of zero).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Decoded input is not a flat key/value object.
    #[error("invalid shape: expected a key/value object, found {found}")]
    InvalidShape { found: &'static str },

    /// Indexed access to a key that is not in the stream.
    #[error("key '{key}' does not exist in the stream")]
    KeyNotFound { key: String },

    /// A cursor was advanced after it had passed the last pair.
    #[error("cursor has reached the end of the stream")]
    IteratorExhausted,

    /// A struct schema with no fields.
    #[error("struct schema must declare at least one field")]
    EmptySchema,

    /// A struct schema declared a type outside the recognised set.
    #[error("field '{field}' declares unknown type '{type_name}'")]
    UnknownType { field: String, type_name: String },

    /// Malformed JSON text, or a value that could not be encoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
