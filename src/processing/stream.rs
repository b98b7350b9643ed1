//! The chainable [`Stream`] over an [`OrderedMap`].

use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StreamError, StreamResult};
use crate::types::{OrderedMap, Pair, Value};

use super::cursor::Cursor;
use super::map::map_in_place;
use super::observer::{StreamEvent, StreamObserver};
use super::options::{JsonFormat, StreamOptions};
use super::predicate::{verdicts, Verdict};
use super::{chunk, filter, reduce};

/// A chainable pipeline that owns exactly one [`OrderedMap`].
///
/// Mutating operations (`add`, `filter`, `reject`, `map`, `on_each`) replace the owned map and
/// return `&mut Self` so calls chain; fallible ones return `StreamResult<&mut Self>`, so a chain
/// reads `stream.reject(p)?.filter(q)?`. A failed operation leaves the owned map exactly as it
/// was. Query operations (`all`, `fold`, `chunked`, ...) never mutate.
///
/// ```rust
/// use keyed_stream::{Stream, Value};
///
/// # fn main() -> keyed_stream::StreamResult<()> {
/// let mut s: Stream = Stream::from_json(r#"{"name":"Jamie","age":29,"lang":["Rust"]}"#)?;
/// s.reject(|k, _| k == "age")?
///     .filter(|_, v| v.as_str() == Some("Jamie"))?
///     .map(|k, v| Value::from(format!("k={k}, v={v}")));
///
/// assert_eq!(s.to_json()?, r#"{"name":"k=name, v=Jamie"}"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Stream<V = Value> {
    data: OrderedMap<V>,
    options: StreamOptions,
}

impl<V> Stream<V> {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::with_options(OrderedMap::new(), StreamOptions::default())
    }

    /// Create a stream over `data` with explicit options.
    pub fn with_options(data: OrderedMap<V>, options: StreamOptions) -> Self {
        Self { data, options }
    }

    /// Attach an observer for stream events.
    pub fn with_observer(mut self, observer: Arc<dyn StreamObserver>) -> Self {
        self.options.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &StreamOptions {
        &self.options
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Pairs in iteration order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.data.iter()
    }

    /// Append `key`, or overwrite its value in place if it already exists.
    pub fn add(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        let before = self.data.len();
        self.data.insert(key.into(), value);
        self.transformed("add", before);
        self
    }

    /// Indexed write; identical to [`Self::add`].
    pub fn set(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        self.add(key, value)
    }

    /// Indexed read.
    ///
    /// # Errors
    ///
    /// [`StreamError::KeyNotFound`] if `key` is absent.
    pub fn get(&self, key: &str) -> StreamResult<&V> {
        self.data.get(key).ok_or_else(|| StreamError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// `true` if every pair satisfies `predicate`; stops at the first pair that does not.
    pub fn all<R, F>(&self, predicate: F) -> StreamResult<bool>
    where
        F: FnMut(&str, &V) -> R,
        R: Verdict,
    {
        self.report(filter::all(&self.data, predicate))
    }

    /// `true` at the first pair that satisfies `predicate`.
    pub fn any<R, F>(&self, predicate: F) -> StreamResult<bool>
    where
        F: FnMut(&str, &V) -> R,
        R: Verdict,
    {
        self.report(filter::any(&self.data, predicate))
    }

    /// `any` without a predicate: `true` iff the stream has at least one pair.
    pub fn has_pairs(&self) -> bool {
        !self.data.is_empty()
    }

    /// `true` if no pair satisfies `predicate`.
    pub fn none<R, F>(&self, predicate: F) -> StreamResult<bool>
    where
        F: FnMut(&str, &V) -> R,
        R: Verdict,
    {
        self.report(filter::none(&self.data, predicate))
    }

    /// Keep only the pairs for which `predicate` is `true`.
    pub fn filter<R, F>(&mut self, predicate: F) -> StreamResult<&mut Self>
    where
        F: FnMut(&str, &V) -> R,
        R: Verdict,
    {
        self.retain_where("filter", predicate, true)
    }

    /// Drop the pairs for which `predicate` is `true`.
    pub fn reject<R, F>(&mut self, predicate: F) -> StreamResult<&mut Self>
    where
        F: FnMut(&str, &V) -> R,
        R: Verdict,
    {
        self.retain_where("reject", predicate, false)
    }

    // Every verdict is collected before the map is touched, so a bad predicate result
    // aborts without a partial commit.
    fn retain_where<R, F>(
        &mut self,
        operation: &'static str,
        predicate: F,
        keep: bool,
    ) -> StreamResult<&mut Self>
    where
        F: FnMut(&str, &V) -> R,
        R: Verdict,
    {
        let flags = self.report(verdicts(operation, &self.data, predicate))?;
        let before = self.data.len();
        let mut flags = flags.into_iter();
        self.data.retain(|_, _| flags.next() == Some(keep));
        self.transformed(operation, before);
        Ok(self)
    }

    /// Replace every value with `mapper(key, value)`; keys and order are unchanged.
    pub fn map<F>(&mut self, mapper: F) -> &mut Self
    where
        F: FnMut(&str, &V) -> V,
    {
        map_in_place(&mut self.data, mapper);
        self.transformed("map", self.data.len());
        self
    }

    /// Call `action` for every pair, in order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in &self.data {
            action(k.as_str(), v);
        }
    }

    /// Like [`Self::for_each`], but returns the stream for chaining.
    pub fn on_each<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut(&str, &V),
    {
        self.for_each(action);
        self
    }

    /// Left-to-right accumulation from `initial`. See [`reduce::fold`].
    pub fn fold<A, F>(&self, initial: A, combiner: F) -> A
    where
        F: FnMut(A, &str, &V) -> A,
    {
        reduce::fold(&self.data, initial, combiner)
    }

    /// Left-to-right accumulation from an absent seed. See [`reduce::reduce`].
    pub fn reduce<A, F>(&self, combiner: F) -> Option<A>
    where
        F: FnMut(Option<A>, &str, &V) -> A,
    {
        reduce::reduce(&self.data, combiner)
    }

    /// Single-pass cursor over the values.
    pub fn as_iterable(&self) -> Cursor<'_, V> {
        Cursor::new(&self.data)
    }

    /// Borrow the owned map.
    pub fn as_map(&self) -> &OrderedMap<V> {
        &self.data
    }

    /// Consume the stream, returning the owned map.
    pub fn into_map(self) -> OrderedMap<V> {
        self.data
    }

    fn transformed(&self, operation: &'static str, input_pairs: usize) {
        self.emit(StreamEvent::Transformed {
            operation,
            input_pairs,
            output_pairs: self.data.len(),
        });
    }

    fn report<T>(&self, result: StreamResult<T>) -> StreamResult<T> {
        if let Err(StreamError::InvalidPredicateResult { operation, key }) = &result {
            self.emit(StreamEvent::PredicateViolated {
                operation: *operation,
                key: key.clone(),
            });
        }
        result
    }

    fn emit(&self, event: StreamEvent) {
        if let Some(obs) = &self.options.observer {
            obs.on_event(&event);
        }
    }
}

impl<V: Clone> Stream<V> {
    /// Split into consecutive groups of at most `size` pairs. See [`chunk::chunked`].
    pub fn chunked(&self, size: usize) -> StreamResult<Vec<OrderedMap<V>>> {
        let groups = chunk::chunked(&self.data, size)?;
        self.emit(StreamEvent::Chunked {
            size,
            groups: groups.len(),
        });
        Ok(groups)
    }

    /// Split into `(matching, non-matching)` maps without mutating the stream.
    pub fn partition<R, F>(&self, predicate: F) -> StreamResult<Pair<OrderedMap<V>, OrderedMap<V>>>
    where
        F: FnMut(&str, &V) -> R,
        R: Verdict,
    {
        let parts = self.report(filter::partition(&self.data, predicate))?;
        self.emit(StreamEvent::Partitioned {
            first: parts.first().len(),
            second: parts.second().len(),
        });
        Ok(parts)
    }

    /// Snapshot of the owned map.
    pub fn to_array(&self) -> OrderedMap<V> {
        self.data.clone()
    }

    /// Same as [`Self::to_array`].
    pub fn to_map(&self) -> OrderedMap<V> {
        self.to_array()
    }
}

impl<V: Serialize> Stream<V> {
    /// Encode the owned map as a JSON object, keys in iteration order.
    pub fn to_json(&self) -> StreamResult<String> {
        let text = match self.options.json_format {
            JsonFormat::Compact => serde_json::to_string(&self.data)?,
            JsonFormat::Pretty => serde_json::to_string_pretty(&self.data)?,
        };
        Ok(text)
    }
}

impl<V: DeserializeOwned> Stream<V> {
    /// Decode a stream from JSON text holding a flat key/value object.
    ///
    /// Key order in the text is preserved. An empty array is accepted as an empty stream. An
    /// object is always keyed by its own member names, so `{"0":"a","1":"b"}` decodes to a
    /// two-pair stream rather than being treated as positional.
    ///
    /// # Errors
    ///
    /// - [`StreamError::Json`] if `text` is not valid JSON or a value does not decode as `V`.
    /// - [`StreamError::InvalidShape`] if the text is a non-empty array or a scalar.
    pub fn from_json(text: &str) -> StreamResult<Self> {
        Self::from_json_with_options(text, StreamOptions::default())
    }

    /// [`Self::from_json`] with explicit options.
    pub fn from_json_with_options(text: &str, options: StreamOptions) -> StreamResult<Self> {
        let decoded: serde_json::Value = serde_json::from_str(text)?;
        let data: OrderedMap<V> = match decoded {
            decoded @ serde_json::Value::Object(_) => serde_json::from_value(decoded)?,
            serde_json::Value::Array(items) if items.is_empty() => OrderedMap::new(),
            other => {
                return Err(StreamError::InvalidShape {
                    found: json_kind(&other),
                });
            }
        };
        let stream = Self::with_options(data, options);
        stream.emit(StreamEvent::Decoded { pairs: stream.len() });
        Ok(stream)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl<V> Default for Stream<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for Stream<V> {
    /// Streams are equal when they hold the same pairs in the same order; options are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && self.data.iter().eq(other.data.iter())
    }
}

impl<V> From<OrderedMap<V>> for Stream<V> {
    fn from(data: OrderedMap<V>) -> Self {
        Self::with_options(data, StreamOptions::default())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Stream<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| (k.into(), v)).collect::<OrderedMap<V>>().into()
    }
}

impl<V: DeserializeOwned> FromStr for Stream<V> {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl<'a, V> IntoIterator for &'a Stream<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<V> IntoIterator for Stream<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
