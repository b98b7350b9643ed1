//! Key/value pipelines.
//!
//! [`Stream`] owns one [`crate::types::OrderedMap`] and exposes query, transform and aggregation
//! operations over it. Every transform is eager: the full result is materialized before it
//! replaces the owned map.
//!
//! The operations are also available as free functions over a borrowed map, which never mutate
//! their input:
//!
//! - [`filter()`], [`reject()`], [`partition()`]: selection by predicate
//! - [`all()`], [`any()`], [`none()`]: short-circuiting predicate queries
//! - [`map()`]: value mapping
//! - [`fold()`], [`reduce()`]: left-to-right accumulation
//! - [`chunked()`]: fixed-size grouping
//!
//! Every predicate receives `(key, value)` and must return a boolean (see [`Verdict`]).
//!
//! ## Example: reject → filter → map
//!
//! ```rust
//! use keyed_stream::processing::Stream;
//! use keyed_stream::types::Value;
//!
//! let mut s: Stream = [
//!     ("name", Value::from("Jamie")),
//!     ("age", Value::from(29)),
//!     ("lang", Value::List(vec![Value::from("PHP"), Value::from("Kotlin")])),
//! ]
//! .into_iter()
//! .collect();
//!
//! s.reject(|k, _| k == "age")
//!     .unwrap()
//!     .filter(|_, v| *v == Value::from("Jamie"))
//!     .unwrap()
//!     .map(|k, v| Value::from(format!("k={k}, v={v}")));
//!
//! assert_eq!(*s.get("name").unwrap(), Value::from("k=name, v=Jamie"));
//! assert_eq!(s.len(), 1);
//! ```
//!
//! ## Example: chunked and partition
//!
//! ```rust
//! use keyed_stream::processing::Stream;
//!
//! let s: Stream<i64> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
//!
//! let groups = s.chunked(2).unwrap();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[1].len(), 1);
//!
//! let (odd, even) = s.partition(|_, v| v % 2 == 1).unwrap().into_parts();
//! assert_eq!(odd.keys().collect::<Vec<_>>(), vec!["a", "c"]);
//! assert_eq!(even.keys().collect::<Vec<_>>(), vec!["b"]);
//! ```

pub mod chunk;
pub mod cursor;
pub mod filter;
pub mod map;
pub mod observer;
pub mod options;
pub mod predicate;
pub mod reduce;
pub mod stream;

pub use chunk::chunked;
pub use cursor::Cursor;
pub use filter::{all, any, filter, none, partition, reject};
pub use map::map;
pub use observer::{CompositeStreamObserver, StdErrStreamObserver, StreamEvent, StreamObserver};
pub use options::{JsonFormat, StreamOptions};
pub use predicate::Verdict;
pub use reduce::{fold, reduce};
pub use stream::Stream;
