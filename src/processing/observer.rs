use std::fmt;
use std::sync::Arc;

/// Events emitted by a [`super::Stream`] that has an observer attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A stream was built from decoded JSON text.
    Decoded { pairs: usize },
    /// A mutating operation committed a new collection.
    Transformed {
        operation: &'static str,
        input_pairs: usize,
        output_pairs: usize,
    },
    /// `chunked` split the stream into groups.
    Chunked { size: usize, groups: usize },
    /// `partition` split the stream into two maps.
    Partitioned { first: usize, second: usize },
    /// A predicate returned a non-boolean; the operation was aborted.
    PredicateViolated { operation: &'static str, key: String },
}

impl fmt::Display for StreamEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decoded { pairs } => write!(f, "decoded pairs={pairs}"),
            Self::Transformed {
                operation,
                input_pairs,
                output_pairs,
            } => write!(f, "{operation} in={input_pairs} out={output_pairs}"),
            Self::Chunked { size, groups } => write!(f, "chunked size={size} groups={groups}"),
            Self::Partitioned { first, second } => {
                write!(f, "partition first={first} second={second}")
            }
            Self::PredicateViolated { operation, key } => {
                write!(f, "{operation} aborted: non-boolean predicate result at key '{key}'")
            }
        }
    }
}

/// Observer hook for stream events.
///
/// Implementors can record metrics or write logs. Callbacks run synchronously on the calling
/// thread, after the operation has committed (or aborted).
pub trait StreamObserver: Send + Sync {
    fn on_event(&self, event: &StreamEvent);
}

/// Logs stream events to stderr.
#[derive(Debug, Default)]
pub struct StdErrStreamObserver;

impl StreamObserver for StdErrStreamObserver {
    fn on_event(&self, event: &StreamEvent) {
        match event {
            StreamEvent::PredicateViolated { .. } => eprintln!("[stream][error] {event}"),
            _ => eprintln!("[stream] {event}"),
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeStreamObserver {
    observers: Vec<Arc<dyn StreamObserver>>,
}

impl CompositeStreamObserver {
    pub fn new(observers: Vec<Arc<dyn StreamObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeStreamObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeStreamObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl StreamObserver for CompositeStreamObserver {
    fn on_event(&self, event: &StreamEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}
