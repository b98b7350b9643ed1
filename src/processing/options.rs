use std::fmt;
use std::sync::Arc;

use super::observer::StreamObserver;

/// Layout of the text produced by [`super::Stream::to_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Single line, no insignificant whitespace (default).
    #[default]
    Compact,
    /// Indented, one pair per line.
    Pretty,
}

/// Options carried by a [`super::Stream`].
///
/// Use [`Default`] for common cases: no observer, compact JSON.
#[derive(Clone, Default)]
pub struct StreamOptions {
    /// Optional observer notified after each operation.
    pub observer: Option<Arc<dyn StreamObserver>>,
    /// Output layout for [`super::Stream::to_json`].
    pub json_format: JsonFormat,
}

impl fmt::Debug for StreamOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamOptions")
            .field("observer_set", &self.observer.is_some())
            .field("json_format", &self.json_format)
            .finish()
    }
}
