use crate::error::{StreamError, StreamResult};
use crate::types::OrderedMap;

/// Single-pass cursor over a stream's values, created by [`super::Stream::as_iterable`].
///
/// The cursor borrows the stream, so the stream cannot be mutated while the cursor is alive.
#[derive(Debug, Clone)]
pub struct Cursor<'a, V> {
    data: &'a OrderedMap<V>,
    position: usize,
}

impl<'a, V> Cursor<'a, V> {
    pub(crate) fn new(data: &'a OrderedMap<V>) -> Self {
        Self { data, position: 0 }
    }

    /// `true` once the cursor has advanced past the last pair.
    pub fn is_done(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Return the next value and advance.
    ///
    /// # Errors
    ///
    /// [`StreamError::IteratorExhausted`] when called after the last pair.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> StreamResult<&'a V> {
        self.next_pair().map(|(_, v)| v)
    }

    /// Like [`Self::next`], but also returns the key.
    pub fn next_pair(&mut self) -> StreamResult<(&'a str, &'a V)> {
        let (k, v) = self
            .data
            .get_index(self.position)
            .ok_or(StreamError::IteratorExhausted)?;
        self.position += 1;
        Ok((k.as_str(), v))
    }

    /// Number of values already returned.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of values left before the cursor is done.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }
}
