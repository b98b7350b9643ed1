//! Splitting an [`OrderedMap`] into consecutive fixed-size groups.

use crate::error::{StreamError, StreamResult};
use crate::types::OrderedMap;

/// Split `map` into consecutive groups of at most `size` pairs, in iteration order.
///
/// Every group except the last holds exactly `size` pairs. An empty map yields a single empty
/// group, so the result is never empty.
///
/// # Errors
///
/// [`StreamError::InvalidArgument`] if `size` is zero.
pub fn chunked<V: Clone>(map: &OrderedMap<V>, size: usize) -> StreamResult<Vec<OrderedMap<V>>> {
    if size == 0 {
        return Err(StreamError::InvalidArgument {
            message: "chunk size must be at least one".to_string(),
        });
    }

    let mut groups = Vec::with_capacity(map.len().div_ceil(size).max(1));
    let mut current = OrderedMap::with_capacity(size.min(map.len()));
    for (k, v) in map {
        if current.len() == size {
            groups.push(std::mem::take(&mut current));
        }
        current.insert(k.clone(), v.clone());
    }
    groups.push(current);
    Ok(groups)
}
