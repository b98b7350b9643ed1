//! Left-to-right accumulation over an [`OrderedMap`].

use crate::types::OrderedMap;

/// Fold every pair into an accumulator, starting from `initial`.
///
/// Returns `initial` unchanged for an empty map.
pub fn fold<V, A, F>(map: &OrderedMap<V>, initial: A, mut combiner: F) -> A
where
    F: FnMut(A, &str, &V) -> A,
{
    map.iter().fold(initial, |acc, (k, v)| combiner(acc, k.as_str(), v))
}

/// Fold every pair into an accumulator that starts out absent.
///
/// The first `combiner` call receives `None`; every later call receives the previous result.
/// This is [`fold`] without a seed, not a "first element as seed" reduction: the first value
/// goes through `combiner` like every other. An empty map returns `None`.
pub fn reduce<V, A, F>(map: &OrderedMap<V>, mut combiner: F) -> Option<A>
where
    F: FnMut(Option<A>, &str, &V) -> A,
{
    map.iter().fold(None, |acc, (k, v)| Some(combiner(acc, k.as_str(), v)))
}
