//! Predicate-driven selection over an [`OrderedMap`]: filter/reject/partition and the
//! all/any/none queries.
//!
//! These functions never modify their input. [`crate::processing::Stream`] builds on them and
//! commits a result only once every predicate call has produced a boolean.

use crate::error::StreamResult;
use crate::types::{OrderedMap, Pair};

use super::predicate::{judge, verdicts, Verdict};

/// Returns a new map with the pairs for which `predicate` is `true`, in original order.
pub fn filter<V, R, F>(map: &OrderedMap<V>, predicate: F) -> StreamResult<OrderedMap<V>>
where
    V: Clone,
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    select("filter", map, predicate, true)
}

/// Returns a new map with the pairs for which `predicate` is `false`, in original order.
pub fn reject<V, R, F>(map: &OrderedMap<V>, predicate: F) -> StreamResult<OrderedMap<V>>
where
    V: Clone,
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    select("reject", map, predicate, false)
}

fn select<V, R, F>(
    operation: &'static str,
    map: &OrderedMap<V>,
    predicate: F,
    keep: bool,
) -> StreamResult<OrderedMap<V>>
where
    V: Clone,
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    let flags = verdicts(operation, map, predicate)?;
    Ok(map
        .iter()
        .zip(flags)
        .filter(|(_, flag)| *flag == keep)
        .map(|((k, v), _)| (k.clone(), v.clone()))
        .collect())
}

/// Splits `map` into `(matching, non-matching)` pairs, preserving relative order in each half.
pub fn partition<V, R, F>(
    map: &OrderedMap<V>,
    mut predicate: F,
) -> StreamResult<Pair<OrderedMap<V>, OrderedMap<V>>>
where
    V: Clone,
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    let mut first = OrderedMap::new();
    let mut second = OrderedMap::new();
    for (k, v) in map {
        let side = if judge("partition", k, predicate(k.as_str(), v))? {
            &mut first
        } else {
            &mut second
        };
        side.insert(k.clone(), v.clone());
    }
    Ok(Pair::new(first, second))
}

/// `true` if every pair satisfies `predicate` (vacuously `true` when empty).
///
/// Returns `false` at the first failing pair without evaluating the rest.
pub fn all<V, R, F>(map: &OrderedMap<V>, mut predicate: F) -> StreamResult<bool>
where
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    for (k, v) in map {
        if !judge("all", k, predicate(k.as_str(), v))? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `true` at the first pair that satisfies `predicate`; `false` if none does.
pub fn any<V, R, F>(map: &OrderedMap<V>, mut predicate: F) -> StreamResult<bool>
where
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    for (k, v) in map {
        if judge("any", k, predicate(k.as_str(), v))? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `true` if no pair satisfies `predicate`; `false` at the first pair that does.
pub fn none<V, R, F>(map: &OrderedMap<V>, mut predicate: F) -> StreamResult<bool>
where
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    for (k, v) in map {
        if judge("none", k, predicate(k.as_str(), v))? {
            return Ok(false);
        }
    }
    Ok(true)
}
