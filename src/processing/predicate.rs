//! The predicate contract: every predicate must produce a boolean verdict.

use crate::error::{StreamError, StreamResult};
use crate::types::Value;

/// Outcome of a predicate call that may or may not be a boolean.
///
/// `bool` always yields a verdict, so plain Rust closures satisfy the contract at compile time.
/// Dynamic outcomes ([`Value`], [`serde_json::Value`], `Option<bool>`) yield a verdict only when
/// they hold a boolean; anything else is rejected with
/// [`StreamError::InvalidPredicateResult`].
pub trait Verdict {
    /// `Some(b)` when the outcome is the boolean `b`, `None` otherwise.
    fn verdict(&self) -> Option<bool>;
}

impl Verdict for bool {
    fn verdict(&self) -> Option<bool> {
        Some(*self)
    }
}

impl Verdict for Option<bool> {
    fn verdict(&self) -> Option<bool> {
        *self
    }
}

impl Verdict for Value {
    fn verdict(&self) -> Option<bool> {
        self.as_bool()
    }
}

impl Verdict for serde_json::Value {
    fn verdict(&self) -> Option<bool> {
        self.as_bool()
    }
}

/// Evaluate `predicate` against every pair, in order, collecting the verdicts.
///
/// Stops at the first non-boolean outcome.
pub(crate) fn verdicts<'a, V, R, F, I>(
    operation: &'static str,
    pairs: I,
    mut predicate: F,
) -> StreamResult<Vec<bool>>
where
    V: 'a,
    I: IntoIterator<Item = (&'a String, &'a V)>,
    F: FnMut(&str, &V) -> R,
    R: Verdict,
{
    pairs
        .into_iter()
        .map(|(k, v)| judge(operation, k, predicate(k.as_str(), v)))
        .collect()
}

/// Turn one predicate outcome into a boolean, or the contract error for `key`.
pub(crate) fn judge<R: Verdict>(
    operation: &'static str,
    key: &str,
    outcome: R,
) -> StreamResult<bool> {
    outcome
        .verdict()
        .ok_or_else(|| StreamError::InvalidPredicateResult {
            operation,
            key: key.to_string(),
        })
}
