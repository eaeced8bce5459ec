//! Left-outer merge of two datasets by key.
//!
//! The secondary dataset drives the result: every secondary item appears
//! exactly once, in its original order. A primary item whose key matches is
//! applied on top of it through [`Overlay`], so primary fields win where both
//! sides carry a value.

use std::collections::HashMap;
use std::hash::Hash;

/// Applies the fields of a matching primary record onto `self`.
pub trait Overlay<P> {
    fn overlay(self, primary: &P) -> Self;
}

/// Merge `primary` into `secondary` by key.
///
/// - Primary items are indexed by `primary_key`; on duplicate keys the last
///   one wins.
/// - Items whose key is `None` never match.
/// - Unmatched secondary items are returned unchanged.
///
/// The result always has `secondary.len()` items.
pub fn merge_by_key<P, S, K, FP, FS>(
    primary: &[P],
    secondary: Vec<S>,
    primary_key: FP,
    secondary_key: FS,
) -> Vec<S>
where
    S: Overlay<P>,
    K: Eq + Hash + ?Sized,
    FP: Fn(&P) -> Option<&K>,
    FS: Fn(&S) -> Option<&K>,
{
    let index: HashMap<&K, &P> = primary
        .iter()
        .filter_map(|item| primary_key(item).map(|key| (key, item)))
        .collect();

    secondary
        .into_iter()
        .map(|item| {
            let matched = secondary_key(&item).and_then(|key| index.get(key).copied());
            match matched {
                Some(primary_item) => item.overlay(primary_item),
                None => item,
            }
        })
        .collect()
}

/// Key helper: treats empty strings as absent.
pub fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
