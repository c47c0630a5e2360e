use log::trace;

use crate::error::{AlgoError, Result};
use crate::heap::BoundedMinHeap;

/// Return the `k` largest values of `input` in ascending order.
///
/// Runs in O(n log k) time with O(k) auxiliary space. When `k` is at least
/// `input.len()` the whole input comes back sorted. Which duplicates are
/// kept at the k-th boundary is unspecified; only the values are.
///
/// Fails with [`AlgoError::InvalidArgument`] for a negative `k`, before any
/// element is looked at.
pub fn top_k<T: Ord + Clone>(input: &[T], k: i64) -> Result<Vec<T>> {
    if k < 0 {
        return Err(AlgoError::InvalidArgument {
            op: "top_k",
            msg: format!("k must be >= 0, got {k}"),
        });
    }
    // k beyond usize::MAX keeps everything anyway.
    let k = usize::try_from(k).unwrap_or(usize::MAX);
    Ok(top_k_iter(input.iter().cloned(), k))
}

/// Unchecked core of [`top_k`] over any iterator.
pub fn top_k_iter<T, I>(input: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let iter = input.into_iter();
    let (lower, _) = iter.size_hint();
    trace!("top_k: k={k}, size_hint={lower}");

    let mut heap = BoundedMinHeap::with_size_hint(k, lower);
    heap.extend(iter);
    heap.into_sorted_vec()
}
