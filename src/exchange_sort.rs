//! Partition-exchange sort with a fixed last-element pivot.
//!
//! This is the routine [`ProbingSet::snapshot`](crate::ProbingSet::snapshot)
//! uses to order its output. It is deterministic: the same input and
//! comparator always produce the same sequence of swaps.
//!
//! Properties
//! - In place, no allocation.
//! - Not stable: elements comparing `Equal` may change relative order.
//! - O(n log n) on average, O(n²) on already sorted or reverse sorted input.
//! - Stack depth is O(log n): the smaller side is sorted recursively and the
//!   larger side by looping, which leaves the partition sequence unchanged.

use core::cmp::Ordering;

/// Sorts `v` ascending according to `compare`.
pub fn sort<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_slice(v, &mut compare);
}

/// Sorts the inclusive range `v[lo..=hi]` in place.
///
/// `lo >= hi` covers zero or one element and is a no-op.
///
/// # Panics
/// Panics if `lo < hi` and `hi >= v.len()`.
pub fn sort_range<T, F>(v: &mut [T], lo: usize, hi: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if lo >= hi {
        return;
    }
    sort_slice(&mut v[lo..=hi], &mut compare);
}

fn sort_slice<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let p = partition(v, compare);
        let (left, rest) = core::mem::take(&mut v).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_slice(left, compare);
            v = right;
        } else {
            sort_slice(right, compare);
            v = left;
        }
    }
}

/// Rearranges `v` around its last element and returns the pivot's final index.
///
/// Afterwards every element before the returned index compares `Less` than
/// the pivot and none after it does.
pub(crate) fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let hi = v.len() - 1;
    let mut sep = 0;
    for i in 0..hi {
        if compare(&v[i], &v[hi]) == Ordering::Less {
            v.swap(i, sep);
            sep += 1;
        }
    }
    v.swap(sep, hi);
    sep
}
