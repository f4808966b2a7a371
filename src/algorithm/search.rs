//! Ordered search over sorted input.
//!
//! Halving works on any forward cursor: each midpoint is a clone advanced with
//! `skip_forward`, which is O(1) on random-access cursors and a walk otherwise. The
//! number of comparisons is logarithmic either way.

use std::borrow::Borrow;

use crate::cursor::{size, Cursor, ForwardCursor, Sequence};

fn partition_point<C, F>(cursor: C, mut before: F) -> C
where
    C: ForwardCursor,
    F: FnMut(&C::Item) -> bool,
{
    let mut first = cursor;
    let mut len = size(&first);
    while len > 0 {
        let half = len / 2;
        let mut mid = first.clone();
        mid.skip_forward(half);
        match mid.next() {
            Some(item) if before(&item) => {
                first = mid;
                len -= half + 1;
            }
            _ => len = half,
        }
    }
    first
}

/// Cursor at the first element not less than `value`.
///
/// The input must be sorted ascending; this is not checked.
///
/// ```rust
/// use lazyseq::algorithm::lower_bound;
/// use lazyseq::prelude::*;
///
/// let v = vec![1, 3, 3, 5];
/// assert_eq!(lower_bound(&v, 3).remaining(), Some(3));
/// assert_eq!(lower_bound(&v, 9).remaining(), Some(0));
/// ```
#[inline]
pub fn lower_bound<S, V>(seq: S, value: V) -> S::Cursor
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    S::Item: Borrow<V>,
    V: Ord,
{
    partition_point(seq.into_cursor(), |item| item.borrow() < &value)
}

/// Cursor at the first element greater than `value`.
#[inline]
pub fn upper_bound<S, V>(seq: S, value: V) -> S::Cursor
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    S::Item: Borrow<V>,
    V: Ord,
{
    partition_point(seq.into_cursor(), |item| item.borrow() <= &value)
}

fn sorted_by_borrow<C, V>(mut cursor: C) -> bool
where
    C: Cursor,
    C::Item: Borrow<V>,
    V: Ord,
{
    let mut prev = match cursor.next() {
        Some(item) => item,
        None => return true,
    };
    while let Some(item) = cursor.next() {
        if Borrow::<V>::borrow(&item) < Borrow::<V>::borrow(&prev) {
            return false;
        }
        prev = item;
    }
    true
}

/// Whether a sorted input contains `value`.
///
/// Sortedness is a precondition, checked with `debug_assert!` in debug builds only.
pub fn binary_search<S, V>(seq: S, value: V) -> bool
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    S::Item: Borrow<V>,
    V: Ord,
{
    let cursor = seq.into_cursor();
    debug_assert!(
        sorted_by_borrow::<_, V>(cursor.clone()),
        "binary_search on unsorted input"
    );
    let mut found = partition_point(cursor, |item| item.borrow() < &value);
    match found.next() {
        Some(item) => item.borrow() == &value,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_bounds_bracket_equal_run() {
        let v = vec![1, 2, 2, 2, 3];
        let lo = lower_bound(&v, 2);
        let hi = upper_bound(&v, 2);
        assert_eq!(distance(&lo, &hi), 3);
        assert_eq!(distance(&all(&v), &lo), 1);
    }

    #[test]
    fn test_search_on_forward_only_input() {
        let set: BTreeSet<u32> = (0..100).step_by(3).collect();
        assert!(binary_search(&set, 42));
        assert!(!binary_search(&set, 43));
        assert_eq!(lower_bound(&set, 43).next(), Some(&45));
    }

    #[test]
    fn test_search_on_iota() {
        assert!(binary_search(iota(0, 1000), 999));
        assert!(!binary_search(iota(0, 1000), 1000));
        assert!(!binary_search(empty::<i32>(), 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "binary_search on unsorted input")]
    fn test_unsorted_input_is_caught_in_debug() {
        binary_search(&vec![3, 1, 2], 1);
    }
}
