//! Uniform stepping operations.
//!
//! Each primitive is written once against the capability traits and reaches the O(1)
//! implementation through [`Cursor::remaining`], [`Cursor::skip_forward`] and
//! [`BidirectionalCursor::skip_back`], which random-access cursors override.

use super::{BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, Sequence};

/// Cursor at the front of a sequence.
#[inline]
pub fn begin<S: Sequence>(seq: S) -> S::Cursor {
    seq.into_cursor()
}

/// Exhausted cursor at the end of a sequence.
///
/// O(1) for sized random-access sequences; otherwise every element is stepped over. Never
/// returns for an unbounded sequence.
#[inline]
pub fn end<S: Sequence>(seq: S) -> S::Cursor {
    let mut cursor = seq.into_cursor();
    match cursor.remaining() {
        Some(n) => {
            cursor.skip_forward(n);
        }
        None => while cursor.next().is_some() {},
    }
    cursor
}

/// Whether the cursor has nothing left. Peeks on a copy when the length is unknown.
#[inline]
pub fn is_end<C: ForwardCursor>(cursor: &C) -> bool {
    match cursor.remaining() {
        Some(n) => n == 0,
        None => cursor.clone().next().is_none(),
    }
}

/// Move the front of the cursor forward by up to `n`, returning how far it moved.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3];
/// let mut c = begin(&data);
/// assert_eq!(advance(&mut c, 2), 2);
/// assert_eq!(advance(&mut c, 5), 1);
/// assert!(is_end(&c));
/// ```
#[inline]
pub fn advance<C: Cursor>(cursor: &mut C, n: usize) -> usize {
    cursor.skip_forward(n)
}

/// Number of elements left in the cursor, counting a copy when the length is unknown.
#[inline]
pub fn size<C: ForwardCursor>(cursor: &C) -> usize {
    match cursor.remaining() {
        Some(n) => n,
        None => {
            let mut probe = cursor.clone();
            let mut n = 0;
            while probe.next().is_some() {
                n += 1;
            }
            n
        }
    }
}

/// Steps from `first` to `last`, where `last` was reached by advancing a copy of `first`.
///
/// Subtraction of the two sizes: O(1) when both are sized, a count otherwise.
#[inline]
pub fn distance<C: ForwardCursor>(first: &C, last: &C) -> usize {
    size(first).saturating_sub(size(last))
}

/// Pull the back edge of the cursor toward its front by up to `n`.
///
/// With `bound = Some(k)` the retreat stops once only `k` elements remain, so it never
/// crosses a known floor; `None` clamps at the front. Returns how far the edge moved.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3, 4, 5];
/// let mut c = begin(&data);
/// assert_eq!(prev(&mut c, 4, Some(2)), 3);
/// assert_eq!(c.cloned().to_vec(), vec![1, 2]);
/// ```
#[inline]
pub fn prev<C: BidirectionalCursor>(cursor: &mut C, n: usize, bound: Option<usize>) -> usize {
    let room = match bound {
        Some(floor) => size(cursor).saturating_sub(floor),
        None => n,
    };
    cursor.skip_back(n.min(room))
}

/// The remaining window of a contiguous cursor.
#[inline]
pub fn as_slice<C: ContiguousCursor>(cursor: &C) -> &[C::Elem] {
    cursor.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{from_iter, SizedCursor};
    use std::collections::LinkedList;

    #[test]
    fn test_end_is_exhausted() {
        let v = vec![1, 2, 3];
        assert!(is_end(&end(&v)));

        let list: LinkedList<i32> = (0..4).collect();
        assert!(is_end(&end(&list)));

        let filtered = from_iter((0..10).filter(|x| x % 2 == 0));
        assert!(is_end(&end(filtered)));
    }

    #[test]
    fn test_distance_on_both_strategies() {
        let v = vec![1, 2, 3, 4, 5];
        let first = begin(&v);
        let mut last = first.clone();
        advance(&mut last, 3);
        assert_eq!(distance(&first, &last), 3);

        let unsized_first = from_iter(v.iter().filter(|_| true));
        let mut unsized_last = unsized_first.clone();
        advance(&mut unsized_last, 4);
        assert_eq!(unsized_first.remaining(), None);
        assert_eq!(distance(&unsized_first, &unsized_last), 4);
    }

    #[test]
    fn test_prev_without_bound_clamps_at_front() {
        let list: LinkedList<i32> = (0..3).collect();
        let mut c = begin(&list);
        assert_eq!(prev(&mut c, 10, None), 3);
        assert!(is_end(&c));
    }

    #[test]
    fn test_prev_respects_bound() {
        let v = vec![1, 2, 3, 4];
        let mut c = begin(&v);
        assert_eq!(prev(&mut c, 1, Some(0)), 1);
        assert_eq!(c.len(), 3);
        assert_eq!(prev(&mut c, 5, Some(3)), 0);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_as_slice_tracks_front() {
        let v = [1, 2, 3];
        let mut c = begin(&v);
        advance(&mut c, 1);
        assert_eq!(as_slice(&c), &[2, 3]);
    }
}
