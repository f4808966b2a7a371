//! Searching and counting.
//!
//! `find` and friends follow the sentinel convention: the returned cursor starts at the
//! match, and comes back exhausted when nothing matched. Test it with
//! [`is_end`](crate::cursor::is_end) or just pull from it.

use std::borrow::Borrow;

use super::drive;
use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, Sequence};
use crate::error::{RangeError, Result};
use crate::predicate::{EqualTo, Not, Predicate};
use crate::step::Step;

/// Cursor at the first element matching `pred`, or an exhausted cursor.
///
/// ```rust
/// use lazyseq::algorithm::find_if;
/// use lazyseq::prelude::*;
///
/// let v = vec![1, 4, 9, 16];
/// let mut hit = find_if(&v, |x: &&i32| **x > 5);
/// assert_eq!(hit.next(), Some(&9));
/// assert!(is_end(&find_if(&v, |x: &&i32| **x > 50)));
/// ```
pub fn find_if<S, P>(seq: S, mut pred: P) -> S::Cursor
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    P: Predicate<S::Item>,
{
    let mut cursor = seq.into_cursor();
    loop {
        let saved = cursor.clone();
        match cursor.next() {
            Some(item) if pred.test(&item) => return saved,
            Some(_) => {}
            None => return cursor,
        }
    }
}

/// Cursor at the first element not matching `pred`.
#[inline]
pub fn find_if_not<S, P>(seq: S, pred: P) -> S::Cursor
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    P: Predicate<S::Item>,
{
    find_if(seq, Not(pred))
}

/// Cursor at the first element equal to `value`.
#[inline]
pub fn find<S, V>(seq: S, value: V) -> S::Cursor
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    S::Item: Borrow<V>,
    V: PartialEq,
{
    find_if(seq, EqualTo(value))
}

/// Whether any element matches; stops at the first one that does.
#[inline]
pub fn any_of<S, P>(seq: S, mut pred: P) -> bool
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    drive(&mut seq.into_cursor(), (), |(), item| {
        if pred.test(&item) {
            Step::Complete(())
        } else {
            Step::Yielded(())
        }
    })
    .is_complete()
}

/// Whether every element matches; stops at the first one that does not. True for an empty
/// input.
#[inline]
pub fn all_of<S, P>(seq: S, pred: P) -> bool
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    !any_of(seq, Not(pred))
}

/// Whether no element matches.
#[inline]
pub fn none_of<S, P>(seq: S, pred: P) -> bool
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    !any_of(seq, pred)
}

/// Whether some element equals `value`.
#[inline]
pub fn contains<S, V>(seq: S, value: V) -> bool
where
    S: Sequence,
    S::Item: Borrow<V>,
    V: PartialEq,
{
    any_of(seq, EqualTo(value))
}

/// Number of elements matching `pred`.
pub fn count_if<S, P>(seq: S, mut pred: P) -> usize
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    let mut cursor = seq.into_cursor();
    let mut n = 0;
    while let Some(item) = cursor.next() {
        if pred.test(&item) {
            n += 1;
        }
    }
    n
}

/// Number of elements equal to `value`.
#[inline]
pub fn count<S, V>(seq: S, value: V) -> usize
where
    S: Sequence,
    S::Item: Borrow<V>,
    V: PartialEq,
{
    count_if(seq, EqualTo(value))
}

/// Offset of the first element matching `pred`.
#[inline]
pub fn position<S, P>(seq: S, mut pred: P) -> Option<usize>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    drive(&mut seq.into_cursor(), 0, |index, item| {
        if pred.test(&item) {
            Step::Complete(index)
        } else {
            Step::Yielded(index + 1)
        }
    })
    .complete_value()
}

/// `bias` plus the offset of the first match, or `default` when nothing matches.
///
/// ```rust
/// use lazyseq::algorithm::position_or;
///
/// let v = vec!['a', 'b', 'c'];
/// assert_eq!(position_or(&v, |c: &&char| **c == 'b', usize::MAX, 10), 11);
/// assert_eq!(position_or(&v, |c: &&char| **c == 'z', usize::MAX, 10), usize::MAX);
/// ```
#[inline]
pub fn position_or<S, P>(seq: S, pred: P, default: usize, bias: usize) -> usize
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    position(seq, pred).map_or(default, |index| bias + index)
}

/// Offset of the last element matching `pred`. Always a full pass.
pub fn position_last<S, P>(seq: S, mut pred: P) -> Option<usize>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    let mut cursor = seq.into_cursor();
    let mut last = None;
    let mut index = 0;
    while let Some(item) = cursor.next() {
        if pred.test(&item) {
            last = Some(index);
        }
        index += 1;
    }
    last
}

/// `bias` plus the offset of the last match, or `default` when nothing matches.
#[inline]
pub fn position_last_or<S, P>(seq: S, pred: P, default: usize, bias: usize) -> usize
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    position_last(seq, pred).map_or(default, |index| bias + index)
}

/// Whether both sequences have the same length and pairwise equal elements.
///
/// Sized inputs of different lengths are rejected before any element is compared.
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: Sequence,
    B: Sequence,
    A::Item: PartialEq<B::Item>,
{
    let mut left = a.into_cursor();
    let mut right = b.into_cursor();
    if let (Some(l), Some(r)) = (left.remaining(), right.remaining()) {
        if l != r {
            return false;
        }
    }
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// The first element.
#[inline]
pub fn front<S: Sequence>(seq: S) -> Option<S::Item> {
    seq.into_cursor().next()
}

/// The last element, taken from the back.
#[inline]
pub fn back<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Cursor: BidirectionalCursor,
{
    seq.into_cursor().next_back()
}

/// Element `index`, or [`RangeError::OutOfBounds`] past the end.
///
/// O(1) on random-access cursors; otherwise `index` elements are stepped over.
///
/// ```rust
/// use lazyseq::algorithm::at;
/// use lazyseq::prelude::*;
///
/// assert_eq!(at(iota(10, 20), 3), Ok(13));
/// assert!(at(iota(10, 20), 10).is_err());
/// ```
pub fn at<S: Sequence>(seq: S, index: usize) -> Result<S::Item> {
    let mut cursor = seq.into_cursor();
    let skipped = cursor.skip_forward(index);
    if skipped < index {
        return Err(RangeError::OutOfBounds {
            index,
            len: skipped,
        });
    }
    cursor
        .next()
        .ok_or(RangeError::OutOfBounds { index, len: index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::collections::{BTreeSet, LinkedList};

    #[test]
    fn test_find_returns_resumable_cursor() {
        let v = vec![3, 1, 4, 1, 5];
        let hit = find(&v, 1);
        assert_eq!(hit.cloned().to_vec(), vec![1, 4, 1, 5]);
        let miss = find(&v, 7);
        assert!(is_end(&miss));
        assert_eq!(find_if_not(&v, |x: &&i32| **x < 4).next(), Some(&4));
    }

    #[test]
    fn test_any_of_short_circuits() {
        let mut pulled = 0;
        let c = generate(|| {
            pulled += 1;
            Some(pulled)
        });
        assert!(any_of(c, |x: &i32| *x == 3));
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_all_and_none_on_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(all_of(&empty, |_: &&i32| false));
        assert!(none_of(&empty, |_: &&i32| true));
        assert!(!any_of(&empty, |_: &&i32| true));
    }

    #[test]
    fn test_count_and_contains_on_associative() {
        let set: BTreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(count_if(&set, |x: &&i32| **x % 2 == 0), 2);
        assert!(contains(&set, 3));
        assert!(!contains(&set, 9));
        assert_eq!(count(&vec![1, 2, 1, 1], 1), 3);
    }

    #[test]
    fn test_positions() {
        let list: LinkedList<char> = "abcabc".chars().collect();
        assert_eq!(position(&list, |c: &&char| **c == 'c'), Some(2));
        assert_eq!(position_last(&list, |c: &&char| **c == 'a'), Some(3));
        assert_eq!(position_last_or(&list, |c: &&char| **c == 'z', 99, 0), 99);
        assert_eq!(position(&list, |c: &&char| **c == 'z'), None);
    }

    #[test]
    fn test_equal_checks_length() {
        assert!(equal(iota(0, 3), vec![0, 1, 2]));
        assert!(!equal(iota(0, 3), vec![0, 1]));
        assert!(!equal(single_pass(0..3), single_pass(0..4)));
        assert!(equal(&vec![1, 2], &[1, 2]));
    }

    #[test]
    fn test_front_back_at() {
        let v = vec![5, 6, 7];
        assert_eq!(front(&v), Some(&5));
        assert_eq!(back(&v), Some(&7));
        assert_eq!(at(&v, 1), Ok(&6));
        assert_eq!(
            at(&v, 5),
            Err(RangeError::OutOfBounds { index: 5, len: 3 })
        );
        assert_eq!(
            at(&v, 3),
            Err(RangeError::OutOfBounds { index: 3, len: 3 })
        );
        let empty: Vec<u8> = Vec::new();
        assert_eq!(front(&empty), None);
    }
}
