//! Folds and extrema.
//!
//! The `_first` folds and `min`/`max` seed themselves from the input, so they return
//! `None` on an empty one instead of requiring the caller to check first.

use std::cmp::Ordering;
use std::ops::Add;

use super::drive;
use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, Sequence};
use crate::step::Step;

/// Left fold: `f(f(f(init, a), b), c)`.
#[inline]
pub fn fold_left<S, A, F>(seq: S, init: A, mut f: F) -> A
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    drive(&mut seq.into_cursor(), init, |acc, item| {
        Step::<A, A>::Yielded(f(acc, item))
    })
    .into_inner()
}

/// Left fold seeded with the first element.
#[inline]
pub fn fold_left_first<S, F>(seq: S, f: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut cursor = seq.into_cursor();
    let first = cursor.next()?;
    Some(fold_left(cursor, first, f))
}

/// Right fold, walking from the back: `f(a, f(b, f(c, init)))`.
///
/// ```rust
/// use lazyseq::algorithm::fold_right;
///
/// let v = vec!["a", "b", "c"];
/// let s = fold_right(&v, String::new(), |x: &&str, acc: String| acc + *x);
/// assert_eq!(s, "cba");
/// ```
pub fn fold_right<S, A, F>(seq: S, init: A, mut f: F) -> A
where
    S: Sequence,
    S::Cursor: BidirectionalCursor,
    F: FnMut(S::Item, A) -> A,
{
    let mut cursor = seq.into_cursor();
    let mut acc = init;
    while let Some(item) = cursor.next_back() {
        acc = f(item, acc);
    }
    acc
}

/// Right fold seeded with the last element.
pub fn fold_right_first<S, F>(seq: S, f: F) -> Option<S::Item>
where
    S: Sequence,
    S::Cursor: BidirectionalCursor,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut cursor = seq.into_cursor();
    let last = cursor.next_back()?;
    Some(fold_right(cursor, last, f))
}

/// Sum of `init` and every element, added left to right.
///
/// ```rust
/// use lazyseq::algorithm::accumulate;
/// use lazyseq::prelude::*;
///
/// let v = vec![1.5, 2.5];
/// assert_eq!(accumulate(&v, 1.0), 5.0);
/// assert_eq!(accumulate(iota(1u64, 101), 0), 5050);
/// ```
#[inline]
pub fn accumulate<S, A>(seq: S, init: A) -> A
where
    S: Sequence,
    A: Add<S::Item, Output = A>,
{
    fold_left(seq, init, |acc, item| acc + item)
}

/// The first element `e` for which no later element compares `Less` than it.
pub fn min_by<S, F>(seq: S, mut cmp: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    fold_left_first(seq, |best, item| {
        if cmp(&item, &best) == Ordering::Less {
            item
        } else {
            best
        }
    })
}

/// The first element `e` for which no later element compares `Greater` than it.
pub fn max_by<S, F>(seq: S, mut cmp: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    fold_left_first(seq, |best, item| {
        if cmp(&item, &best) == Ordering::Greater {
            item
        } else {
            best
        }
    })
}

/// Smallest element; ties go to the earliest.
#[inline]
pub fn min<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Ord,
{
    min_by(seq, Ord::cmp)
}

/// Largest element; ties go to the earliest.
#[inline]
pub fn max<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Ord,
{
    max_by(seq, Ord::cmp)
}

/// Element with the smallest key.
#[inline]
pub fn min_by_key<S, K, F>(seq: S, mut key: F) -> Option<S::Item>
where
    S: Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    min_by(seq, |a, b| key(a).cmp(&key(b)))
}

/// Element with the largest key.
#[inline]
pub fn max_by_key<S, K, F>(seq: S, mut key: F) -> Option<S::Item>
where
    S: Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    max_by(seq, |a, b| key(a).cmp(&key(b)))
}

fn best_position<C, F>(cursor: C, mut better: F) -> C
where
    C: ForwardCursor,
    F: FnMut(&C::Item, &C::Item) -> bool,
{
    let mut best = cursor.clone();
    let mut ahead = cursor;
    let mut held = match ahead.clone().next() {
        Some(item) => item,
        None => return best,
    };
    loop {
        let saved = ahead.clone();
        match ahead.next() {
            Some(item) => {
                if better(&item, &held) {
                    best = saved;
                    held = item;
                }
            }
            None => return best,
        }
    }
}

/// Cursor at the smallest element, or an exhausted cursor for an empty input.
///
/// ```rust
/// use lazyseq::algorithm::min_element;
/// use lazyseq::prelude::*;
///
/// let v = vec![4, 2, 8, 2];
/// let at_min = min_element(&v);
/// assert_eq!(distance(&all(&v), &at_min), 1);
/// ```
#[inline]
pub fn min_element<S>(seq: S) -> S::Cursor
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    S::Item: Ord,
{
    best_position(seq.into_cursor(), |item, held| item < held)
}

/// Cursor at the largest element, or an exhausted cursor for an empty input.
#[inline]
pub fn max_element<S>(seq: S) -> S::Cursor
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    S::Item: Ord,
{
    best_position(seq.into_cursor(), |item, held| item > held)
}

/// Whether no element compares less than the one before it. Stops at the first descent.
pub fn is_sorted<S>(seq: S) -> bool
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let mut cursor = seq.into_cursor();
    let first = match cursor.next() {
        Some(item) => item,
        None => return true,
    };
    drive(&mut cursor, first, |prev, item| {
        if item < prev {
            Step::Complete(())
        } else {
            Step::Yielded(item)
        }
    })
    .is_yielded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::collections::LinkedList;

    #[test]
    fn test_folds_in_both_directions() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(fold_left(&v, 0, |acc, x| acc * 10 + x), 1234);
        assert_eq!(fold_right(&v, 0, |x, acc| acc * 10 + x), 4321);
        assert_eq!(fold_left_first(iota(1, 5), |a, b| a - b), Some(1 - 2 - 3 - 4));
        assert_eq!(fold_right_first(iota(1, 5), |x, acc| x - acc), Some(1 - (2 - (3 - 4))));
    }

    #[test]
    fn test_first_folds_on_empty() {
        assert_eq!(fold_left_first(iota(0, 0), |a, b| a + b), None);
        assert_eq!(fold_right_first(iota(0, 0), |a, b| a + b), None);
        assert_eq!(min(empty::<u8>()), None);
    }

    #[test]
    fn test_extrema() {
        let list: LinkedList<i32> = [3, 9, -2, 9, -2].into_iter().collect();
        assert_eq!(min(&list), Some(&-2));
        assert_eq!(max(&list), Some(&9));
        assert_eq!(min_by_key(&list, |x: &&i32| x.abs()), Some(&-2));
        assert_eq!(max_by(&list, |a: &&i32, b: &&i32| b.cmp(a)), Some(&-2));
    }

    #[test]
    fn test_max_by_key_prefers_earliest_tie() {
        let words = vec!["aa", "b", "cc"];
        assert_eq!(max_by_key(&words, |w: &&&str| w.len()), Some(&"aa"));
    }

    #[test]
    fn test_element_cursors() {
        let v = vec![4, 1, 7, 1, 7];
        let lo = min_element(&v);
        assert_eq!(lo.remaining(), Some(4));
        let hi = max_element(&v);
        assert_eq!(hi.cloned().to_vec(), vec![7, 1, 7]);
        let none: Vec<i32> = Vec::new();
        assert!(is_end(&min_element(&none)));
    }

    #[test]
    fn test_is_sorted_stops_early() {
        assert!(is_sorted(&vec![1, 1, 2, 5]));
        assert!(!is_sorted(&vec![1, 3, 2]));
        assert!(is_sorted(empty::<f64>()));

        let mut pulled = 0;
        let c = generate(|| {
            pulled += 1;
            Some(if pulled == 3 { 0 } else { pulled })
        });
        assert!(!is_sorted(c));
        assert_eq!(pulled, 3);
    }
}
