//! Turning containers and iterators into cursors.

use std::collections::{
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque, BTreeMap, BTreeSet,
    HashMap, HashSet, LinkedList, VecDeque,
};
use std::{option, slice, str, vec};

use super::{
    BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, RandomAccessCursor, SizedCursor,
};

/// Anything that can produce a cursor over its elements.
///
/// Every cursor is trivially a sequence of itself. Containers are sequences when borrowed
/// (`&Vec<T>`, `&[T]`, `&LinkedList<T>`, ...) and `Vec<T>` is also one by value. Integer
/// ranges are sequences through [`Iota`](crate::view::Iota).
pub trait Sequence {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn into_cursor(self) -> Self::Cursor;
}

impl<C: Cursor> Sequence for C {
    type Item = C::Item;
    type Cursor = C;

    #[inline]
    fn into_cursor(self) -> C {
        self
    }
}

/// The whole of a sequence as a cursor.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let v = vec![1, 2, 3];
/// let doubled = all(&v).transform(|x| x * 2).to_vec();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[inline]
pub fn all<S: Sequence>(seq: S) -> S::Cursor {
    seq.into_cursor()
}

/// A cursor backed by a standard iterator.
///
/// Capabilities follow the iterator: `Clone` makes it forward, `DoubleEndedIterator`
/// bidirectional, `ExactSizeIterator` sized. Random access is granted to the iterators of
/// contiguous and ring-buffer storage, whose `nth` and `nth_back` are O(1).
#[derive(Debug, Clone)]
pub struct Source<I> {
    iter: I,
}

/// Cursor over a borrowed slice.
pub type SliceCursor<'a, T> = Source<slice::Iter<'a, T>>;

impl<I> Source<I> {
    #[inline]
    pub fn new(iter: I) -> Self {
        Source { iter }
    }

    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

/// Wrap any iterator as a cursor.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = "a b c".split(' ');
/// assert_eq!(from_iter(words).to_vec(), vec!["a", "b", "c"]);
/// ```
#[inline]
pub fn from_iter<I: IntoIterator>(iter: I) -> Source<I::IntoIter> {
    Source::new(iter.into_iter())
}

impl<I: Iterator> Cursor for Source<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lo, Some(hi)) if lo == hi => Some(lo),
            _ => None,
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        match self.remaining() {
            Some(len) => {
                let k = n.min(len);
                if k > 0 {
                    self.iter.nth(k - 1);
                }
                k
            }
            None => {
                let mut skipped = 0;
                while skipped < n && self.iter.next().is_some() {
                    skipped += 1;
                }
                skipped
            }
        }
    }
}

impl<I: Iterator + Clone> ForwardCursor for Source<I> {}

impl<I: DoubleEndedIterator + Clone> BidirectionalCursor for Source<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        match self.remaining() {
            Some(len) => {
                let k = n.min(len);
                if k > 0 {
                    self.iter.nth_back(k - 1);
                }
                k
            }
            None => {
                let mut skipped = 0;
                while skipped < n && self.iter.next_back().is_some() {
                    skipped += 1;
                }
                skipped
            }
        }
    }
}

impl<I: ExactSizeIterator> SizedCursor for Source<I> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T> RandomAccessCursor for Source<slice::Iter<'a, T>> {}

impl<T: Clone> RandomAccessCursor for Source<vec::IntoIter<T>> {}

impl<'a, T> RandomAccessCursor for Source<vec_deque::Iter<'a, T>> {}

impl<'a, T> ContiguousCursor for Source<slice::Iter<'a, T>> {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T: Clone> ContiguousCursor for Source<vec::IntoIter<T>> {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

pipeable!([I] Source<I>);

/// An input-only cursor: it cannot be cloned, so no algorithm can revisit its elements.
///
/// Created via [`single_pass`].
#[derive(Debug)]
pub struct SinglePass<I> {
    iter: I,
}

/// Wrap an iterator so that only single-pass algorithms accept it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let input = single_pass(vec![1, 2, 3, 4].into_iter());
/// assert_eq!(input.filter(|x| x % 2 == 0).to_vec(), vec![2, 4]);
/// ```
#[inline]
pub fn single_pass<I: IntoIterator>(iter: I) -> SinglePass<I::IntoIter> {
    SinglePass {
        iter: iter.into_iter(),
    }
}

impl<I: Iterator> Cursor for SinglePass<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

pipeable!([I] SinglePass<I>);

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Source::new(self.iter())
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Source::new(self.iter())
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Source::new(self.iter())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Cursor = Source<vec::IntoIter<T>>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Source::new(self.into_iter())
    }
}

impl<T> Sequence for Option<T> {
    type Item = T;
    type Cursor = Source<option::IntoIter<T>>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Source::new(self.into_iter())
    }
}

impl<'a> Sequence for &'a str {
    type Item = char;
    type Cursor = Source<str::Chars<'a>>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Source::new(self.chars())
    }
}

impl<'a> Sequence for &'a String {
    type Item = char;
    type Cursor = Source<str::Chars<'a>>;

    #[inline]
    fn into_cursor(self) -> Self::Cursor {
        Source::new(self.chars())
    }
}

macro_rules! borrowed_sequence {
    ($([$($gen:tt)*] $container:ty => $iter:ty, $item:ty;)*) => {
        $(
            impl<'a, $($gen)*> Sequence for &'a $container {
                type Item = $item;
                type Cursor = Source<$iter>;

                #[inline]
                fn into_cursor(self) -> Self::Cursor {
                    Source::new(self.iter())
                }
            }
        )*
    };
}

borrowed_sequence! {
    [T] VecDeque<T> => vec_deque::Iter<'a, T>, &'a T;
    [T] LinkedList<T> => linked_list::Iter<'a, T>, &'a T;
    [T] BTreeSet<T> => btree_set::Iter<'a, T>, &'a T;
    [K, V] BTreeMap<K, V> => btree_map::Iter<'a, K, V>, (&'a K, &'a V);
    [T, H] HashSet<T, H> => hash_set::Iter<'a, T>, &'a T;
    [K, V, H] HashMap<K, V, H> => hash_map::Iter<'a, K, V>, (&'a K, &'a V);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source_skips_in_place() {
        let data = [1, 2, 3, 4, 5];
        let mut c = all(&data);
        assert_eq!(c.skip_forward(2), 2);
        assert_eq!(c.as_slice(), &[3, 4, 5]);
        assert_eq!(c.skip_back(10), 3);
        assert!(c.is_empty());
    }

    #[test]
    fn test_unsized_iterator_reports_no_length() {
        let c = from_iter((0..10).filter(|x| x % 3 == 0));
        assert_eq!(c.remaining(), None);
        assert_eq!(c.bounds(), (0, Some(10)));
    }

    #[test]
    fn test_single_pass_counts_with_default_skip() {
        let mut c = single_pass(vec![1, 2, 3]);
        assert_eq!(c.remaining(), None);
        assert_eq!(c.skip_forward(5), 3);
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_associative_containers_yield_in_their_order() {
        let map: BTreeMap<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
        let mut c = all(&map);
        assert_eq!(c.next(), Some((&1, &'a')));
        assert_eq!(c.next_back(), Some((&2, &'b')));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_str_yields_chars() {
        let mut c = all("héllo");
        assert_eq!(c.next(), Some('h'));
        assert_eq!(c.next_back(), Some('o'));
        assert_eq!(c.next(), Some('é'));
    }

    #[test]
    fn test_vec_by_value_is_contiguous() {
        let mut c = all(vec![String::from("a"), String::from("b")]);
        assert_eq!(c.as_slice().len(), 2);
        assert_eq!(c.next(), Some(String::from("a")));
        assert_eq!(c.len(), 1);
    }
}
