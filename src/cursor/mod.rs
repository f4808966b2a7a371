//! Capability traits for cursors.
//!
//! A cursor is a window `[front, back)` over some sequence that hands out one element per
//! call. What else it can do is described by a ladder of traits, each a compile-time
//! predicate that views, actions and reducers put in their bounds:
//!
//! | Trait | Capability |
//! |---|---|
//! | [`Cursor`] | single pass (input) |
//! | [`ForwardCursor`] | multi pass: a clone is an independent position |
//! | [`BidirectionalCursor`] | can also be consumed from the back |
//! | [`SizedCursor`] | knows its length in O(1) |
//! | [`RandomAccessCursor`] | bidirectional + sized, with O(1) skips |
//! | [`ContiguousCursor`] | the remaining window is a slice in memory |
//!
//! The cheapest implementation of a step is chosen statically: generic code calls
//! [`Cursor::skip_forward`] or [`Cursor::remaining`], and random-access cursors override
//! those to run in constant time while everything else keeps the counting default.

mod primitives;
mod source;

pub use primitives::{advance, as_slice, begin, distance, end, is_end, prev, size};
pub use source::{all, from_iter, single_pass, Sequence, SinglePass, SliceCursor, Source};

/// A single-pass producer of elements.
///
/// Every view in this crate is a `Cursor` wrapping another `Cursor`; pulling one element
/// from the outermost view pulls exactly what is needed from the ones below it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3];
/// let mut cursor = all(&data);
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.remaining(), Some(2));
/// ```
pub trait Cursor {
    type Item;

    /// Produce the next element, or `None` once the window is empty.
    fn next(&mut self) -> Option<Self::Item>;

    /// Exact number of elements left, when it is known without stepping.
    #[inline]
    fn remaining(&self) -> Option<usize> {
        None
    }

    /// Lower and upper bound on the number of elements left.
    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }

    /// Discard up to `n` elements from the front and return how many were discarded.
    ///
    /// The default pulls one element at a time. Random-access cursors override this with
    /// an O(1) jump.
    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n {
            if self.next().is_none() {
                break;
            }
            skipped += 1;
        }
        skipped
    }
}

/// A cursor that can be saved and resumed: cloning yields an independent position.
///
/// Algorithms that must revisit elements (`cycle`, `take_last`, `chunk`, `find`) require
/// this; a [`SinglePass`] source does not implement it, so handing one to such an
/// algorithm is a compile error:
///
/// ```compile_fail
/// use lazyseq::prelude::*;
///
/// let once_only = single_pass(vec![1, 2, 3].into_iter());
/// let _ = once_only.cycle();
/// ```
pub trait ForwardCursor: Cursor + Clone {}

/// A cursor that can also be consumed from the back.
pub trait BidirectionalCursor: ForwardCursor {
    /// Produce the last element of the window, shrinking it from the back.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Discard up to `n` elements from the back and return how many were discarded.
    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n {
            if self.next_back().is_none() {
                break;
            }
            skipped += 1;
        }
        skipped
    }
}

/// A cursor whose length is known in O(1).
///
/// Implementations keep [`Cursor::remaining`] returning `Some(self.len())`.
pub trait SizedCursor: Cursor {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sized bidirectional cursor whose `skip_forward` and `skip_back` run in O(1).
pub trait RandomAccessCursor: BidirectionalCursor + SizedCursor {
    /// Element `index` positions from the front, without consuming anything.
    #[inline]
    fn peek_at(&self, index: usize) -> Option<Self::Item> {
        let mut probe = self.clone();
        if probe.skip_forward(index) < index {
            return None;
        }
        probe.next()
    }
}

/// A random-access cursor whose remaining window is laid out as one slice.
pub trait ContiguousCursor: RandomAccessCursor {
    type Elem;

    fn as_slice(&self) -> &[Self::Elem];
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        (**self).bounds()
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        (**self).skip_forward(n)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        (**self).bounds()
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        (**self).skip_forward(n)
    }
}

impl<L, R> Cursor for either::Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            either::Either::Left(l) => Cursor::next(l),
            either::Either::Right(r) => Cursor::next(r),
        }
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        match self {
            either::Either::Left(l) => l.remaining(),
            either::Either::Right(r) => r.remaining(),
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        match self {
            either::Either::Left(l) => l.bounds(),
            either::Either::Right(r) => r.bounds(),
        }
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        match self {
            either::Either::Left(l) => l.skip_forward(n),
            either::Either::Right(r) => r.skip_forward(n),
        }
    }
}

impl<L, R> ForwardCursor for either::Either<L, R>
where
    L: ForwardCursor,
    R: ForwardCursor<Item = L::Item>,
{
}

impl<L, R> BidirectionalCursor for either::Either<L, R>
where
    L: BidirectionalCursor,
    R: BidirectionalCursor<Item = L::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            either::Either::Left(l) => l.next_back(),
            either::Either::Right(r) => r.next_back(),
        }
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        match self {
            either::Either::Left(l) => l.skip_back(n),
            either::Either::Right(r) => r.skip_back(n),
        }
    }
}

impl<L, R> SizedCursor for either::Either<L, R>
where
    L: SizedCursor,
    R: SizedCursor<Item = L::Item>,
{
    #[inline]
    fn len(&self) -> usize {
        match self {
            either::Either::Left(l) => l.len(),
            either::Either::Right(r) => r.len(),
        }
    }
}

impl<L, R> RandomAccessCursor for either::Either<L, R>
where
    L: RandomAccessCursor,
    R: RandomAccessCursor<Item = L::Item>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;
    use either::Either;

    fn assert_random_access<C: RandomAccessCursor>(_: &C) {}
    fn assert_bidirectional<C: BidirectionalCursor>(_: &C) {}
    fn assert_forward<C: ForwardCursor>(_: &C) {}

    #[test]
    fn test_wrappers_keep_the_size_hint() {
        let filtered = crate::view::iota(0, 8).filter(|x: &i32| x % 2 == 0);
        let boxed: Box<dyn Cursor<Item = i32>> = Box::new(filtered.clone());
        assert_eq!(boxed.bounds(), (0, Some(8)));
        assert_eq!(boxed.remaining(), None);

        let either: Either<_, crate::view::Iota<i32>> = Either::Left(filtered);
        assert_eq!(either.bounds(), (0, Some(8)));
    }

    #[test]
    fn test_default_skip_forward_counts_steps() {
        let mut c = single_pass(0..5);
        assert_eq!(c.skip_forward(3), 3);
        assert_eq!(c.next(), Some(3));
        assert_eq!(c.skip_forward(10), 1);
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_capabilities_of_std_sources() {
        let v = vec![1, 2, 3];
        assert_random_access(&begin(&v));

        let list: std::collections::LinkedList<i32> = (0..3).collect();
        assert_bidirectional(&begin(&list));

        let map: std::collections::HashMap<i32, i32> = [(1, 1)].into_iter().collect();
        assert_forward(&begin(&map));
    }

    #[test]
    fn test_peek_at_does_not_consume() {
        let v = [10, 20, 30];
        let c = begin(&v);
        assert_eq!(c.peek_at(2), Some(&30));
        assert_eq!(c.peek_at(3), None);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_either_unifies_branches() {
        let v = [1, 2, 3, 4];
        let pick = |odd: bool| {
            if odd {
                Either::Left(all(&v).filter(|x| *x % 2 == 1))
            } else {
                Either::Right(all(&v).filter(|x| *x % 2 == 0))
            }
        };
        assert_eq!(pick(true).cloned().to_vec(), vec![1, 3]);
        assert_eq!(pick(false).cloned().to_vec(), vec![2, 4]);
    }

    #[test]
    fn test_mut_ref_cursor_resumes_where_it_stopped() {
        let v = [1, 2, 3, 4, 5];
        let mut c = all(&v);
        let head: Vec<_> = (&mut c).take(2).cloned().to_vec();
        assert_eq!(head, vec![1, 2]);
        assert_eq!(c.next(), Some(&3));
    }
}
