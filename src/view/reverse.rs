//! The `reverse` view.

use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sequence, SizedCursor,
};
use crate::pipe::Stage;

/// A bidirectional sequence read back to front.
///
/// Created via [`View::reverse`](super::View::reverse) or [`reverse`]. The two ends of the
/// input simply trade places, so every capability and every O(1) skip carries over.
#[derive(Debug, Clone)]
pub struct Reverse<C> {
    cursor: C,
}

impl<C> Reverse<C> {
    #[inline]
    pub(crate) fn new(cursor: C) -> Self {
        Reverse { cursor }
    }

    /// Recover the input, with whatever was consumed from either end still gone.
    #[inline]
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: BidirectionalCursor> Cursor for Reverse<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next_back()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.cursor.remaining()
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        self.cursor.bounds()
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        self.cursor.skip_back(n)
    }
}

impl<C: BidirectionalCursor> ForwardCursor for Reverse<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for Reverse<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        self.cursor.next()
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        self.cursor.skip_forward(n)
    }
}

impl<C: BidirectionalCursor + SizedCursor> SizedCursor for Reverse<C> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len()
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Reverse<C> {}

pipeable!([C] Reverse<C>);

/// Bound form of `reverse`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseFn;

/// Read the piped sequence from its last element to its first.
#[inline]
pub fn reverse() -> ReverseFn {
    ReverseFn
}

impl<S> Stage<S> for ReverseFn
where
    S: Sequence,
    S::Cursor: BidirectionalCursor,
{
    type Output = Reverse<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Reverse::new(seq.into_cursor())
    }
}
