//! Lock-step views over several sequences: `zip`, `zip3`, `zip_with`.
//!
//! All of them end with their shortest input; nothing is padded.

use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sequence, SizedCursor,
};
use crate::pipe::Stage;

fn min_bounds(a: (usize, Option<usize>), b: (usize, Option<usize>)) -> (usize, Option<usize>) {
    let hi = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    };
    (a.0.min(b.0), hi)
}

/// Pairs of corresponding elements.
///
/// Created via [`View::zip`](super::View::zip) or [`zip`]. Consumable from the back when
/// both inputs are random access; the longer one is trimmed first so the pairs line up.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    #[inline]
    pub(crate) fn new(a: A, b: B) -> Self {
        Zip { a, b }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        match (self.a.remaining(), self.b.remaining()) {
            (Some(x), Some(y)) => Some(x.min(y)),
            _ => None,
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        min_bounds(self.a.bounds(), self.b.bounds())
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        match self.remaining() {
            Some(len) => {
                let k = n.min(len);
                self.a.skip_forward(k);
                self.b.skip_forward(k);
                k
            }
            None => {
                let mut skipped = 0;
                while skipped < n && self.next().is_some() {
                    skipped += 1;
                }
                skipped
            }
        }
    }
}

impl<A: RandomAccessCursor, B: RandomAccessCursor> Zip<A, B> {
    #[inline]
    fn align_back(&mut self) {
        let (la, lb) = (self.a.len(), self.b.len());
        if la > lb {
            self.a.skip_back(la - lb);
        } else if lb > la {
            self.b.skip_back(lb - la);
        }
    }
}

impl<A: ForwardCursor, B: ForwardCursor> ForwardCursor for Zip<A, B> {}

impl<A: RandomAccessCursor, B: RandomAccessCursor> BidirectionalCursor for Zip<A, B> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.align_back();
        let x = self.a.next_back()?;
        let y = self.b.next_back()?;
        Some((x, y))
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        self.align_back();
        let k = self.a.skip_back(n);
        self.b.skip_back(k);
        k
    }
}

impl<A: SizedCursor, B: SizedCursor> SizedCursor for Zip<A, B> {
    #[inline]
    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }
}

impl<A: RandomAccessCursor, B: RandomAccessCursor> RandomAccessCursor for Zip<A, B> {}

pipeable!([A, B] Zip<A, B>);

/// Bound form of `zip`.
#[derive(Debug, Clone)]
pub struct ZipFn<S2> {
    other: S2,
}

/// Pair the piped sequence with `other`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let pairs = iota(0, 5) | view::zip(iota(5, 10));
/// assert_eq!(pairs.to_vec(), vec![(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)]);
/// ```
#[inline]
pub fn zip<S2: Sequence>(other: S2) -> ZipFn<S2> {
    ZipFn { other }
}

impl<S: Sequence, S2: Sequence> Stage<S> for ZipFn<S2> {
    type Output = Zip<S::Cursor, S2::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Zip::new(seq.into_cursor(), self.other.into_cursor())
    }
}

/// Triples of corresponding elements.
///
/// Created via [`View::zip3`](super::View::zip3) or [`zip3`].
#[derive(Debug, Clone)]
pub struct Zip3<A, B, C> {
    a: A,
    b: B,
    c: C,
}

impl<A, B, C> Zip3<A, B, C> {
    #[inline]
    pub(crate) fn new(a: A, b: B, c: C) -> Self {
        Zip3 { a, b, c }
    }
}

impl<A: Cursor, B: Cursor, C: Cursor> Cursor for Zip3<A, B, C> {
    type Item = (A::Item, B::Item, C::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        let z = self.c.next()?;
        Some((x, y, z))
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        let ab = self.a.remaining()?.min(self.b.remaining()?);
        Some(ab.min(self.c.remaining()?))
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        min_bounds(
            min_bounds(self.a.bounds(), self.b.bounds()),
            self.c.bounds(),
        )
    }
}

impl<A: ForwardCursor, B: ForwardCursor, C: ForwardCursor> ForwardCursor for Zip3<A, B, C> {}

impl<A: SizedCursor, B: SizedCursor, C: SizedCursor> SizedCursor for Zip3<A, B, C> {
    #[inline]
    fn len(&self) -> usize {
        self.a.len().min(self.b.len()).min(self.c.len())
    }
}

pipeable!([A, B, C] Zip3<A, B, C>);

/// Bound form of `zip3`.
#[derive(Debug, Clone)]
pub struct Zip3Fn<S2, S3> {
    second: S2,
    third: S3,
}

/// Zip the piped sequence with two others.
#[inline]
pub fn zip3<S2: Sequence, S3: Sequence>(second: S2, third: S3) -> Zip3Fn<S2, S3> {
    Zip3Fn { second, third }
}

impl<S: Sequence, S2: Sequence, S3: Sequence> Stage<S> for Zip3Fn<S2, S3> {
    type Output = Zip3<S::Cursor, S2::Cursor, S3::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Zip3::new(
            seq.into_cursor(),
            self.second.into_cursor(),
            self.third.into_cursor(),
        )
    }
}

/// Corresponding elements combined by a function.
///
/// Created via [`View::zip_with`](super::View::zip_with) or [`zip_with`].
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    zip: Zip<A, B>,
    f: F,
}

impl<A, B, F> ZipWith<A, B, F> {
    #[inline]
    pub(crate) fn new(a: A, b: B, f: F) -> Self {
        ZipWith {
            zip: Zip::new(a, b),
            f,
        }
    }
}

impl<A, B, F, R> Cursor for ZipWith<A, B, F>
where
    A: Cursor,
    B: Cursor,
    F: FnMut(A::Item, B::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        let (x, y) = self.zip.next()?;
        Some((self.f)(x, y))
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.zip.remaining()
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        self.zip.bounds()
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        self.zip.skip_forward(n)
    }
}

impl<A, B, F, R> ForwardCursor for ZipWith<A, B, F>
where
    A: ForwardCursor,
    B: ForwardCursor,
    F: FnMut(A::Item, B::Item) -> R + Clone,
{
}

impl<A, B, F, R> BidirectionalCursor for ZipWith<A, B, F>
where
    A: RandomAccessCursor,
    B: RandomAccessCursor,
    F: FnMut(A::Item, B::Item) -> R + Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<R> {
        let (x, y) = self.zip.next_back()?;
        Some((self.f)(x, y))
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        self.zip.skip_back(n)
    }
}

impl<A, B, F, R> SizedCursor for ZipWith<A, B, F>
where
    A: SizedCursor,
    B: SizedCursor,
    F: FnMut(A::Item, B::Item) -> R,
{
    #[inline]
    fn len(&self) -> usize {
        self.zip.len()
    }
}

impl<A, B, F, R> RandomAccessCursor for ZipWith<A, B, F>
where
    A: RandomAccessCursor,
    B: RandomAccessCursor,
    F: FnMut(A::Item, B::Item) -> R + Clone,
{
}

pipeable!([A, B, F] ZipWith<A, B, F>);

/// Bound form of `zip_with`.
#[derive(Debug, Clone)]
pub struct ZipWithFn<S2, F> {
    other: S2,
    f: F,
}

/// Combine the piped sequence with `other` element by element.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let sums = iota(0, 3) | view::zip_with(iota(10, 20), |a: i32, b: i32| a + b);
/// assert_eq!(sums.to_vec(), vec![10, 12, 14]);
/// ```
#[inline]
pub fn zip_with<S2: Sequence, F>(other: S2, f: F) -> ZipWithFn<S2, F> {
    ZipWithFn { other, f }
}

impl<S, S2, F, R> Stage<S> for ZipWithFn<S2, F>
where
    S: Sequence,
    S2: Sequence,
    F: FnMut(S::Item, S2::Item) -> R,
{
    type Output = ZipWith<S::Cursor, S2::Cursor, F>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        ZipWith::new(seq.into_cursor(), self.other.into_cursor(), self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::collections::LinkedList;

    #[test]
    fn test_zip_stops_at_shortest() {
        let short = vec!['a', 'b'];
        let out = iota(0, 10).zip(&short).to_vec();
        assert_eq!(out, vec![(0, &'a'), (1, &'b')]);
    }

    #[test]
    fn test_zip_from_back_aligns_lengths() {
        let mut c = iota(0, 10).zip(iota(100, 103));
        assert_eq!(c.next_back(), Some((2, 102)));
        assert_eq!(c.len(), 2);
        assert_eq!(c.next(), Some((0, 100)));
    }

    #[test]
    fn test_zip_over_list_is_forward_only_pairs() {
        let list: LinkedList<i32> = (1..4).collect();
        let c = all(&list).zip(iota(0, 100));
        assert_eq!(c.remaining(), Some(3));
        let pairs = c.transform(|(a, b)| (*a, b)).to_vec();
        assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_zip3_and_size() {
        let c = iota(0, 4) | zip3(iota(10, 12), repeat_n('x', 9));
        assert_eq!(c.len(), 2);
        assert_eq!(c.to_vec(), vec![(0, 10, 'x'), (1, 11, 'x')]);
    }

    #[test]
    fn test_zip_with_skips_both_sides() {
        let mut c = iota(0, 10).zip_with(iota(0, 10), |a, b| a * b);
        c.skip_forward(3);
        assert_eq!(c.next(), Some(9));
        assert_eq!(c.next_back(), Some(81));
    }
}
