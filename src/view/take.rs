//! Counting views: `take`, `drop`, `take_last`, `drop_last`, `slice`, `stride`.
//!
//! Counts larger than the input are never errors: `take` yields everything and `drop`
//! yields nothing. The skip a view owes its input is kept pending until the first pull, so
//! building a pipeline never touches the source.

use crate::cursor::{
    size, BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sequence, SizedCursor,
};
use crate::error::{non_zero, ordered, Result};
use crate::pipe::Stage;

/// At most `n` leading elements.
///
/// Created via [`View::take`](super::View::take) or [`take`]. Over a random-access input
/// it can also be consumed from the back: the first back pull trims the input to `n`.
#[derive(Debug, Clone)]
pub struct Take<C> {
    cursor: C,
    n: usize,
}

impl<C> Take<C> {
    #[inline]
    pub(crate) fn new(cursor: C, n: usize) -> Self {
        Take { cursor, n }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.n == 0 {
            return None;
        }
        match self.cursor.next() {
            Some(item) => {
                self.n -= 1;
                Some(item)
            }
            None => {
                self.n = 0;
                None
            }
        }
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        if self.n == 0 {
            return Some(0);
        }
        self.cursor.remaining().map(|r| r.min(self.n))
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.cursor.bounds();
        let hi = match hi {
            Some(hi) => hi.min(self.n),
            None => self.n,
        };
        (lo.min(self.n), Some(hi))
    }

    #[inline]
    fn skip_forward(&mut self, k: usize) -> usize {
        let want = k.min(self.n);
        let skipped = self.cursor.skip_forward(want);
        self.n = if skipped < want { 0 } else { self.n - skipped };
        skipped
    }
}

impl<C: RandomAccessCursor> Take<C> {
    #[inline]
    fn trim_back(&mut self) {
        let len = self.cursor.len();
        if len > self.n {
            self.cursor.skip_back(len - self.n);
        }
        self.n = self.cursor.len();
    }
}

impl<C: ForwardCursor> ForwardCursor for Take<C> {}

impl<C: RandomAccessCursor> BidirectionalCursor for Take<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        self.trim_back();
        let item = self.cursor.next_back()?;
        self.n -= 1;
        Some(item)
    }

    #[inline]
    fn skip_back(&mut self, k: usize) -> usize {
        self.trim_back();
        let skipped = self.cursor.skip_back(k);
        self.n -= skipped;
        skipped
    }
}

impl<C: SizedCursor> SizedCursor for Take<C> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len().min(self.n)
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Take<C> {}

pipeable!([C] Take<C>);

/// Bound form of `take`.
#[derive(Debug, Clone, Copy)]
pub struct TakeFn {
    n: usize,
}

/// Keep the first `n` elements.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// assert_eq!((iota_from(0u64) | view::take(3)).to_vec(), vec![0, 1, 2]);
/// assert_eq!((iota(0, 2) | view::take(10)).to_vec(), vec![0, 1]);
/// ```
#[inline]
pub fn take(n: usize) -> TakeFn {
    TakeFn { n }
}

impl<S: Sequence> Stage<S> for TakeFn {
    type Output = Take<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Take::new(seq.into_cursor(), self.n)
    }
}

/// Everything after the first `n` elements.
///
/// Created via [`View::drop`](super::View::drop) or [`drop`]. The skip is O(1) for
/// random-access inputs and element by element otherwise.
#[derive(Debug, Clone)]
pub struct DropFront<C> {
    cursor: C,
    pending: usize,
}

impl<C> DropFront<C> {
    #[inline]
    pub(crate) fn new(cursor: C, n: usize) -> Self {
        DropFront { cursor, pending: n }
    }
}

impl<C: Cursor> DropFront<C> {
    #[inline]
    fn settle(&mut self) {
        if self.pending > 0 {
            self.cursor.skip_forward(self.pending);
            self.pending = 0;
        }
    }
}

impl<C: Cursor> Cursor for DropFront<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.settle();
        self.cursor.next()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.cursor
            .remaining()
            .map(|r| r.saturating_sub(self.pending))
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.cursor.bounds();
        (
            lo.saturating_sub(self.pending),
            hi.map(|hi| hi.saturating_sub(self.pending)),
        )
    }

    #[inline]
    fn skip_forward(&mut self, k: usize) -> usize {
        self.settle();
        self.cursor.skip_forward(k)
    }
}

impl<C: ForwardCursor> ForwardCursor for DropFront<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for DropFront<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        self.settle();
        self.cursor.next_back()
    }

    #[inline]
    fn skip_back(&mut self, k: usize) -> usize {
        self.settle();
        self.cursor.skip_back(k)
    }
}

impl<C: SizedCursor> SizedCursor for DropFront<C> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len().saturating_sub(self.pending)
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for DropFront<C> {}

pipeable!([C] DropFront<C>);

/// Bound form of `drop`.
#[derive(Debug, Clone, Copy)]
pub struct DropFn {
    n: usize,
}

/// Skip the first `n` elements.
#[inline]
pub fn drop(n: usize) -> DropFn {
    DropFn { n }
}

impl<S: Sequence> Stage<S> for DropFn {
    type Output = DropFront<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        DropFront::new(seq.into_cursor(), self.n)
    }
}

/// The last `n` elements.
///
/// Created via [`View::take_last`](super::View::take_last) or [`take_last`]. The length
/// is measured on the first pull: O(1) for sized inputs, one counting pass otherwise.
#[derive(Debug, Clone)]
pub struct TakeLast<C> {
    cursor: C,
    n: usize,
    settled: bool,
}

impl<C> TakeLast<C> {
    #[inline]
    pub(crate) fn new(cursor: C, n: usize) -> Self {
        TakeLast {
            cursor,
            n,
            settled: false,
        }
    }
}

impl<C: ForwardCursor> TakeLast<C> {
    #[inline]
    fn settle(&mut self) {
        if !self.settled {
            let total = size(&self.cursor);
            self.cursor.skip_forward(total.saturating_sub(self.n));
            self.settled = true;
        }
    }
}

impl<C: ForwardCursor> Cursor for TakeLast<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.settle();
        self.cursor.next()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.cursor.remaining().map(|r| r.min(self.n))
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.cursor.bounds();
        (lo.min(self.n), Some(hi.map_or(self.n, |hi| hi.min(self.n))))
    }

    #[inline]
    fn skip_forward(&mut self, k: usize) -> usize {
        self.settle();
        self.cursor.skip_forward(k)
    }
}

impl<C: ForwardCursor> ForwardCursor for TakeLast<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for TakeLast<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        self.settle();
        self.cursor.next_back()
    }

    #[inline]
    fn skip_back(&mut self, k: usize) -> usize {
        self.settle();
        self.cursor.skip_back(k)
    }
}

impl<C: ForwardCursor + SizedCursor> SizedCursor for TakeLast<C> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len().min(self.n)
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for TakeLast<C> {}

pipeable!([C] TakeLast<C>);

/// Bound form of `take_last`.
#[derive(Debug, Clone, Copy)]
pub struct TakeLastFn {
    n: usize,
}

/// Keep the last `n` elements.
#[inline]
pub fn take_last(n: usize) -> TakeLastFn {
    TakeLastFn { n }
}

impl<S> Stage<S> for TakeLastFn
where
    S: Sequence,
    S::Cursor: ForwardCursor,
{
    type Output = TakeLast<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        TakeLast::new(seq.into_cursor(), self.n)
    }
}

/// Everything except the last `n` elements.
///
/// Created via [`View::drop_last`](super::View::drop_last) or [`drop_last`]. The input
/// always holds exactly `left + n` elements (or `left` once the back has been trimmed).
#[derive(Debug, Clone)]
pub struct DropLast<C> {
    cursor: C,
    n: usize,
    left: Option<usize>,
    trimmed: bool,
}

impl<C> DropLast<C> {
    #[inline]
    pub(crate) fn new(cursor: C, n: usize) -> Self {
        DropLast {
            cursor,
            n,
            left: None,
            trimmed: false,
        }
    }
}

impl<C: ForwardCursor> DropLast<C> {
    #[inline]
    fn settle(&mut self) -> usize {
        match self.left {
            Some(left) => left,
            None => {
                let left = size(&self.cursor).saturating_sub(self.n);
                self.left = Some(left);
                left
            }
        }
    }
}

impl<C: ForwardCursor> Cursor for DropLast<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        let left = self.settle();
        if left == 0 {
            return None;
        }
        self.left = Some(left - 1);
        self.cursor.next()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        match self.left {
            Some(left) => Some(left),
            None => self.cursor.remaining().map(|r| r.saturating_sub(self.n)),
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        match self.left {
            Some(left) => (left, Some(left)),
            None => {
                let (lo, hi) = self.cursor.bounds();
                (
                    lo.saturating_sub(self.n),
                    hi.map(|hi| hi.saturating_sub(self.n)),
                )
            }
        }
    }

    #[inline]
    fn skip_forward(&mut self, k: usize) -> usize {
        let left = self.settle();
        let skipped = self.cursor.skip_forward(k.min(left));
        self.left = Some(left - skipped);
        skipped
    }
}

impl<C: ForwardCursor> ForwardCursor for DropLast<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for DropLast<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        let left = self.settle();
        if left == 0 {
            return None;
        }
        if !self.trimmed {
            self.cursor.skip_back(self.n);
            self.trimmed = true;
        }
        self.left = Some(left - 1);
        self.cursor.next_back()
    }
}

impl<C: ForwardCursor + SizedCursor> SizedCursor for DropLast<C> {
    #[inline]
    fn len(&self) -> usize {
        match self.left {
            Some(left) => left,
            None => self.cursor.len().saturating_sub(self.n),
        }
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for DropLast<C> {}

pipeable!([C] DropLast<C>);

/// Bound form of `drop_last`.
#[derive(Debug, Clone, Copy)]
pub struct DropLastFn {
    n: usize,
}

/// Skip the last `n` elements.
#[inline]
pub fn drop_last(n: usize) -> DropLastFn {
    DropLastFn { n }
}

impl<S> Stage<S> for DropLastFn
where
    S: Sequence,
    S::Cursor: ForwardCursor,
{
    type Output = DropLast<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        DropLast::new(seq.into_cursor(), self.n)
    }
}

/// Elements `from..to` of a sequence, as a [`Take`] over a [`DropFront`].
pub type Slice<C> = Take<DropFront<C>>;

#[inline]
pub(crate) fn slice_of<C>(cursor: C, from: usize, to: usize) -> Result<Slice<C>> {
    ordered(from, to)?;
    Ok(Take::new(DropFront::new(cursor, from), to - from))
}

/// Bound form of `slice`.
#[derive(Debug, Clone, Copy)]
pub struct SliceFn {
    from: usize,
    to: usize,
}

/// Keep positions `from..to`. `from > to` is a range error; `to` past the end is not.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let middle = iota(0, 10) | view::slice(3, 6)?;
/// assert_eq!(middle.to_vec(), vec![3, 4, 5]);
/// assert!(view::slice(6, 3).is_err());
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
#[inline]
pub fn slice(from: usize, to: usize) -> Result<SliceFn> {
    ordered(from, to)?;
    Ok(SliceFn { from, to })
}

impl<S: Sequence> Stage<S> for SliceFn {
    type Output = Slice<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Take::new(DropFront::new(seq.into_cursor(), self.from), self.to - self.from)
    }
}

/// Every `step`-th element, starting with the first.
///
/// Created via [`View::stride`](super::View::stride) or [`stride`]. `pending` is how many
/// input elements must be skipped before the next yield.
#[derive(Debug, Clone)]
pub struct Stride<C> {
    cursor: C,
    step: usize,
    pending: usize,
}

impl<C> Stride<C> {
    #[inline]
    pub(crate) fn new(cursor: C, step: usize) -> Result<Self> {
        let step = non_zero(step, "stride step")?;
        Ok(Stride {
            cursor,
            step,
            pending: 0,
        })
    }

    #[inline]
    fn count_in(&self, available: usize) -> usize {
        if available > self.pending {
            (available - self.pending - 1) / self.step + 1
        } else {
            0
        }
    }
}

impl<C: Cursor> Cursor for Stride<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.pending > 0 {
            let want = self.pending;
            if self.cursor.skip_forward(want) < want {
                self.pending = 0;
                return None;
            }
        }
        let item = self.cursor.next()?;
        self.pending = self.step - 1;
        Some(item)
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.cursor.remaining().map(|r| self.count_in(r))
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.cursor.bounds();
        (self.count_in(lo), hi.map(|hi| self.count_in(hi)))
    }

    #[inline]
    fn skip_forward(&mut self, k: usize) -> usize {
        let Some(available) = self.cursor.remaining() else {
            let mut skipped = 0;
            while skipped < k && self.next().is_some() {
                skipped += 1;
            }
            return skipped;
        };
        let k = k.min(self.count_in(available));
        if k > 0 {
            self.cursor.skip_forward(self.pending + 1 + (k - 1) * self.step);
            self.pending = self.step - 1;
        }
        k
    }
}

impl<C: ForwardCursor> ForwardCursor for Stride<C> {}

impl<C: RandomAccessCursor> BidirectionalCursor for Stride<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        let count = self.count_in(self.cursor.len());
        if count == 0 {
            return None;
        }
        let last = self.pending + (count - 1) * self.step;
        let len = self.cursor.len();
        self.cursor.skip_back(len - 1 - last);
        self.cursor.next_back()
    }
}

impl<C: SizedCursor> SizedCursor for Stride<C> {
    #[inline]
    fn len(&self) -> usize {
        self.count_in(self.cursor.len())
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Stride<C> {}

pipeable!([C] Stride<C>);

/// Bound form of `stride`.
#[derive(Debug, Clone, Copy)]
pub struct StrideFn {
    step: usize,
}

/// Keep every `step`-th element. A zero step is a range error.
#[inline]
pub fn stride(step: usize) -> Result<StrideFn> {
    let step = non_zero(step, "stride step")?;
    Ok(StrideFn { step })
}

impl<S: Sequence> Stage<S> for StrideFn {
    type Output = Stride<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Stride {
            cursor: seq.into_cursor(),
            step: self.step,
            pending: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;
    use crate::prelude::*;
    use std::collections::LinkedList;

    #[test]
    fn test_take_from_back_trims_first() {
        let mut c = iota(0, 10).take(4);
        assert_eq!(c.next_back(), Some(3));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.len(), 2);
        assert_eq!(c.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_take_stops_without_pulling_more() {
        let mut pulled = 0;
        let mut c = generate(|| {
            pulled += 1;
            Some(pulled)
        })
        .take(3);
        while c.next().is_some() {}
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_drop_is_lazy_until_pulled() {
        let list: LinkedList<i32> = (0..10).collect();
        let mut c = all(&list).drop(4);
        assert_eq!(c.remaining(), Some(6));
        assert_eq!(c.next(), Some(&4));
        assert_eq!(c.next_back(), Some(&9));
    }

    #[test]
    fn test_drop_more_than_length() {
        assert!(iota(0, 3).drop(10).to_vec().is_empty());
        assert_eq!(iota(0, 3).drop(10).len(), 0);
    }

    #[test]
    fn test_take_last_and_drop_last_on_forward_only() {
        let v = vec![1, 2, 3, 4, 5];
        let fwd = || from_iter(v.iter().filter(|_| true));
        assert_eq!(fwd().take_last(2).cloned().to_vec(), vec![4, 5]);
        assert_eq!(fwd().drop_last(2).cloned().to_vec(), vec![1, 2, 3]);
        assert_eq!(fwd().take_last(9).cloned().to_vec(), v);
        assert!(fwd().drop_last(9).cloned().to_vec().is_empty());
    }

    #[test]
    fn test_drop_last_from_back() {
        let mut c = iota(0, 6).drop_last(2);
        assert_eq!(c.next_back(), Some(3));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.len(), 2);
        assert_eq!(c.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_slice_clamps_end() {
        let out = iota(0, 5) | slice(3, 100).unwrap();
        assert_eq!(out.to_vec(), vec![3, 4]);
        assert_eq!(
            iota(0, 5).slice(4, 2).err(),
            Some(RangeError::InvertedBounds { from: 4, to: 2 })
        );
    }

    #[test]
    fn test_stride_sizes_and_back() {
        let c = iota(0, 10).stride(3).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.clone().to_vec(), vec![0, 3, 6, 9]);
        let mut c = iota(0, 8).stride(3).unwrap();
        assert_eq!(c.next_back(), Some(6));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.next_back(), Some(3));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_stride_skip_forward() {
        let mut c = iota(0, 20).stride(4).unwrap();
        assert_eq!(c.skip_forward(2), 2);
        assert_eq!(c.next(), Some(8));
        assert_eq!(c.remaining(), Some(2));
    }

    #[test]
    fn test_stride_zero_is_an_error() {
        assert_eq!(
            stride(0).err(),
            Some(RangeError::ZeroCount {
                what: "stride step"
            })
        );
    }
}
