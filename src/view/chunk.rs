//! Grouping views: `chunk`, `sliding`, `split`, `split_when`.
//!
//! Groups are themselves lazy: each one is a [`Take`] over a saved copy of the input
//! cursor, so the input must be forward and nothing is buffered.

use std::borrow::Borrow;
use std::marker::PhantomData;

use super::take::Take;
use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sequence, SizedCursor,
};
use crate::error::{non_zero, Result};
use crate::pipe::Stage;
use crate::predicate::{EqualTo, Predicate};

#[inline]
fn groups_in(available: usize, width: usize) -> usize {
    available / width + usize::from(available % width != 0)
}

/// Consecutive groups of `width` elements; the last group may be shorter.
///
/// Created via [`View::chunk`](super::View::chunk) or [`chunk`].
#[derive(Debug, Clone)]
pub struct Chunk<C> {
    cursor: C,
    width: usize,
}

impl<C> Chunk<C> {
    #[inline]
    pub(crate) fn new(cursor: C, width: usize) -> Result<Self> {
        let width = non_zero(width, "chunk width")?;
        Ok(Chunk { cursor, width })
    }
}

impl<C: ForwardCursor> Cursor for Chunk<C> {
    type Item = Take<C>;

    #[inline]
    fn next(&mut self) -> Option<Take<C>> {
        let group = Take::new(self.cursor.clone(), self.width);
        if self.cursor.skip_forward(self.width) == 0 {
            return None;
        }
        Some(group)
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.cursor.remaining().map(|r| groups_in(r, self.width))
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.cursor.bounds();
        (
            groups_in(lo, self.width),
            hi.map(|hi| groups_in(hi, self.width)),
        )
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        let skipped = self.cursor.skip_forward(n.saturating_mul(self.width));
        groups_in(skipped, self.width)
    }
}

impl<C: ForwardCursor> ForwardCursor for Chunk<C> {}

impl<C: RandomAccessCursor> BidirectionalCursor for Chunk<C> {
    fn next_back(&mut self) -> Option<Take<C>> {
        let len = self.cursor.len();
        if len == 0 {
            return None;
        }
        let last = match len % self.width {
            0 => self.width,
            short => short,
        };
        let mut tail = self.cursor.clone();
        tail.skip_forward(len - last);
        self.cursor.skip_back(last);
        Some(Take::new(tail, last))
    }
}

impl<C: ForwardCursor + SizedCursor> SizedCursor for Chunk<C> {
    #[inline]
    fn len(&self) -> usize {
        groups_in(self.cursor.len(), self.width)
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Chunk<C> {}

pipeable!([C] Chunk<C>);

/// Bound form of `chunk`.
#[derive(Debug, Clone, Copy)]
pub struct ChunkFn {
    width: usize,
}

/// Group the piped sequence into runs of `width` elements. A zero width is a range error.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let groups = iota(1, 7) | view::chunk(2).unwrap();
/// let groups: Vec<Vec<i32>> = groups.transform(|g| g.to_vec()).to_vec();
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
/// ```
#[inline]
pub fn chunk(width: usize) -> Result<ChunkFn> {
    let width = non_zero(width, "chunk width")?;
    Ok(ChunkFn { width })
}

impl<S> Stage<S> for ChunkFn
where
    S: Sequence,
    S::Cursor: ForwardCursor,
{
    type Output = Chunk<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Chunk {
            cursor: seq.into_cursor(),
            width: self.width,
        }
    }
}

/// Every run of `width` consecutive elements, overlapping, advancing one at a time.
///
/// Created via [`View::sliding`](super::View::sliding) or [`sliding`]. An input shorter
/// than `width` has no windows.
#[derive(Debug, Clone)]
pub struct Sliding<C> {
    cursor: C,
    width: usize,
}

impl<C> Sliding<C> {
    #[inline]
    pub(crate) fn new(cursor: C, width: usize) -> Result<Self> {
        let width = non_zero(width, "window width")?;
        Ok(Sliding { cursor, width })
    }

    #[inline]
    fn windows_in(&self, available: usize) -> usize {
        (available + 1).saturating_sub(self.width)
    }
}

impl<C: ForwardCursor> Cursor for Sliding<C> {
    type Item = Take<C>;

    #[inline]
    fn next(&mut self) -> Option<Take<C>> {
        match self.cursor.remaining() {
            Some(r) if r < self.width => return None,
            Some(_) => {}
            None => {
                let mut ahead = self.cursor.clone();
                if ahead.skip_forward(self.width) < self.width {
                    return None;
                }
            }
        }
        let window = Take::new(self.cursor.clone(), self.width);
        self.cursor.skip_forward(1);
        Some(window)
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.cursor.remaining().map(|r| self.windows_in(r))
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.cursor.bounds();
        (self.windows_in(lo), hi.map(|hi| self.windows_in(hi)))
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        match self.remaining() {
            Some(count) => {
                let k = n.min(count);
                self.cursor.skip_forward(k);
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

impl<C: ForwardCursor> ForwardCursor for Sliding<C> {}

impl<C: RandomAccessCursor> BidirectionalCursor for Sliding<C> {
    fn next_back(&mut self) -> Option<Take<C>> {
        let len = self.cursor.len();
        if self.windows_in(len) == 0 {
            return None;
        }
        let mut tail = self.cursor.clone();
        tail.skip_forward(len - self.width);
        self.cursor.skip_back(1);
        Some(Take::new(tail, self.width))
    }
}

impl<C: ForwardCursor + SizedCursor> SizedCursor for Sliding<C> {
    #[inline]
    fn len(&self) -> usize {
        self.windows_in(self.cursor.len())
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Sliding<C> {}

pipeable!([C] Sliding<C>);

/// Bound form of `sliding`.
#[derive(Debug, Clone, Copy)]
pub struct SlidingFn {
    width: usize,
}

/// Overlapping windows of `width` elements. A zero width is a range error.
#[inline]
pub fn sliding(width: usize) -> Result<SlidingFn> {
    let width = non_zero(width, "window width")?;
    Ok(SlidingFn { width })
}

impl<S> Stage<S> for SlidingFn
where
    S: Sequence,
    S::Cursor: ForwardCursor,
{
    type Output = Sliding<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Sliding {
            cursor: seq.into_cursor(),
            width: self.width,
        }
    }
}

/// Groups between separators, separators themselves dropped.
///
/// Created via [`View::split`](super::View::split), [`View::split_when`](super::View::split_when),
/// [`split`] or [`split_when`]. A separator at either boundary produces an empty group
/// there, and two adjacent separators produce an empty group between them. An empty input
/// produces no groups at all.
#[derive(Debug, Clone)]
pub struct Split<C, P> {
    cursor: C,
    pred: P,
    trailing: bool,
}

impl<C, P> Split<C, P> {
    #[inline]
    pub(crate) fn new(cursor: C, pred: P) -> Self {
        Split {
            cursor,
            pred,
            trailing: false,
        }
    }
}

impl<C, P> Cursor for Split<C, P>
where
    C: ForwardCursor,
    P: Predicate<C::Item>,
{
    type Item = Take<C>;

    fn next(&mut self) -> Option<Take<C>> {
        let mut ahead = self.cursor.clone();
        let mut n = 0;
        let found = loop {
            match ahead.next() {
                Some(item) if self.pred.test(&item) => break true,
                Some(_) => n += 1,
                None => break false,
            }
        };
        let group = Take::new(std::mem::replace(&mut self.cursor, ahead), n);
        let trailing = std::mem::replace(&mut self.trailing, found);
        if !found && n == 0 && !trailing {
            return None;
        }
        Some(group)
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let hi = self.cursor.bounds().1;
        (0, hi.map(|hi| hi.saturating_add(1)))
    }
}

impl<C, P> ForwardCursor for Split<C, P>
where
    C: ForwardCursor,
    P: Predicate<C::Item> + Clone,
{
}

pipeable!([C, P] Split<C, P>);

/// Bound form of `split`.
#[derive(Debug, Clone, Copy)]
pub struct SplitFn<V> {
    separator: V,
}

/// Break the piped sequence at every element equal to `separator`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let words = "one two  three".chars().collect::<Vec<_>>();
/// let parts = all(&words) | view::split(' ');
/// let parts: Vec<String> = parts.transform(|g| g.cloned().to::<String>()).to_vec();
/// assert_eq!(parts, vec!["one", "two", "", "three"]);
/// ```
#[inline]
pub fn split<V>(separator: V) -> SplitFn<V> {
    SplitFn { separator }
}

impl<S, V> Stage<S> for SplitFn<V>
where
    S: Sequence,
    S::Cursor: ForwardCursor,
    S::Item: Borrow<V>,
    V: PartialEq,
{
    type Output = Split<S::Cursor, EqualTo<V>>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Split::new(seq.into_cursor(), EqualTo(self.separator))
    }
}

/// Bound form of `split_when`.
pub struct SplitWhenFn<T, P> {
    pred: P,
    _item: PhantomData<fn(&T)>,
}

/// Break the piped sequence at every element matching `pred`.
#[inline]
pub fn split_when<T, P>(pred: P) -> SplitWhenFn<T, P>
where
    P: FnMut(&T) -> bool,
{
    SplitWhenFn {
        pred,
        _item: PhantomData,
    }
}

impl<S, T, P> Stage<S> for SplitWhenFn<T, P>
where
    S: Sequence<Item = T>,
    S::Cursor: ForwardCursor,
    P: FnMut(&T) -> bool,
{
    type Output = Split<S::Cursor, P>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Split::new(seq.into_cursor(), self.pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;
    use crate::prelude::*;
    use std::collections::LinkedList;

    fn groups<C>(c: C) -> Vec<Vec<i32>>
    where
        C: Cursor,
        C::Item: Cursor<Item = i32>,
    {
        c.transform(|g: C::Item| g.to_vec()).to_vec()
    }

    #[test]
    fn test_chunk_even_and_ragged() {
        assert_eq!(
            groups(iota(1, 7).chunk(2).unwrap()),
            vec![vec![1, 2], vec![3, 4], vec![5, 6]]
        );
        assert_eq!(
            groups(iota(1, 6).chunk(2).unwrap()),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(iota(1, 6).chunk(2).unwrap().len(), 3);
    }

    #[test]
    fn test_chunk_zero_width_is_error() {
        assert_eq!(
            iota(0, 3).chunk(0).err(),
            Some(RangeError::ZeroCount { what: "chunk width" })
        );
        assert!(chunk(0).is_err());
    }

    #[test]
    fn test_chunk_from_back_takes_short_group_first() {
        let mut c = iota(0, 7).chunk(3).unwrap();
        assert_eq!(c.next_back().map(|g| g.to_vec()), Some(vec![6]));
        assert_eq!(c.next_back().map(|g| g.to_vec()), Some(vec![3, 4, 5]));
        assert_eq!(c.next().map(|g| g.to_vec()), Some(vec![0, 1, 2]));
        assert!(c.next().is_none());
    }

    #[test]
    fn test_chunk_over_list() {
        let list: LinkedList<i32> = (0..5).collect();
        let c = all(&list).cloned().chunk(4).unwrap();
        assert_eq!(c.remaining(), Some(2));
        assert_eq!(groups(c), vec![vec![0, 1, 2, 3], vec![4]]);
    }

    #[test]
    fn test_sliding_windows() {
        let c = iota(0, 5).sliding(3).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(
            groups(c),
            vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]
        );
        assert!(iota(0, 2).sliding(3).unwrap().next().is_none());
    }

    #[test]
    fn test_sliding_on_unsized_input() {
        let v = vec![1, 2, 3, 4];
        let c = all(&v).cloned().filter(|x| *x != 3).sliding(2).unwrap();
        assert_eq!(groups(c), vec![vec![1, 2], vec![2, 4]]);
    }

    #[test]
    fn test_sliding_from_back() {
        let mut c = iota(0, 4).sliding(2).unwrap();
        assert_eq!(c.next_back().map(|w| w.to_vec()), Some(vec![2, 3]));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_split_boundaries() {
        let v = vec![0, 1, 0, 0, 2, 0];
        let c = all(&v).cloned().split(0);
        assert_eq!(
            groups(c),
            vec![vec![], vec![1], vec![], vec![2], vec![]]
        );
    }

    #[test]
    fn test_split_without_separator_and_empty() {
        assert_eq!(groups(iota(1, 4).split(0)), vec![vec![1, 2, 3]]);
        assert!(groups(iota(0, 0).split(0)).is_empty());
        assert_eq!(groups(single(0).split(0)), vec![vec![], vec![]]);
    }

    #[test]
    fn test_split_when_predicate() {
        let c = iota(1, 10) | split_when(|x: &i32| x % 4 == 0);
        assert_eq!(groups(c), vec![vec![1, 2, 3], vec![5, 6, 7], vec![9]]);
    }
}
