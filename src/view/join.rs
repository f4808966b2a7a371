//! Views that chain sequences end to end: `concat`, `concat_all`, `flatten`, `join_with`.

use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sequence, SizedCursor,
};
use crate::pipe::Stage;

/// One sequence followed by another.
///
/// Created via [`View::concat`](super::View::concat) or [`concat`]. The first part is
/// dropped once it runs out, so a single-pass first input is never pulled past its end.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: Option<A>,
    second: B,
}

impl<A, B> Concat<A, B> {
    #[inline]
    pub(crate) fn new(first: A, second: B) -> Self {
        Concat {
            first: Some(first),
            second,
        }
    }
}

impl<A, B> Cursor for Concat<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = &mut self.first {
            match first.next() {
                Some(item) => return Some(item),
                None => self.first = None,
            }
        }
        self.second.next()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        let head = match &self.first {
            Some(first) => first.remaining()?,
            None => 0,
        };
        head.checked_add(self.second.remaining()?)
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = match &self.first {
            Some(first) => first.bounds(),
            None => (0, Some(0)),
        };
        let (lo2, hi2) = self.second.bounds();
        let hi = match (hi, hi2) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (lo.saturating_add(lo2), hi)
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        if let Some(first) = &mut self.first {
            skipped = first.skip_forward(n);
            if skipped == n {
                return n;
            }
            self.first = None;
        }
        skipped + self.second.skip_forward(n - skipped)
    }
}

impl<A, B> ForwardCursor for Concat<A, B>
where
    A: ForwardCursor,
    B: ForwardCursor<Item = A::Item>,
{
}

impl<A, B> BidirectionalCursor for Concat<A, B>
where
    A: BidirectionalCursor,
    B: BidirectionalCursor<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        match self.second.next_back() {
            Some(item) => Some(item),
            None => self.first.as_mut()?.next_back(),
        }
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        let skipped = self.second.skip_back(n);
        match &mut self.first {
            Some(first) if skipped < n => skipped + first.skip_back(n - skipped),
            _ => skipped,
        }
    }
}

impl<A, B> SizedCursor for Concat<A, B>
where
    A: SizedCursor,
    B: SizedCursor<Item = A::Item>,
{
    #[inline]
    fn len(&self) -> usize {
        self.first.as_ref().map_or(0, |first| first.len()) + self.second.len()
    }
}

impl<A, B> RandomAccessCursor for Concat<A, B>
where
    A: RandomAccessCursor,
    B: RandomAccessCursor<Item = A::Item>,
{
}

pipeable!([A, B] Concat<A, B>);

/// Bound form of `concat`.
#[derive(Debug, Clone)]
pub struct ConcatFn<S2> {
    other: S2,
}

/// Append `other` after the piped sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let out = iota(0, 3) | view::concat(iota(7, 9));
/// assert_eq!(out.to_vec(), vec![0, 1, 2, 7, 8]);
/// ```
#[inline]
pub fn concat<S2: Sequence>(other: S2) -> ConcatFn<S2> {
    ConcatFn { other }
}

impl<S, S2> Stage<S> for ConcatFn<S2>
where
    S: Sequence,
    S2: Sequence<Item = S::Item>,
{
    type Output = Concat<S::Cursor, S2::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Concat::new(seq.into_cursor(), self.other.into_cursor())
    }
}

/// A fixed number of same-typed sequences, one after the other.
///
/// Created via [`concat_all`]. Parts in `front..back` are still live; each end moves
/// inward as its part runs dry.
#[derive(Debug, Clone)]
pub struct ConcatAll<C, const N: usize> {
    parts: [C; N],
    front: usize,
    back: usize,
}

/// Chain every sequence in `parts`, in order.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let (a, b, c) = (vec![1, 2], vec![], vec![3]);
/// let out = view::concat_all([&a, &b, &c]);
/// assert_eq!(out.cloned().to_vec(), vec![1, 2, 3]);
/// ```
#[inline]
pub fn concat_all<S: Sequence, const N: usize>(parts: [S; N]) -> ConcatAll<S::Cursor, N> {
    ConcatAll {
        parts: parts.map(Sequence::into_cursor),
        front: 0,
        back: N,
    }
}

impl<C: Cursor, const N: usize> Cursor for ConcatAll<C, N> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        while self.front < self.back {
            if let Some(item) = self.parts[self.front].next() {
                return Some(item);
            }
            self.front += 1;
        }
        None
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.parts[self.front..self.back]
            .iter()
            .try_fold(0usize, |acc, part| acc.checked_add(part.remaining()?))
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while self.front < self.back {
            skipped += self.parts[self.front].skip_forward(n - skipped);
            if skipped == n {
                break;
            }
            self.front += 1;
        }
        skipped
    }
}

impl<C: ForwardCursor, const N: usize> ForwardCursor for ConcatAll<C, N> {}

impl<C: BidirectionalCursor, const N: usize> BidirectionalCursor for ConcatAll<C, N> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        while self.back > self.front {
            if let Some(item) = self.parts[self.back - 1].next_back() {
                return Some(item);
            }
            self.back -= 1;
        }
        None
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while self.back > self.front {
            skipped += self.parts[self.back - 1].skip_back(n - skipped);
            if skipped == n {
                break;
            }
            self.back -= 1;
        }
        skipped
    }
}

impl<C: SizedCursor, const N: usize> SizedCursor for ConcatAll<C, N> {
    #[inline]
    fn len(&self) -> usize {
        self.parts[self.front..self.back]
            .iter()
            .map(SizedCursor::len)
            .sum()
    }
}

impl<C: RandomAccessCursor, const N: usize> RandomAccessCursor for ConcatAll<C, N> {}

impl<S, C: Cursor, const N: usize> core::ops::BitOr<S> for ConcatAll<C, N>
where
    S: Stage<Self>,
{
    type Output = S::Output;

    #[inline]
    fn bitor(self, stage: S) -> S::Output {
        stage.apply(self)
    }
}

impl<C: Cursor, const N: usize> IntoIterator for ConcatAll<C, N> {
    type Item = C::Item;
    type IntoIter = crate::pipe::Iter<Self>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        crate::pipe::Iter::new(self)
    }
}

/// The elements of every inner sequence, in order, with the boundaries erased.
///
/// Created via [`View::flatten`](super::View::flatten) or [`flatten`]. `I` is the cursor
/// type of the inner sequences. Inner cursors are opened lazily from either end.
#[derive(Debug, Clone)]
pub struct Flatten<C, I> {
    outer: C,
    front: Option<I>,
    back: Option<I>,
}

impl<C, I> Flatten<C, I> {
    #[inline]
    pub(crate) fn new(outer: C) -> Self {
        Flatten {
            outer,
            front: None,
            back: None,
        }
    }
}

fn open_bounds<I: Cursor>(inner: &Option<I>) -> (usize, Option<usize>) {
    inner.as_ref().map_or((0, Some(0)), Cursor::bounds)
}

impl<C, I> Cursor for Flatten<C, I>
where
    C: Cursor,
    C::Item: Sequence<Cursor = I>,
    I: Cursor,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = &mut self.front {
                match inner.next() {
                    Some(item) => return Some(item),
                    None => self.front = None,
                }
            }
            match self.outer.next() {
                Some(seq) => self.front = Some(seq.into_cursor()),
                None => {
                    let item = self.back.as_mut()?.next();
                    if item.is_none() {
                        self.back = None;
                    }
                    return item;
                }
            }
        }
    }

    fn remaining(&self) -> Option<usize> {
        if self.outer.remaining() != Some(0) {
            return None;
        }
        let front = self.front.as_ref().map_or(Some(0), Cursor::remaining)?;
        let back = self.back.as_ref().map_or(Some(0), Cursor::remaining)?;
        front.checked_add(back)
    }

    fn bounds(&self) -> (usize, Option<usize>) {
        let (flo, fhi) = open_bounds(&self.front);
        let (blo, bhi) = open_bounds(&self.back);
        let lo = flo.saturating_add(blo);
        match (fhi, bhi, self.outer.remaining()) {
            (Some(f), Some(b), Some(0)) => (lo, f.checked_add(b)),
            _ => (lo, None),
        }
    }
}

impl<C, I> ForwardCursor for Flatten<C, I>
where
    C: ForwardCursor,
    C::Item: Sequence<Cursor = I>,
    I: ForwardCursor,
{
}

impl<C, I> BidirectionalCursor for Flatten<C, I>
where
    C: BidirectionalCursor,
    C::Item: Sequence<Cursor = I>,
    I: BidirectionalCursor,
{
    fn next_back(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = &mut self.back {
                match inner.next_back() {
                    Some(item) => return Some(item),
                    None => self.back = None,
                }
            }
            match self.outer.next_back() {
                Some(seq) => self.back = Some(seq.into_cursor()),
                None => {
                    let item = self.front.as_mut()?.next_back();
                    if item.is_none() {
                        self.front = None;
                    }
                    return item;
                }
            }
        }
    }
}

pipeable!([C, I] Flatten<C, I>);

/// Bound form of `flatten`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenFn;

/// Concatenate the inner sequences of the piped sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// let flat = all(&nested) | view::flatten();
/// assert_eq!(flat.cloned().to_vec(), vec![1, 2, 3]);
/// ```
#[inline]
pub fn flatten() -> FlattenFn {
    FlattenFn
}

impl<S> Stage<S> for FlattenFn
where
    S: Sequence,
    S::Item: Sequence,
{
    type Output = Flatten<S::Cursor, <S::Item as Sequence>::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Flatten::new(seq.into_cursor())
    }
}

/// Inner sequences concatenated with a separator element between each pair.
///
/// Created via [`View::join_with`](super::View::join_with) or [`join_with`]. An empty
/// inner sequence still gets its separators, so the number of separators is always one
/// less than the number of inner sequences.
#[derive(Debug, Clone)]
pub struct JoinWith<C, I, T> {
    outer: C,
    inner: Option<I>,
    separator: T,
    started: bool,
}

impl<C, I, T> JoinWith<C, I, T> {
    #[inline]
    pub(crate) fn new(outer: C, separator: T) -> Self {
        JoinWith {
            outer,
            inner: None,
            separator,
            started: false,
        }
    }
}

impl<C, I, T> Cursor for JoinWith<C, I, T>
where
    C: Cursor,
    C::Item: Sequence<Cursor = I>,
    I: Cursor<Item = T>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.next() {
                    Some(item) => return Some(item),
                    None => self.inner = None,
                }
            }
            let seq = self.outer.next()?;
            self.inner = Some(seq.into_cursor());
            if std::mem::replace(&mut self.started, true) {
                return Some(self.separator.clone());
            }
        }
    }
}

impl<C, I, T> ForwardCursor for JoinWith<C, I, T>
where
    C: ForwardCursor,
    C::Item: Sequence<Cursor = I>,
    I: ForwardCursor<Item = T>,
    T: Clone,
{
}

pipeable!([C, I, T] JoinWith<C, I, T>);

/// Bound form of `join_with`.
#[derive(Debug, Clone, Copy)]
pub struct JoinWithFn<T> {
    separator: T,
}

/// Flatten the piped sequence, inserting `separator` between inner sequences.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let words = ["ab", "c"];
/// let joined = all(&words).cloned() | view::join_with('-');
/// assert_eq!(joined.to::<String>(), "ab-c");
/// ```
#[inline]
pub fn join_with<T>(separator: T) -> JoinWithFn<T> {
    JoinWithFn { separator }
}

impl<S, T> Stage<S> for JoinWithFn<T>
where
    S: Sequence,
    S::Item: Sequence<Item = T>,
    T: Clone,
{
    type Output = JoinWith<S::Cursor, <S::Item as Sequence>::Cursor, T>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        JoinWith::new(seq.into_cursor(), self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::collections::LinkedList;

    #[test]
    fn test_concat_keeps_random_access() {
        let mut c = iota(0, 3).concat(iota(10, 13));
        assert_eq!(c.len(), 6);
        assert_eq!(c.skip_forward(4), 4);
        assert_eq!(c.next(), Some(11));
        assert_eq!(c.next_back(), Some(12));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_concat_back_crosses_into_first() {
        let mut c = iota(0, 2).concat(single(5));
        assert_eq!(c.skip_back(2), 2);
        assert_eq!(c.next_back(), Some(0));
        assert!(c.is_empty());
    }

    #[test]
    fn test_concat_all_skips_empty_parts() {
        let parts = [vec![1], vec![], vec![2, 3], vec![]];
        let mut c = concat_all([&parts[0], &parts[1], &parts[2], &parts[3]]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.next_back(), Some(&3));
        assert_eq!(c.skip_forward(1), 1);
        assert_eq!(c.next(), Some(&2));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_flatten_from_both_ends() {
        let nested = vec![vec![1, 2], vec![], vec![3, 4]];
        let mut c = all(&nested).flatten();
        assert_eq!(c.next(), Some(&1));
        assert_eq!(c.next_back(), Some(&4));
        assert_eq!(c.next_back(), Some(&3));
        assert_eq!(c.next_back(), Some(&2));
        assert_eq!(c.next(), None);
        assert_eq!(c.next_back(), None);
    }

    #[test]
    fn test_flatten_size_known_only_at_the_end() {
        let nested = vec![vec![1, 2], vec![3]];
        let mut c = all(&nested).flatten();
        assert_eq!(c.remaining(), None);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.remaining(), Some(0));
    }

    #[test]
    fn test_flatten_over_lists() {
        let nested: LinkedList<Vec<char>> = [vec!['a'], vec!['b', 'c']].into_iter().collect();
        let s: String = all(&nested).flatten().cloned().to();
        assert_eq!(s, "abc");
    }

    #[test]
    fn test_join_with_separators_between_only() {
        let nested = vec![vec![1], vec![], vec![2, 3]];
        let out = all(&nested).cloned().join_with(0).to_vec();
        assert_eq!(out, vec![1, 0, 0, 2, 3]);
        let none: Vec<Vec<i32>> = Vec::new();
        assert!(all(&none).cloned().join_with(0).to_vec().is_empty());
    }
}
