//! Element-wise views: `transform`, `enumerate`, `replace`, `partial_sum`, `unique`, and the
//! projections `cloned`, `keys`, `values` built on [`Transform`].

use std::borrow::Borrow;
use std::marker::PhantomData;
use std::ops::Add;

use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sequence, SizedCursor,
};
use crate::pipe::Stage;
use crate::predicate::{EqualTo, Predicate};

/// Each element passed through a function.
///
/// Skipping never calls the function, so `transform(f).drop(n)` costs nothing for the
/// dropped elements. Keeps every capability of the input.
#[derive(Debug, Clone)]
pub struct Transform<C, F> {
    cursor: C,
    f: F,
}

impl<C, F> Transform<C, F> {
    #[inline]
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Transform { cursor, f }
    }
}

impl<B, C, F> Cursor for Transform<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.cursor.next().map(&mut self.f)
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
        self.cursor.skip_forward(n)
    }
}

impl<B, C, F> ForwardCursor for Transform<C, F>
where
    C: ForwardCursor,
    F: FnMut(C::Item) -> B + Clone,
{
}

impl<B, C, F> BidirectionalCursor for Transform<C, F>
where
    C: BidirectionalCursor,
    F: FnMut(C::Item) -> B + Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.cursor.next_back().map(&mut self.f)
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        self.cursor.skip_back(n)
    }
}

impl<B, C, F> SizedCursor for Transform<C, F>
where
    C: SizedCursor,
    F: FnMut(C::Item) -> B,
{
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len()
    }
}

impl<B, C, F> RandomAccessCursor for Transform<C, F>
where
    C: RandomAccessCursor,
    F: FnMut(C::Item) -> B + Clone,
{
}

pipeable!([C, F] Transform<C, F>);

/// Bound form of `transform`.
pub struct TransformFn<T, F> {
    f: F,
    _item: PhantomData<fn(T)>,
}

/// Map every element through `f`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let squares = iota(1, 5) | view::transform(|x: i32| x * x);
/// assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
/// ```
#[inline]
pub fn transform<T, B, F>(f: F) -> TransformFn<T, F>
where
    F: FnMut(T) -> B,
{
    TransformFn {
        f,
        _item: PhantomData,
    }
}

impl<S, T, B, F> Stage<S> for TransformFn<T, F>
where
    S: Sequence<Item = T>,
    F: FnMut(T) -> B,
{
    type Output = Transform<S::Cursor, F>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Transform::new(seq.into_cursor(), self.f)
    }
}

/// Owned copies of borrowed elements.
pub type Cloned<C, T> = Transform<C, fn(&T) -> T>;

/// First component of each pair.
pub type Keys<C, K, V> = Transform<C, fn((K, V)) -> K>;

/// Second component of each pair.
pub type Values<C, K, V> = Transform<C, fn((K, V)) -> V>;

#[inline]
pub(crate) fn pair_first<K, V>(pair: (K, V)) -> K {
    pair.0
}

#[inline]
pub(crate) fn pair_second<K, V>(pair: (K, V)) -> V {
    pair.1
}

/// Bound form of `cloned`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClonedFn;

/// Clone each borrowed element.
#[inline]
pub fn cloned() -> ClonedFn {
    ClonedFn
}

impl<'a, S, T> Stage<S> for ClonedFn
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    type Output = Cloned<S::Cursor, T>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Transform::new(seq.into_cursor(), T::clone as fn(&T) -> T)
    }
}

/// Bound form of `keys`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeysFn;

/// The keys of a sequence of pairs, such as a borrowed map.
#[inline]
pub fn keys() -> KeysFn {
    KeysFn
}

impl<S, K, V> Stage<S> for KeysFn
where
    S: Sequence<Item = (K, V)>,
{
    type Output = Keys<S::Cursor, K, V>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Transform::new(seq.into_cursor(), pair_first as fn((K, V)) -> K)
    }
}

/// Bound form of `values`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuesFn;

/// The values of a sequence of pairs, such as a borrowed map.
#[inline]
pub fn values() -> ValuesFn {
    ValuesFn
}

impl<S, K, V> Stage<S> for ValuesFn
where
    S: Sequence<Item = (K, V)>,
{
    type Output = Values<S::Cursor, K, V>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Transform::new(seq.into_cursor(), pair_second as fn((K, V)) -> V)
    }
}

/// Each element paired with its zero-based position.
///
/// Created via [`View::enumerate`](super::View::enumerate) or [`enumerate`]. Yields from
/// the back as well when the input is sized, since the back index is `front + len - 1`.
#[derive(Debug, Clone)]
pub struct Enumerate<C> {
    cursor: C,
    index: usize,
}

impl<C> Enumerate<C> {
    #[inline]
    pub(crate) fn new(cursor: C) -> Self {
        Enumerate { cursor, index: 0 }
    }
}

impl<C: Cursor> Cursor for Enumerate<C> {
    type Item = (usize, C::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
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
        let skipped = self.cursor.skip_forward(n);
        self.index += skipped;
        skipped
    }
}

impl<C: ForwardCursor> ForwardCursor for Enumerate<C> {}

impl<C> BidirectionalCursor for Enumerate<C>
where
    C: BidirectionalCursor + SizedCursor,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let len = self.cursor.len();
        let item = self.cursor.next_back()?;
        Some((self.index + len - 1, item))
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        self.cursor.skip_back(n)
    }
}

impl<C: SizedCursor> SizedCursor for Enumerate<C> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len()
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Enumerate<C> {}

pipeable!([C] Enumerate<C>);

/// Bound form of `enumerate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerateFn;

/// Pair every element with its index.
#[inline]
pub fn enumerate() -> EnumerateFn {
    EnumerateFn
}

impl<S: Sequence> Stage<S> for EnumerateFn {
    type Output = Enumerate<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Enumerate::new(seq.into_cursor())
    }
}

/// Matching elements substituted with a fixed value.
///
/// Created via [`View::replace`](super::View::replace) and
/// [`View::replace_if`](super::View::replace_if). Keeps every capability of the input.
#[derive(Debug, Clone)]
pub struct Replace<C, P, T> {
    cursor: C,
    pred: P,
    with: T,
}

impl<C, P, T> Replace<C, P, T> {
    #[inline]
    pub(crate) fn new(cursor: C, pred: P, with: T) -> Self {
        Replace { cursor, pred, with }
    }

    #[inline]
    fn substitute(&mut self, item: T) -> T
    where
        P: Predicate<T>,
        T: Clone,
    {
        if self.pred.test(&item) {
            self.with.clone()
        } else {
            item
        }
    }
}

impl<C, P, T> Cursor for Replace<C, P, T>
where
    C: Cursor<Item = T>,
    P: Predicate<T>,
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let item = self.cursor.next()?;
        Some(self.substitute(item))
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
        self.cursor.skip_forward(n)
    }
}

impl<C, P, T> ForwardCursor for Replace<C, P, T>
where
    C: ForwardCursor<Item = T>,
    P: Predicate<T> + Clone,
    T: Clone,
{
}

impl<C, P, T> BidirectionalCursor for Replace<C, P, T>
where
    C: BidirectionalCursor<Item = T>,
    P: Predicate<T> + Clone,
    T: Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        let item = self.cursor.next_back()?;
        Some(self.substitute(item))
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        self.cursor.skip_back(n)
    }
}

impl<C, P, T> SizedCursor for Replace<C, P, T>
where
    C: SizedCursor<Item = T>,
    P: Predicate<T>,
    T: Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len()
    }
}

impl<C, P, T> RandomAccessCursor for Replace<C, P, T>
where
    C: RandomAccessCursor<Item = T>,
    P: Predicate<T> + Clone,
    T: Clone,
{
}

pipeable!([C, P, T] Replace<C, P, T>);

/// Bound form of `replace`.
#[derive(Debug, Clone, Copy)]
pub struct ReplaceFn<V, T> {
    old: V,
    with: T,
}

/// Substitute every element equal to `old` with `with`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let out = iota(0, 5) | view::replace(2, 20);
/// assert_eq!(out.to_vec(), vec![0, 1, 20, 3, 4]);
/// ```
#[inline]
pub fn replace<V, T>(old: V, with: T) -> ReplaceFn<V, T> {
    ReplaceFn { old, with }
}

impl<S, V, T> Stage<S> for ReplaceFn<V, T>
where
    S: Sequence<Item = T>,
    T: Borrow<V> + Clone,
    V: PartialEq,
{
    type Output = Replace<S::Cursor, EqualTo<V>, T>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Replace::new(seq.into_cursor(), EqualTo(self.old), self.with)
    }
}

/// Bound form of `replace_if`.
pub struct ReplaceIfFn<P, T> {
    pred: P,
    with: T,
}

/// Substitute every element matching `pred` with `with`.
#[inline]
pub fn replace_if<P, T>(pred: P, with: T) -> ReplaceIfFn<P, T>
where
    P: FnMut(&T) -> bool,
{
    ReplaceIfFn { pred, with }
}

impl<S, P, T> Stage<S> for ReplaceIfFn<P, T>
where
    S: Sequence<Item = T>,
    P: FnMut(&T) -> bool,
    T: Clone,
{
    type Output = Replace<S::Cursor, P, T>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Replace::new(seq.into_cursor(), self.pred, self.with)
    }
}

/// Running totals: element `i` is the sum of input elements `0..=i`.
///
/// Created via [`View::partial_sum`](super::View::partial_sum) or [`partial_sum`].
#[derive(Debug, Clone)]
pub struct PartialSum<C, T> {
    cursor: C,
    total: Option<T>,
}

impl<C, T> PartialSum<C, T> {
    #[inline]
    pub(crate) fn new(cursor: C) -> Self {
        PartialSum {
            cursor,
            total: None,
        }
    }
}

impl<C, T> Cursor for PartialSum<C, T>
where
    C: Cursor<Item = T>,
    T: Add<Output = T> + Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let item = self.cursor.next()?;
        let total = match self.total.take() {
            Some(total) => total + item,
            None => item,
        };
        self.total = Some(total.clone());
        Some(total)
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.cursor.remaining()
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        self.cursor.bounds()
    }
}

impl<C, T> ForwardCursor for PartialSum<C, T>
where
    C: ForwardCursor<Item = T>,
    T: Add<Output = T> + Clone,
{
}

pipeable!([C, T] PartialSum<C, T>);

/// Bound form of `partial_sum`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialSumFn;

/// Yield the running total of the input.
#[inline]
pub fn partial_sum() -> PartialSumFn {
    PartialSumFn
}

impl<S> Stage<S> for PartialSumFn
where
    S: Sequence,
    S::Item: Add<Output = S::Item> + Clone,
{
    type Output = PartialSum<S::Cursor, S::Item>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        PartialSum::new(seq.into_cursor())
    }
}

/// The input with runs of equal adjacent elements collapsed to their first element.
///
/// Created via [`View::unique`](super::View::unique) or [`unique`].
#[derive(Debug, Clone)]
pub struct Unique<C, T> {
    cursor: C,
    last: Option<T>,
}

impl<C, T> Unique<C, T> {
    #[inline]
    pub(crate) fn new(cursor: C) -> Self {
        Unique { cursor, last: None }
    }
}

impl<C, T> Cursor for Unique<C, T>
where
    C: Cursor<Item = T>,
    T: PartialEq + Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        loop {
            let item = self.cursor.next()?;
            if self.last.as_ref() != Some(&item) {
                self.last = Some(item.clone());
                return Some(item);
            }
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.cursor.bounds();
        (lo.min(1), hi)
    }
}

impl<C, T> ForwardCursor for Unique<C, T>
where
    C: ForwardCursor<Item = T>,
    T: PartialEq + Clone,
{
}

pipeable!([C, T] Unique<C, T>);

/// Bound form of `unique`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueFn;

/// Collapse runs of equal adjacent elements.
#[inline]
pub fn unique() -> UniqueFn {
    UniqueFn
}

impl<S> Stage<S> for UniqueFn
where
    S: Sequence,
    S::Item: PartialEq + Clone,
{
    type Output = Unique<S::Cursor, S::Item>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Unique::new(seq.into_cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::cell::Cell;
    use std::collections::{BTreeMap, LinkedList};

    #[test]
    fn test_transform_skips_without_calling() {
        let calls = Cell::new(0);
        let mut c = iota(0, 100).transform(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        c.skip_forward(50);
        assert_eq!(c.next(), Some(100));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_transform_keeps_random_access() {
        let v = vec![1, 2, 3, 4];
        let mut c = all(&v).transform(|x| x * 10);
        assert_eq!(c.len(), 4);
        assert_eq!(c.next_back(), Some(40));
        assert_eq!(c.peek_at(1), Some(20));
    }

    #[test]
    fn test_enumerate_indexes_from_both_ends() {
        let v = vec!['a', 'b', 'c'];
        let mut c = all(&v).enumerate();
        assert_eq!(c.next(), Some((0, &'a')));
        assert_eq!(c.next_back(), Some((2, &'c')));
        assert_eq!(c.next(), Some((1, &'b')));
    }

    #[test]
    fn test_enumerate_after_skip() {
        let mut c = iota(10, 20) | enumerate();
        c.skip_forward(3);
        assert_eq!(c.next(), Some((3, 13)));
    }

    #[test]
    fn test_keys_and_values_of_map() {
        let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!((all(&map) | keys()).to_vec(), vec![&"a", &"b"]);
        assert_eq!(all(&map).values().cloned().to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_cloned_over_list() {
        let list: LinkedList<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let owned: Vec<String> = (all(&list) | cloned()).to_vec();
        assert_eq!(owned, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_replace_if_keeps_size() {
        let c = iota(0, 6).replace_if(|x| x % 2 == 1, 0);
        assert_eq!(c.len(), 6);
        assert_eq!(c.to_vec(), vec![0, 0, 2, 0, 4, 0]);
    }

    #[test]
    fn test_partial_sum() {
        assert_eq!(iota(1, 5).partial_sum().to_vec(), vec![1, 3, 6, 10]);
        assert!((iota(0, 0) | partial_sum()).to_vec().is_empty());
    }

    #[test]
    fn test_unique_collapses_adjacent_runs_only() {
        let v = vec![1, 1, 2, 2, 2, 1, 3, 3];
        assert_eq!(all(&v).unique().cloned().to_vec(), vec![1, 2, 1, 3]);
    }
}
