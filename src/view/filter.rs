//! Views that drop elements: `filter`, `remove`, `take_while`, `drop_while`.

use std::borrow::Borrow;
use std::marker::PhantomData;

use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, Sequence};
use crate::pipe::Stage;
use crate::predicate::{EqualTo, Not, Predicate};

/// Elements for which a predicate holds.
///
/// Created via [`View::filter`](super::View::filter) or [`filter`].
#[derive(Debug, Clone)]
pub struct Filter<C, P> {
    cursor: C,
    pred: P,
}

impl<C, P> Filter<C, P> {
    #[inline]
    pub(crate) fn new(cursor: C, pred: P) -> Self {
        Filter { cursor, pred }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        loop {
            let item = self.cursor.next()?;
            if self.pred.test(&item) {
                return Some(item);
            }
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        (0, self.cursor.bounds().1)
    }
}

impl<C, P> ForwardCursor for Filter<C, P>
where
    C: ForwardCursor,
    P: Predicate<C::Item> + Clone,
{
}

impl<C, P> BidirectionalCursor for Filter<C, P>
where
    C: BidirectionalCursor,
    P: Predicate<C::Item> + Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        loop {
            let item = self.cursor.next_back()?;
            if self.pred.test(&item) {
                return Some(item);
            }
        }
    }
}

pipeable!([C, P] Filter<C, P>);

/// Bound form of `filter`.
pub struct FilterFn<T, P> {
    pred: P,
    _item: PhantomData<fn(&T)>,
}

/// Keep the elements matching `pred`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let evens = iota(0, 10) | view::filter(|x: &i32| x % 2 == 0);
/// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
/// ```
#[inline]
pub fn filter<T, P>(pred: P) -> FilterFn<T, P>
where
    P: FnMut(&T) -> bool,
{
    FilterFn {
        pred,
        _item: PhantomData,
    }
}

impl<S, T, P> Stage<S> for FilterFn<T, P>
where
    S: Sequence<Item = T>,
    P: FnMut(&T) -> bool,
{
    type Output = Filter<S::Cursor, P>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Filter::new(seq.into_cursor(), self.pred)
    }
}

/// Bound form of `remove`.
#[derive(Debug, Clone, Copy)]
pub struct RemoveFn<V> {
    value: V,
}

/// Skip every element equal to `value`.
#[inline]
pub fn remove<V>(value: V) -> RemoveFn<V> {
    RemoveFn { value }
}

impl<S, V> Stage<S> for RemoveFn<V>
where
    S: Sequence,
    S::Item: Borrow<V>,
    V: PartialEq,
{
    type Output = Filter<S::Cursor, Not<EqualTo<V>>>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Filter::new(seq.into_cursor(), Not(EqualTo(self.value)))
    }
}

/// Bound form of `remove_if`.
pub struct RemoveIfFn<T, P> {
    pred: P,
    _item: PhantomData<fn(&T)>,
}

/// Skip every element matching `pred`.
#[inline]
pub fn remove_if<T, P>(pred: P) -> RemoveIfFn<T, P>
where
    P: FnMut(&T) -> bool,
{
    RemoveIfFn {
        pred,
        _item: PhantomData,
    }
}

impl<S, T, P> Stage<S> for RemoveIfFn<T, P>
where
    S: Sequence<Item = T>,
    P: FnMut(&T) -> bool,
{
    type Output = Filter<S::Cursor, Not<P>>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Filter::new(seq.into_cursor(), Not(self.pred))
    }
}

/// The leading elements for which a predicate holds.
///
/// Created via [`View::take_while`](super::View::take_while) or [`take_while`].
#[derive(Debug, Clone)]
pub struct TakeWhile<C, P> {
    cursor: C,
    pred: P,
    done: bool,
}

impl<C, P> TakeWhile<C, P> {
    #[inline]
    pub(crate) fn new(cursor: C, pred: P) -> Self {
        TakeWhile {
            cursor,
            pred,
            done: false,
        }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.done {
            return None;
        }
        match self.cursor.next() {
            Some(item) if self.pred.test(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.cursor.bounds().1)
        }
    }
}

impl<C, P> ForwardCursor for TakeWhile<C, P>
where
    C: ForwardCursor,
    P: Predicate<C::Item> + Clone,
{
}

pipeable!([C, P] TakeWhile<C, P>);

/// Bound form of `take_while`.
pub struct TakeWhileFn<T, P> {
    pred: P,
    _item: PhantomData<fn(&T)>,
}

/// Yield elements until `pred` first fails.
#[inline]
pub fn take_while<T, P>(pred: P) -> TakeWhileFn<T, P>
where
    P: FnMut(&T) -> bool,
{
    TakeWhileFn {
        pred,
        _item: PhantomData,
    }
}

impl<S, T, P> Stage<S> for TakeWhileFn<T, P>
where
    S: Sequence<Item = T>,
    P: FnMut(&T) -> bool,
{
    type Output = TakeWhile<S::Cursor, P>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        TakeWhile::new(seq.into_cursor(), self.pred)
    }
}

/// Everything after the leading run of elements for which a predicate holds.
///
/// Created via [`View::drop_while`](super::View::drop_while) or [`drop_while`]. The
/// predicate is dropped once the run ends.
#[derive(Debug, Clone)]
pub struct DropWhile<C, P> {
    cursor: C,
    pred: Option<P>,
}

impl<C, P> DropWhile<C, P> {
    #[inline]
    pub(crate) fn new(cursor: C, pred: P) -> Self {
        DropWhile {
            cursor,
            pred: Some(pred),
        }
    }
}

impl<C, P> Cursor for DropWhile<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        match self.pred.take() {
            None => self.cursor.next(),
            Some(mut pred) => loop {
                let item = self.cursor.next()?;
                if !pred.test(&item) {
                    return Some(item);
                }
            },
        }
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        match self.pred {
            None => self.cursor.remaining(),
            Some(_) => None,
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        match self.pred {
            None => self.cursor.bounds(),
            Some(_) => (0, self.cursor.bounds().1),
        }
    }
}

impl<C, P> ForwardCursor for DropWhile<C, P>
where
    C: ForwardCursor,
    P: Predicate<C::Item> + Clone,
{
}

pipeable!([C, P] DropWhile<C, P>);

/// Bound form of `drop_while`.
pub struct DropWhileFn<T, P> {
    pred: P,
    _item: PhantomData<fn(&T)>,
}

/// Skip elements while `pred` holds, then yield the rest.
#[inline]
pub fn drop_while<T, P>(pred: P) -> DropWhileFn<T, P>
where
    P: FnMut(&T) -> bool,
{
    DropWhileFn {
        pred,
        _item: PhantomData,
    }
}

impl<S, T, P> Stage<S> for DropWhileFn<T, P>
where
    S: Sequence<Item = T>,
    P: FnMut(&T) -> bool,
{
    type Output = DropWhile<S::Cursor, P>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        DropWhile::new(seq.into_cursor(), self.pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_filter_empty_result_is_not_an_error() {
        let v = vec![1, 3, 5];
        assert!(all(&v).filter(|x| **x % 2 == 0).to_vec().is_empty());
    }

    #[test]
    fn test_filter_from_both_ends() {
        let mut c = iota(0, 10).filter(|x| x % 3 == 0);
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.next_back(), Some(9));
        assert_eq!(c.next_back(), Some(6));
        assert_eq!(c.next(), Some(3));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_projected_predicates() {
        use crate::predicate::on;

        let pairs = vec![(1, 'a'), (4, 'b'), (6, 'c'), (3, 'd')];
        let small = |k: &i32| *k < 5;
        let kept: Vec<char> = all(pairs.clone())
            .filter(on(|p: &(i32, char)| p.0, small))
            .transform(|p: (i32, char)| p.1)
            .to();
        assert_eq!(kept, vec!['a', 'b', 'd']);

        let leading = all(pairs.clone())
            .take_while(on(|p: &(i32, char)| p.0, small))
            .to_vec();
        assert_eq!(leading, vec![(1, 'a'), (4, 'b')]);

        let rest = (all(pairs) | remove_if(on(|p: &(i32, char)| p.0, small))).to_vec();
        assert_eq!(rest, vec![(6, 'c')]);
    }

    #[test]
    fn test_remove_by_value_and_predicate() {
        let v = vec![1, 2, 1, 3];
        assert_eq!((all(&v) | remove(1)).cloned().to_vec(), vec![2, 3]);
        assert_eq!(
            (all(&v) | remove_if(|x: &&i32| **x > 1)).cloned().to_vec(),
            vec![1, 1]
        );
    }

    #[test]
    fn test_take_while_stops_at_first_failure() {
        let out = iota(1, 100).take_while(|x| *x < 4).to_vec();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_take_while_does_not_resume() {
        let v = vec![1, 5, 1];
        let mut c = all(&v).take_while(|x| **x < 3);
        assert_eq!(c.next(), Some(&1));
        assert_eq!(c.next(), None);
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_drop_while_yields_rest_including_later_matches() {
        let v = vec![1, 2, 7, 1, 2];
        let out = (all(&v) | drop_while(|x: &&i32| **x < 5)).cloned().to_vec();
        assert_eq!(out, vec![7, 1, 2]);
    }

    #[test]
    fn test_drop_while_size_known_after_run() {
        let mut c = iota(0, 10).drop_while(|x| *x < 3);
        assert_eq!(c.remaining(), None);
        assert_eq!(c.next(), Some(3));
        assert_eq!(c.remaining(), Some(6));
    }
}
