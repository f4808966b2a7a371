//! Views that weave elements together: `interleave` and `intersperse`.

use crate::cursor::{Cursor, ForwardCursor, Sequence, SizedCursor};
use crate::pipe::Stage;

/// What `interleave` does once one input runs out.
///
/// There is no default; every call site states its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tail {
    /// End at the shorter input's end. Only whole pairs are produced, whichever input
    /// comes first.
    Stop,
    /// Keep yielding from the other input until it runs out too.
    Extend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    A,
    B,
    OnlyA,
    OnlyB,
    Done,
}

/// Elements taken alternately from two inputs, starting with the first.
///
/// Created via [`View::interleave`](super::View::interleave) or [`interleave`]. Under
/// [`Tail::Stop`] the second input is read one element ahead, so the first input's element
/// is only produced once its partner is known to exist.
#[derive(Debug, Clone)]
pub struct Interleave<A, B, T> {
    a: A,
    b: B,
    tail: Tail,
    turn: Turn,
    pending: Option<T>,
}

impl<A, B, T> Interleave<A, B, T> {
    #[inline]
    pub(crate) fn new(a: A, b: B, tail: Tail) -> Self {
        Interleave {
            a,
            b,
            tail,
            turn: Turn::A,
            pending: None,
        }
    }

    #[inline]
    fn count_in(&self, la: usize, lb: usize) -> usize {
        let pairs = la.min(lb).saturating_mul(2);
        match (self.turn, self.tail) {
            (Turn::Done, _) => 0,
            (Turn::OnlyA, _) => la,
            (Turn::OnlyB, _) => lb,
            (_, Tail::Extend) => la.saturating_add(lb),
            (Turn::A, Tail::Stop) => pairs,
            (Turn::B, Tail::Stop) => pairs.saturating_add(usize::from(self.pending.is_some())),
        }
    }

    #[inline]
    fn finish(&mut self) -> Option<T> {
        self.turn = Turn::Done;
        None
    }
}

impl<A, B, T> Cursor for Interleave<A, B, T>
where
    A: Cursor<Item = T>,
    B: Cursor<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(item) = self.pending.take() {
            self.turn = Turn::A;
            return Some(item);
        }
        if let (Turn::A, Tail::Stop) = (self.turn, self.tail) {
            let first = match self.a.next() {
                Some(first) => first,
                None => return self.finish(),
            };
            return match self.b.next() {
                Some(second) => {
                    self.pending = Some(second);
                    self.turn = Turn::B;
                    Some(first)
                }
                None => self.finish(),
            };
        }
        let (item, then, fallback) = match self.turn {
            Turn::Done => return None,
            Turn::OnlyA => (self.a.next(), Turn::OnlyA, Turn::Done),
            Turn::OnlyB => (self.b.next(), Turn::OnlyB, Turn::Done),
            Turn::A => (self.a.next(), Turn::B, Turn::OnlyB),
            Turn::B => (self.b.next(), Turn::A, Turn::OnlyA),
        };
        if item.is_some() {
            self.turn = then;
            return item;
        }
        match (fallback, self.tail) {
            (Turn::Done, _) | (_, Tail::Stop) => self.finish(),
            (only, Tail::Extend) => {
                self.turn = only;
                self.next()
            }
        }
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(self.count_in(self.a.remaining()?, self.b.remaining()?))
    }
}

impl<A, B, T> ForwardCursor for Interleave<A, B, T>
where
    A: ForwardCursor<Item = T>,
    B: ForwardCursor<Item = T>,
    T: Clone,
{
}

impl<A, B, T> SizedCursor for Interleave<A, B, T>
where
    A: SizedCursor<Item = T>,
    B: SizedCursor<Item = T>,
{
    #[inline]
    fn len(&self) -> usize {
        self.count_in(self.a.len(), self.b.len())
    }
}

pipeable!([A, B, T] Interleave<A, B, T>);

/// Bound form of `interleave`.
#[derive(Debug, Clone)]
pub struct InterleaveFn<S2> {
    other: S2,
    tail: Tail,
}

/// Alternate between the piped sequence and `other`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let a = iota(0, 5) | view::interleave(iota(10, 12), Tail::Stop);
/// assert_eq!(a.to_vec(), vec![0, 10, 1, 11]);
///
/// let b = iota(0, 5) | view::interleave(iota(10, 12), Tail::Extend);
/// assert_eq!(b.to_vec(), vec![0, 10, 1, 11, 2, 3, 4]);
/// ```
#[inline]
pub fn interleave<S2: Sequence>(other: S2, tail: Tail) -> InterleaveFn<S2> {
    InterleaveFn { other, tail }
}

impl<S, S2> Stage<S> for InterleaveFn<S2>
where
    S: Sequence,
    S2: Sequence<Item = S::Item>,
{
    type Output = Interleave<S::Cursor, S2::Cursor, S::Item>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Interleave::new(seq.into_cursor(), self.other.into_cursor(), self.tail)
    }
}

/// A separator between every two consecutive elements, never before the first or after
/// the last.
///
/// Created via [`View::intersperse`](super::View::intersperse) or [`intersperse`]. Holds
/// one element of look-ahead: a separator is only produced once the element after it is
/// known to exist.
#[derive(Debug, Clone)]
pub struct Intersperse<C, T> {
    cursor: C,
    separator: T,
    peeked: Option<T>,
    started: bool,
}

impl<C, T> Intersperse<C, T> {
    #[inline]
    pub(crate) fn new(cursor: C, separator: T) -> Self {
        Intersperse {
            cursor,
            separator,
            peeked: None,
            started: false,
        }
    }

    #[inline]
    fn count_in(&self, left: usize) -> usize {
        if !self.started {
            left.saturating_mul(2).saturating_sub(1)
        } else if self.peeked.is_some() {
            left.saturating_mul(2).saturating_add(1)
        } else {
            left.saturating_mul(2)
        }
    }
}

impl<C, T> Cursor for Intersperse<C, T>
where
    C: Cursor<Item = T>,
    T: Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if !self.started {
            self.started = true;
            return self.cursor.next();
        }
        if let Some(item) = self.peeked.take() {
            return Some(item);
        }
        let item = self.cursor.next()?;
        self.peeked = Some(item);
        Some(self.separator.clone())
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
}

impl<C, T> ForwardCursor for Intersperse<C, T>
where
    C: ForwardCursor<Item = T>,
    T: Clone,
{
}

impl<C, T> SizedCursor for Intersperse<C, T>
where
    C: SizedCursor<Item = T>,
    T: Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.count_in(self.cursor.len())
    }
}

pipeable!([C, T] Intersperse<C, T>);

/// Bound form of `intersperse`.
#[derive(Debug, Clone, Copy)]
pub struct IntersperseFn<T> {
    separator: T,
}

/// Put `separator` between consecutive elements of the piped sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let out = iota(1, 4) | view::intersperse(0);
/// assert_eq!(out.to_vec(), vec![1, 0, 2, 0, 3]);
/// ```
#[inline]
pub fn intersperse<T: Clone>(separator: T) -> IntersperseFn<T> {
    IntersperseFn { separator }
}

impl<S, T> Stage<S> for IntersperseFn<T>
where
    S: Sequence<Item = T>,
    T: Clone,
{
    type Output = Intersperse<S::Cursor, T>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Intersperse::new(seq.into_cursor(), self.separator)
    }
}
