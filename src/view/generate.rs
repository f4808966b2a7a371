//! Source views that produce their own elements: `iota`, `repeat`, `repeat_n`, `single`,
//! `empty`, `generate`, and `cycle` over a saved cursor.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Range, RangeFrom};

use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sequence, SizedCursor,
};
use crate::pipe::Stage;

/// Integer types that `iota` can count over.
pub trait Countable: Copy + Ord {
    /// The largest value of the type.
    const MAX: Self;

    /// The value `n` steps after `self`.
    fn forward(self, n: usize) -> Self;
    /// The value `n` steps before `self`.
    fn backward(self, n: usize) -> Self;
    /// Steps from `self` up to `end`, zero if `end` is not above `self`.
    fn steps_to(self, end: Self) -> usize;
}

macro_rules! countable {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Countable for $ty {
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn forward(self, n: usize) -> Self {
                    (self as $unsigned).wrapping_add(n as $unsigned) as $ty
                }

                #[inline]
                fn backward(self, n: usize) -> Self {
                    (self as $unsigned).wrapping_sub(n as $unsigned) as $ty
                }

                #[inline]
                fn steps_to(self, end: Self) -> usize {
                    if end > self {
                        (end as $unsigned).wrapping_sub(self as $unsigned) as usize
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

countable! {
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, usize => usize,
}

/// The integers `[front, back)`.
///
/// Created via [`iota`] or by using a `Range` as a sequence. Random access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iota<T> {
    front: T,
    back: T,
}

/// Count from `from` up to, not including, `to`. An inverted pair is empty.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(iota(2, 5).to_vec(), vec![2, 3, 4]);
/// assert_eq!(iota(5, 2).len(), 0);
/// assert_eq!(all(0u8..3).to_vec(), vec![0, 1, 2]);
/// ```
#[inline]
pub fn iota<T: Countable>(from: T, to: T) -> Iota<T> {
    Iota {
        front: from,
        back: to.max(from),
    }
}

impl<T: Countable> Cursor for Iota<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let value = self.front;
            self.front = value.forward(1);
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(self.front.steps_to(self.back))
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        let k = n.min(self.front.steps_to(self.back));
        self.front = self.front.forward(k);
        k
    }
}

impl<T: Countable> ForwardCursor for Iota<T> {}

impl<T: Countable> BidirectionalCursor for Iota<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back = self.back.backward(1);
            Some(self.back)
        } else {
            None
        }
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        let k = n.min(self.front.steps_to(self.back));
        self.back = self.back.backward(k);
        k
    }
}

impl<T: Countable> SizedCursor for Iota<T> {
    #[inline]
    fn len(&self) -> usize {
        self.front.steps_to(self.back)
    }
}

impl<T: Countable> RandomAccessCursor for Iota<T> {}

pipeable!([T] Iota<T>);

impl<T: Countable> Sequence for Range<T> {
    type Item = T;
    type Cursor = Iota<T>;

    #[inline]
    fn into_cursor(self) -> Iota<T> {
        iota(self.start, self.end)
    }
}

/// The integers from a starting value upward.
///
/// Created via [`iota_from`] or by using a `RangeFrom` as a sequence. Ends after yielding
/// the type's maximum instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IotaFrom<T> {
    front: Option<T>,
}

/// Count upward from `from`. Bound it with `take` or `take_while`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(iota_from(253u8).to_vec(), vec![253, 254, 255]);
/// ```
#[inline]
pub fn iota_from<T: Countable>(from: T) -> IotaFrom<T> {
    IotaFrom { front: Some(from) }
}

impl<T: Countable> Cursor for IotaFrom<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let value = self.front?;
        self.front = Some(value.forward(1)).filter(|next| *next > value);
        Some(value)
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        match self.front {
            None => (0, Some(0)),
            Some(front) => match front.steps_to(T::MAX).checked_add(1) {
                Some(left) => (left, Some(left)),
                None => (usize::MAX, None),
            },
        }
    }
}

impl<T: Countable> ForwardCursor for IotaFrom<T> {}

pipeable!([T] IotaFrom<T>);

impl<T: Countable> Sequence for RangeFrom<T> {
    type Item = T;
    type Cursor = IotaFrom<T>;

    #[inline]
    fn into_cursor(self) -> IotaFrom<T> {
        iota_from(self.start)
    }
}

/// One value, forever.
///
/// Created via [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

/// Yield clones of `value` without end.
#[inline]
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Cursor for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        n
    }
}

impl<T: Clone> ForwardCursor for Repeat<T> {}

pipeable!([T] Repeat<T>);

/// One value, a fixed number of times.
///
/// Created via [`repeat_n`].
#[derive(Debug, Clone)]
pub struct RepeatN<T> {
    value: T,
    n: usize,
}

/// Yield `n` clones of `value`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat_n('x', 3).to::<String>(), "xxx");
/// ```
#[inline]
pub fn repeat_n<T: Clone>(value: T, n: usize) -> RepeatN<T> {
    RepeatN { value, n }
}

impl<T: Clone> Cursor for RepeatN<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.n == 0 {
            return None;
        }
        self.n -= 1;
        Some(self.value.clone())
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(self.n)
    }

    #[inline]
    fn skip_forward(&mut self, k: usize) -> usize {
        let k = k.min(self.n);
        self.n -= k;
        k
    }
}

impl<T: Clone> ForwardCursor for RepeatN<T> {}

impl<T: Clone> BidirectionalCursor for RepeatN<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }

    #[inline]
    fn skip_back(&mut self, k: usize) -> usize {
        self.skip_forward(k)
    }
}

impl<T: Clone> SizedCursor for RepeatN<T> {
    #[inline]
    fn len(&self) -> usize {
        self.n
    }
}

impl<T: Clone> RandomAccessCursor for RepeatN<T> {}

pipeable!([T] RepeatN<T>);

/// Exactly one element.
///
/// Created via [`single`].
#[derive(Debug, Clone)]
pub struct Single<T> {
    value: Option<T>,
}

/// A sequence holding only `value`.
#[inline]
pub fn single<T>(value: T) -> Single<T> {
    Single { value: Some(value) }
}

impl<T> Cursor for Single<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(usize::from(self.value.is_some()))
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        if n > 0 && self.value.take().is_some() {
            1
        } else {
            0
        }
    }
}

impl<T: Clone> ForwardCursor for Single<T> {}

impl<T: Clone> BidirectionalCursor for Single<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline]
    fn skip_back(&mut self, n: usize) -> usize {
        self.skip_forward(n)
    }
}

impl<T> SizedCursor for Single<T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.value.is_some())
    }
}

impl<T: Clone> RandomAccessCursor for Single<T> {}

pipeable!([T] Single<T>);

/// No elements at all.
///
/// Created via [`empty`].
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

/// A sequence of `T` with nothing in it.
#[inline]
pub fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(0)
    }

    #[inline]
    fn skip_forward(&mut self, _: usize) -> usize {
        0
    }
}

impl<T> ForwardCursor for Empty<T> {}

impl<T> BidirectionalCursor for Empty<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        None
    }
}

impl<T> SizedCursor for Empty<T> {
    #[inline]
    fn len(&self) -> usize {
        0
    }
}

impl<T> RandomAccessCursor for Empty<T> {}

pipeable!([T] Empty<T>);

/// Elements produced by calling a closure until it returns `None`.
///
/// Created via [`generate`]. Forward when the closure can be cloned, since each clone
/// then carries its own state.
#[derive(Clone)]
pub struct Generate<F> {
    f: F,
}

/// Pull elements from `f` until it returns `None`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut state = (0, 1);
/// let fib = generate(move || {
///     let out = state.0;
///     state = (state.1, state.0 + state.1);
///     Some(out)
/// });
/// assert_eq!(fib.take(7).to_vec(), vec![0, 1, 1, 2, 3, 5, 8]);
/// ```
#[inline]
pub fn generate<T, F>(f: F) -> Generate<F>
where
    F: FnMut() -> Option<T>,
{
    Generate { f }
}

impl<F> fmt::Debug for Generate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generate")
    }
}

impl<T, F> Cursor for Generate<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.f)()
    }
}

impl<T, F> ForwardCursor for Generate<F> where F: FnMut() -> Option<T> + Clone {}

pipeable!([F] Generate<F>);

/// A forward sequence restarted from its beginning each time it runs out.
///
/// Created via [`View::cycle`](super::View::cycle) or [`cycle`]. An empty input ends
/// immediately instead of spinning; any other input never ends.
#[derive(Debug, Clone)]
pub struct Cycle<C> {
    start: C,
    cursor: C,
}

impl<C: Clone> Cycle<C> {
    #[inline]
    pub(crate) fn new(cursor: C) -> Self {
        Cycle {
            start: cursor.clone(),
            cursor,
        }
    }
}

impl<C: ForwardCursor> Cursor for Cycle<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        match self.cursor.next() {
            Some(item) => Some(item),
            None => {
                self.cursor = self.start.clone();
                self.cursor.next()
            }
        }
    }

    #[inline]
    fn bounds(&self) -> (usize, Option<usize>) {
        match self.start.remaining() {
            Some(0) => (0, Some(0)),
            _ => (usize::MAX, None),
        }
    }

    #[inline]
    fn skip_forward(&mut self, n: usize) -> usize {
        let (Some(period), Some(left)) = (self.start.remaining(), self.cursor.remaining()) else {
            let mut skipped = 0;
            while skipped < n && self.next().is_some() {
                skipped += 1;
            }
            return skipped;
        };
        if period == 0 {
            return 0;
        }
        if n < left {
            return self.cursor.skip_forward(n);
        }
        self.cursor = self.start.clone();
        self.cursor.skip_forward((n - left) % period);
        n
    }
}

impl<C: ForwardCursor> ForwardCursor for Cycle<C> {}

pipeable!([C] Cycle<C>);

/// Bound form of `cycle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleFn;

/// Repeat a forward sequence endlessly.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let v = vec![1, 2, 3];
/// let out = all(&v) | view::cycle() | view::take(7);
/// assert_eq!(out.cloned().to_vec(), vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
#[inline]
pub fn cycle() -> CycleFn {
    CycleFn
}

impl<S> Stage<S> for CycleFn
where
    S: Sequence,
    S::Cursor: ForwardCursor,
{
    type Output = Cycle<S::Cursor>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Cycle::new(seq.into_cursor())
    }
}
