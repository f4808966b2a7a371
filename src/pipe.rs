//! The pipe protocol.
//!
//! A [`Stage`] is a transformation with every argument except its input sequence already
//! bound. `cursor | stage` means `stage.apply(cursor)`, and since applying a stage to a
//! cursor returns another cursor, pipelines read left to right while compiling down to
//! one nested `next` call per element:
//!
//! ```rust
//! use lazyseq::prelude::*;
//! use lazyseq::view;
//!
//! let v = vec![1, 2, 3, 4, 5, 6];
//! let out = all(&v)
//!     | view::filter(|x: &&i32| **x % 2 == 0)
//!     | view::transform(|x: &i32| x * 10)
//!     | to_vec();
//! assert_eq!(out, vec![20, 40, 60]);
//! ```
//!
//! [`Action`]s are the in-place counterpart. They borrow a container mutably and report
//! range errors through [`Result`]; [`Mutable`] gives them the `|=` spelling.

use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign, Deref, DerefMut};

use crate::cursor::{BidirectionalCursor, Cursor, SizedCursor};
use crate::error::{RangeError, Result};

/// A bound transformation from a sequence `S` to some output.
pub trait Stage<S> {
    type Output;

    fn apply(self, seq: S) -> Self::Output;
}

/// Two stages fused into one, applied left to right.
///
/// Created via [`compose`] or [`Compose::then`].
#[derive(Debug, Clone, Copy)]
pub struct Compose<F, G> {
    first: F,
    second: G,
}

/// Fuse two stages so the pair can be stored and applied later.
///
/// `seq | compose(f, g)` is the same pipeline as `seq | f | g`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let evens_then_three = compose(view::stride(2).unwrap(), view::take(3));
/// assert_eq!((iota(0, 100) | evens_then_three).to_vec(), vec![0, 2, 4]);
/// ```
#[inline]
pub fn compose<F, G>(first: F, second: G) -> Compose<F, G> {
    Compose { first, second }
}

impl<F, G> Compose<F, G> {
    /// Append another stage.
    #[inline]
    pub fn then<H>(self, next: H) -> Compose<Self, H> {
        compose(self, next)
    }
}

impl<S, F, G> Stage<S> for Compose<F, G>
where
    F: Stage<S>,
    G: Stage<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn apply(self, seq: S) -> G::Output {
        self.second.apply(self.first.apply(seq))
    }
}

/// A plain function used as a stage.
///
/// Created via [`stage`].
#[derive(Debug, Clone, Copy)]
pub struct FnStage<F>(F);

/// Use any `FnOnce(S) -> O` as a pipeline stage.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let total = iota(1, 5) | stage(|c: Iota<i32>| accumulate(c, 0));
/// assert_eq!(total, 10);
/// ```
#[inline]
pub fn stage<F>(f: F) -> FnStage<F> {
    FnStage(f)
}

impl<S, O, F> Stage<S> for FnStage<F>
where
    F: FnOnce(S) -> O,
{
    type Output = O;

    #[inline]
    fn apply(self, seq: S) -> O {
        (self.0)(seq)
    }
}

/// Bridges a cursor to [`Iterator`], for `for` loops and the std adapters.
///
/// Every cursor type in this crate implements `IntoIterator` through this type.
#[derive(Debug, Clone)]
pub struct Iter<C> {
    cursor: C,
}

impl<C> Iter<C> {
    #[inline]
    pub fn new(cursor: C) -> Self {
        Iter { cursor }
    }

    /// Recover the cursor, positioned after the last element produced.
    #[inline]
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.bounds()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<C::Item> {
        if self.cursor.skip_forward(n) < n {
            return None;
        }
        self.cursor.next()
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Iter<C> {
    #[inline]
    fn next_back(&mut self) -> Option<C::Item> {
        self.cursor.next_back()
    }
}

impl<C: SizedCursor> ExactSizeIterator for Iter<C> {
    #[inline]
    fn len(&self) -> usize {
        self.cursor.len()
    }
}

/// An in-place mutation of a container `C`.
pub trait Action<C: ?Sized> {
    fn run(self, target: &mut C) -> Result<()>;
}

/// Two actions run one after the other on the same container.
///
/// Created via [`chain`]. The second action does not run if the first fails.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Sequence two actions into one.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut v = vec![3, 1, 3, 2, 1];
/// chain(action::sort(), action::unique()).run(&mut v).unwrap();
/// assert_eq!(v, vec![1, 2, 3]);
/// ```
#[inline]
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain { first, second }
}

impl<C: ?Sized, A, B> Action<C> for Chain<A, B>
where
    A: Action<C>,
    B: Action<C>,
{
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        self.first.run(target)?;
        self.second.run(target)
    }
}

/// A closure used as an action.
///
/// Created via [`act_with`].
pub struct FnAction<C: ?Sized, F> {
    f: F,
    _target: PhantomData<fn(&mut C)>,
}

/// Use any `FnOnce(&mut C)` as an action.
#[inline]
pub fn act_with<C: ?Sized, F>(f: F) -> FnAction<C, F>
where
    F: FnOnce(&mut C),
{
    FnAction {
        f,
        _target: PhantomData,
    }
}

impl<C: ?Sized, F> Action<C> for FnAction<C, F>
where
    F: FnOnce(&mut C),
{
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        (self.f)(target);
        Ok(())
    }
}

/// Apply actions to a borrowed container and get the same handle back.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut v = vec![5, 4, 3, 2, 1];
/// v.act(action::sort())?.act(action::drop(2))?;
/// assert_eq!(v, vec![3, 4, 5]);
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
pub trait ActOn {
    #[inline]
    fn act<A: Action<Self>>(&mut self, action: A) -> Result<&mut Self> {
        action.run(self)?;
        Ok(self)
    }
}

impl<C: ?Sized> ActOn for C {}

/// An owned container that accepts actions through `|=` and `|`.
///
/// The first failing action is kept and the following ones are skipped; [`finish`]
/// surfaces it.
///
/// [`finish`]: Mutable::finish
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut v = Mutable::new(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// v |= action::remove_if(|x: &i32| x % 2 == 0);
/// v |= action::reverse();
/// assert_eq!(v.finish(), Ok(vec![9, 7, 5, 3, 1]));
///
/// let failed = Mutable::new(vec![1, 2, 3]) | action::stride(0) | action::reverse();
/// assert!(failed.finish().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Mutable<C> {
    target: C,
    error: Option<RangeError>,
}

impl<C> Mutable<C> {
    #[inline]
    pub fn new(target: C) -> Self {
        Mutable {
            target,
            error: None,
        }
    }

    /// The first error raised by an action, if any.
    #[inline]
    pub fn error(&self) -> Option<&RangeError> {
        self.error.as_ref()
    }

    /// The container, or the first error raised while mutating it.
    #[inline]
    pub fn finish(self) -> Result<C> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.target),
        }
    }

    /// The container as it stands, discarding any error.
    #[inline]
    pub fn into_inner(self) -> C {
        self.target
    }
}

impl<C, A: Action<C>> BitOrAssign<A> for Mutable<C> {
    #[inline]
    fn bitor_assign(&mut self, action: A) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = action.run(&mut self.target) {
            event!(debug, %err, "action failed, skipping the rest of the chain");
            self.error = Some(err);
        }
    }
}

impl<C, A: Action<C>> BitOr<A> for Mutable<C> {
    type Output = Mutable<C>;

    #[inline]
    fn bitor(mut self, action: A) -> Mutable<C> {
        self |= action;
        self
    }
}

impl<C> Deref for Mutable<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        &self.target
    }
}

impl<C> DerefMut for Mutable<C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut C {
        &mut self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action;
    use crate::prelude::*;
    use crate::view;

    #[test]
    fn test_pipe_equals_direct_call() {
        let v = vec![1, 2, 3, 4, 5];
        let piped = (all(&v) | view::take(3)).cloned().to_vec();
        let direct = all(&v).take(3).cloned().to_vec();
        assert_eq!(piped, direct);
    }

    #[test]
    fn test_compose_is_associative() {
        let grouped = iota(0, 20) | compose(view::drop(2), view::take(5));
        let nested = (iota(0, 20) | view::drop(2)) | view::take(5);
        assert_eq!(grouped.to_vec(), nested.to_vec());
    }

    #[test]
    fn test_compose_then_extends_the_chain() {
        let three = compose(view::drop(1), view::take(4)).then(view::reverse());
        assert_eq!((iota(0, 10) | three).to_vec(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_iter_bridge_supports_std_adapters() {
        let v = vec![1, 2, 3, 4];
        let it = all(&v).into_iter();
        assert_eq!(it.len(), 4);
        let back: Vec<_> = all(&v).into_iter().rev().copied().collect();
        assert_eq!(back, vec![4, 3, 2, 1]);

        let mut total = 0;
        for x in all(&v).filter(|x| **x > 2) {
            total += x;
        }
        assert_eq!(total, 7);
    }

    #[test]
    fn test_iter_nth_uses_skip() {
        let mut it = iota(0u32, 10).into_iter();
        assert_eq!(it.nth(3), Some(3));
        assert_eq!(it.nth(100), None);
    }

    #[test]
    fn test_act_returns_the_same_handle() {
        let mut v = vec![3, 1, 2];
        let handle = v.act(action::sort()).unwrap();
        handle.push(10);
        assert_eq!(v, vec![1, 2, 3, 10]);
    }

    #[test]
    fn test_act_with_closure() {
        let mut v = vec![1, 2, 3];
        v.act(act_with(|v: &mut Vec<i32>| v.push(4))).unwrap();
        assert_eq!(v, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mutable_keeps_first_error() {
        let mut m = Mutable::new(vec![1, 2, 3]);
        m |= action::slice(2, 1);
        m |= action::push_back(4);
        assert_eq!(*m, vec![1, 2, 3]);
        assert_eq!(
            m.error(),
            Some(&RangeError::InvertedBounds { from: 2, to: 1 })
        );
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        let mut v = vec![1, 2, 3];
        let result = chain(action::insert(9, 0), action::push_back(4)).run(&mut v);
        assert!(result.is_err());
        assert_eq!(v, vec![1, 2, 3]);
    }
}
