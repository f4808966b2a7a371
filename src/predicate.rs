//! Element tests shared by views, actions and reducers.
//!
//! Any `FnMut(&T) -> bool` closure is a [`Predicate`]. [`EqualTo`] and [`Not`] let the
//! value-based forms (`remove(value)`, `split(value)`, `count(seq, value)`) reuse the
//! predicate-based machinery without boxing. [`on`] tests a projection of each element,
//! so every predicate-taking view, action and reducer also accepts `pred(proj(x))`.

use std::borrow::Borrow;

/// A test applied to an element by reference.
pub trait Predicate<T: ?Sized> {
    fn test(&mut self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Matches elements that compare equal to a stored value.
///
/// Comparison goes through [`Borrow`], so a cursor yielding `&i32` matches `EqualTo(3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualTo<V>(pub V);

impl<T, V> Predicate<T> for EqualTo<V>
where
    T: Borrow<V>,
    V: PartialEq,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        item.borrow() == &self.0
    }
}

/// Negates another predicate.
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P> Predicate<T> for Not<P>
where
    P: Predicate<T>,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        !self.0.test(item)
    }
}

/// Test `pred` against `proj(item)` instead of the item itself.
///
/// ```rust
/// use lazyseq::predicate::on;
/// use lazyseq::prelude::*;
///
/// let people = vec![(1u32, 31u32), (2, 25), (3, 40)];
/// let over_30: Vec<u32> = all(people)
///     .filter(on(|p: &(u32, u32)| p.1, |age: &u32| *age > 30))
///     .transform(|p: (u32, u32)| p.0)
///     .to();
/// assert_eq!(over_30, vec![1, 3]);
/// ```
#[inline]
pub fn on<T, K, F, P>(mut proj: F, mut pred: P) -> impl FnMut(&T) -> bool + Clone
where
    T: ?Sized,
    F: FnMut(&T) -> K + Clone,
    P: FnMut(&K) -> bool + Clone,
{
    move |item: &T| pred(&proj(item))
}
