//! Actions that drop or overwrite elements by value: `remove`, `remove_if`, `unique`,
//! `replace`, `replace_if`, `transform`.

use std::marker::PhantomData;

use super::container::{Compact, Overwrite};
use crate::error::Result;
use crate::pipe::Action;

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn compact<C, F>(target: &mut C, keep: F)
where
    C: Compact + ?Sized,
    F: FnMut(&C::Elem) -> bool,
{
    let before = target.size();
    target.retain_elems(keep);
    event!(debug, removed = before - target.size(), "compacted");
}

/// Created via [`remove`].
#[derive(Debug, Clone, Copy)]
pub struct RemoveFn<T> {
    value: T,
}

/// Remove every element equal to `value`, keeping the order of the rest.
#[inline]
pub fn remove<T>(value: T) -> RemoveFn<T> {
    RemoveFn { value }
}

impl<C> Action<C> for RemoveFn<C::Elem>
where
    C: Compact + ?Sized,
    C::Elem: PartialEq,
{
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        compact(target, |item| *item != self.value);
        Ok(())
    }
}

/// Created via [`remove_if`].
pub struct RemoveIfFn<T, P> {
    pred: P,
    _elem: PhantomData<fn(&T)>,
}

/// Remove every element matching `pred`, keeping the order of the rest.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut v: Vec<i32> = (0..10).collect();
/// v.act(action::remove_if(|x: &i32| x % 2 == 0))?;
/// assert_eq!(v, vec![1, 3, 5, 7, 9]);
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
#[inline]
pub fn remove_if<T, P>(pred: P) -> RemoveIfFn<T, P>
where
    P: FnMut(&T) -> bool,
{
    RemoveIfFn {
        pred,
        _elem: PhantomData,
    }
}

impl<C, P> Action<C> for RemoveIfFn<C::Elem, P>
where
    C: Compact + ?Sized,
    P: FnMut(&C::Elem) -> bool,
{
    #[inline]
    fn run(mut self, target: &mut C) -> Result<()> {
        compact(target, |item| !(self.pred)(item));
        Ok(())
    }
}

/// Created via [`unique`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueFn;

/// Collapse runs of equal adjacent elements. Sort first to remove every duplicate.
#[inline]
pub fn unique() -> UniqueFn {
    UniqueFn
}

impl<C> Action<C> for UniqueFn
where
    C: Compact + ?Sized,
    C::Elem: PartialEq,
{
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        target.dedup_elems();
        Ok(())
    }
}

/// Created via [`replace`].
#[derive(Debug, Clone, Copy)]
pub struct ReplaceFn<T> {
    old: T,
    with: T,
}

/// Overwrite every element equal to `old` with `with`. The size does not change.
#[inline]
pub fn replace<T>(old: T, with: T) -> ReplaceFn<T> {
    ReplaceFn { old, with }
}

impl<C> Action<C> for ReplaceFn<C::Elem>
where
    C: Overwrite + ?Sized,
    C::Elem: PartialEq + Clone,
{
    fn run(self, target: &mut C) -> Result<()> {
        for item in target.elems_mut() {
            if *item == self.old {
                *item = self.with.clone();
            }
        }
        Ok(())
    }
}

/// Created via [`replace_if`].
pub struct ReplaceIfFn<T, P> {
    pred: P,
    with: T,
}

/// Overwrite every element matching `pred` with `with`.
#[inline]
pub fn replace_if<T, P>(pred: P, with: T) -> ReplaceIfFn<T, P>
where
    P: FnMut(&T) -> bool,
{
    ReplaceIfFn { pred, with }
}

impl<C, P> Action<C> for ReplaceIfFn<C::Elem, P>
where
    C: Overwrite + ?Sized,
    C::Elem: Clone,
    P: FnMut(&C::Elem) -> bool,
{
    fn run(mut self, target: &mut C) -> Result<()> {
        for item in target.elems_mut() {
            if (self.pred)(item) {
                *item = self.with.clone();
            }
        }
        Ok(())
    }
}

/// Created via [`transform`].
pub struct TransformFn<T, F> {
    f: F,
    _elem: PhantomData<fn(&T)>,
}

/// Replace every element with `f` applied to it.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut words = vec![String::from("a"), String::from("b")];
/// words.act(action::transform(|w: &String| w.repeat(2)))?;
/// assert_eq!(words, vec!["aa", "bb"]);
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
#[inline]
pub fn transform<T, F>(f: F) -> TransformFn<T, F>
where
    F: FnMut(&T) -> T,
{
    TransformFn {
        f,
        _elem: PhantomData,
    }
}

impl<C, F> Action<C> for TransformFn<C::Elem, F>
where
    C: Overwrite + ?Sized,
    F: FnMut(&C::Elem) -> C::Elem,
{
    fn run(mut self, target: &mut C) -> Result<()> {
        for item in target.elems_mut() {
            *item = (self.f)(item);
        }
        Ok(())
    }
}
