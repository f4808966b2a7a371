//! Actions that reorder elements without changing the size: `reverse`, the sorts and
//! `shuffle`.
//!
//! Sorts are stable and need [`Permute`]; `reverse` only needs to walk the container from
//! both ends, so it also works on linked lists.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::mem;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::container::{Overwrite, Permute};
use crate::error::Result;
use crate::pipe::Action;

/// Created via [`reverse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseFn;

/// Reverse the element order in place.
#[inline]
pub fn reverse() -> ReverseFn {
    ReverseFn
}

impl<C: Overwrite + ?Sized> Action<C> for ReverseFn {
    fn run(self, target: &mut C) -> Result<()> {
        let mut elems = target.elems_mut();
        while let (Some(front), Some(back)) = (elems.next(), elems.next_back()) {
            mem::swap(front, back);
        }
        Ok(())
    }
}

/// Created via [`sort`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SortFn;

/// Sort ascending. Equal elements keep their relative order.
#[inline]
pub fn sort() -> SortFn {
    SortFn
}

impl<C> Action<C> for SortFn
where
    C: Permute + ?Sized,
    C::Elem: Ord,
{
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        let elems = target.elems();
        event!(trace, len = elems.len(), "sorting");
        elems.sort();
        Ok(())
    }
}

/// Created via [`sort_by`].
pub struct SortByFn<T, F> {
    cmp: F,
    _elem: PhantomData<fn(&T)>,
}

/// Sort with a comparison function.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut v = vec![1, 3, 2];
/// v.act(action::sort_by(|a: &i32, b: &i32| b.cmp(a)))?;
/// assert_eq!(v, vec![3, 2, 1]);
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
#[inline]
pub fn sort_by<T, F>(cmp: F) -> SortByFn<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    SortByFn {
        cmp,
        _elem: PhantomData,
    }
}

impl<C, F> Action<C> for SortByFn<C::Elem, F>
where
    C: Permute + ?Sized,
    F: FnMut(&C::Elem, &C::Elem) -> Ordering,
{
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        target.elems().sort_by(self.cmp);
        Ok(())
    }
}

/// Created via [`sort_by_key`].
pub struct SortByKeyFn<T, F> {
    key: F,
    _elem: PhantomData<fn(&T)>,
}

/// Sort by a projected key.
#[inline]
pub fn sort_by_key<T, K, F>(key: F) -> SortByKeyFn<T, F>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    SortByKeyFn {
        key,
        _elem: PhantomData,
    }
}

impl<C, K, F> Action<C> for SortByKeyFn<C::Elem, F>
where
    C: Permute + ?Sized,
    F: FnMut(&C::Elem) -> K,
    K: Ord,
{
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        target.elems().sort_by_key(self.key);
        Ok(())
    }
}

/// Created via [`sort_with`].
pub struct SortWithFn<T, F, P> {
    cmp: F,
    proj: P,
    _elem: PhantomData<fn(&T)>,
}

/// Sort by comparing projections with `cmp`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut people = vec![("ann", 31), ("bob", 25), ("cat", 31)];
/// people.act(action::sort_with(
///     |a: &u32, b: &u32| b.cmp(a),
///     |p: &(&str, u32)| p.1,
/// ))?;
/// assert_eq!(people, vec![("ann", 31), ("cat", 31), ("bob", 25)]);
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
#[inline]
pub fn sort_with<T, K, F, P>(cmp: F, proj: P) -> SortWithFn<T, F, P>
where
    F: FnMut(&K, &K) -> Ordering,
    P: FnMut(&T) -> K,
{
    SortWithFn {
        cmp,
        proj,
        _elem: PhantomData,
    }
}

impl<C, K, F, P> Action<C> for SortWithFn<C::Elem, F, P>
where
    C: Permute + ?Sized,
    F: FnMut(&K, &K) -> Ordering,
    P: FnMut(&C::Elem) -> K,
{
    fn run(self, target: &mut C) -> Result<()> {
        let SortWithFn {
            mut cmp, mut proj, ..
        } = self;
        target.elems().sort_by(|a, b| cmp(&proj(a), &proj(b)));
        Ok(())
    }
}

/// Created via [`shuffle`] or [`shuffle_random`].
#[derive(Debug)]
pub struct ShuffleFn<R> {
    rng: R,
}

/// Shuffle uniformly with the given generator.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut v: Vec<u32> = (0..20).collect();
/// v.act(action::shuffle(StdRng::seed_from_u64(7)))?;
/// v.sort();
/// assert_eq!(v, (0..20).collect::<Vec<_>>());
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
#[inline]
pub fn shuffle<R: Rng>(rng: R) -> ShuffleFn<R> {
    ShuffleFn { rng }
}

/// Shuffle with the thread-local generator.
#[inline]
pub fn shuffle_random() -> ShuffleFn<ThreadRng> {
    shuffle(rand::thread_rng())
}

impl<C: Permute + ?Sized, R: Rng> Action<C> for ShuffleFn<R> {
    #[inline]
    fn run(mut self, target: &mut C) -> Result<()> {
        target.elems().shuffle(&mut self.rng);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::{ActOn, Mutable};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{LinkedList, VecDeque};

    #[test]
    fn test_reverse_odd_and_even() {
        let mut odd = vec![1, 2, 3];
        odd.act(reverse()).unwrap();
        assert_eq!(odd, vec![3, 2, 1]);

        let mut even: LinkedList<i32> = (0..4).collect();
        even.act(reverse()).unwrap();
        assert_eq!(even.into_iter().collect::<Vec<_>>(), vec![3, 2, 1, 0]);

        let mut empty: Vec<i32> = Vec::new();
        empty.act(reverse()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_sort_on_deque_and_array() {
        let mut dq: VecDeque<i32> = VecDeque::new();
        for x in [3, 1, 2] {
            dq.push_front(x);
        }
        dq.act(sort()).unwrap();
        assert_eq!(dq, VecDeque::from(vec![1, 2, 3]));

        let sorted = Mutable::new([5, 3, 4]) | sort();
        assert_eq!(sorted.finish(), Ok([3, 4, 5]));
    }

    #[test]
    fn test_sort_by_key_is_stable() {
        let mut v = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        v.act(sort_by_key(|p: &(i32, char)| p.0)).unwrap();
        assert_eq!(v, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        a.act(shuffle(StdRng::seed_from_u64(1))).unwrap();
        b.act(shuffle(StdRng::seed_from_u64(1))).unwrap();
        assert_eq!(a, b);
        a.act(sort()).unwrap();
        assert_eq!(a, (0..50).collect::<Vec<_>>());

        let mut c = vec![1, 2, 3];
        c.act(shuffle_random()).unwrap();
        assert_eq!(c.len(), 3);
    }
}
