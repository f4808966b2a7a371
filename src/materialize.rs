//! Turning a pipeline into an owned container.
//!
//! Each target container picks one of two strategies at compile time, exposed as
//! [`Materialize::STRATEGY`]:
//!
//! * [`Strategy::Direct`]: the container's own `FromIterator`, fed through the
//!   [`Iter`] bridge so it sees the cursor's exact size hint and allocates once.
//! * [`Strategy::Incremental`]: default-construct, reserve when the cursor knows how many
//!   elements are left, then push each element.
//!
//! Either way the container receives the elements in production order, each exactly once.
//!
//! ```rust
//! use lazyseq::prelude::*;
//! use lazyseq::view;
//! use std::collections::LinkedList;
//!
//! let squares: LinkedList<u32> = iota(1, 5) | view::transform(|x: u32| x * x) | to();
//! assert_eq!(squares.into_iter().collect::<Vec<_>>(), vec![1, 4, 9, 16]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::action::{PushBack, Reserve};
use crate::cursor::{Cursor, Sequence};
use crate::pipe::{Iter, Stage};

/// How a container is built from a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One `FromIterator` call.
    Direct,
    /// `Default`, an optional reservation, then one push per element.
    Incremental,
}

/// A container that can be filled from a cursor of `T`.
pub trait Materialize<T>: Sized {
    const STRATEGY: Strategy;

    fn materialize<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T>;
}

/// Build `B` in one `FromIterator` call.
#[inline]
pub fn collect_direct<B, C>(cursor: C) -> B
where
    C: Cursor,
    B: FromIterator<C::Item>,
{
    event!(trace, strategy = "direct", hint = ?cursor.bounds(), "materializing");
    Iter::new(cursor).collect()
}

/// Build `B` by pushing elements one at a time.
///
/// ```rust
/// use lazyseq::materialize::collect_incremental;
/// use lazyseq::prelude::*;
///
/// let v: Vec<i32> = collect_incremental(iota(0, 4));
/// assert_eq!(v, vec![0, 1, 2, 3]);
/// ```
pub fn collect_incremental<B, C>(mut cursor: C) -> B
where
    C: Cursor<Item = B::Elem>,
    B: Default + Reserve + PushBack,
{
    let mut out = B::default();
    match cursor.remaining() {
        Some(n) => {
            event!(trace, strategy = "incremental", reserve = n, "materializing");
            out.reserve_for(n);
        }
        None => event!(trace, strategy = "incremental", "materializing without size"),
    }
    while let Some(item) = cursor.next() {
        out.push_back(item);
    }
    out
}

impl<T> Materialize<T> for Vec<T> {
    const STRATEGY: Strategy = Strategy::Direct;

    #[inline]
    fn materialize<C: Cursor<Item = T>>(cursor: C) -> Self {
        collect_direct(cursor)
    }
}

impl<T> Materialize<T> for VecDeque<T> {
    const STRATEGY: Strategy = Strategy::Direct;

    #[inline]
    fn materialize<C: Cursor<Item = T>>(cursor: C) -> Self {
        collect_direct(cursor)
    }
}

impl<T> Materialize<T> for LinkedList<T> {
    const STRATEGY: Strategy = Strategy::Incremental;

    #[inline]
    fn materialize<C: Cursor<Item = T>>(cursor: C) -> Self {
        collect_incremental(cursor)
    }
}

macro_rules! string_from {
    ($([$($lt:lifetime)?] $item:ty),*) => {$(
        impl<$($lt)?> Materialize<$item> for String {
            const STRATEGY: Strategy = Strategy::Direct;

            #[inline]
            fn materialize<C: Cursor<Item = $item>>(cursor: C) -> Self {
                collect_direct(cursor)
            }
        }
    )*};
}

string_from!([] char, ['a] &'a char, ['a] &'a str, [] String);

impl<K: Ord, V> Materialize<(K, V)> for BTreeMap<K, V> {
    const STRATEGY: Strategy = Strategy::Direct;

    #[inline]
    fn materialize<C: Cursor<Item = (K, V)>>(cursor: C) -> Self {
        collect_direct(cursor)
    }
}

impl<T: Ord> Materialize<T> for BTreeSet<T> {
    const STRATEGY: Strategy = Strategy::Direct;

    #[inline]
    fn materialize<C: Cursor<Item = T>>(cursor: C) -> Self {
        collect_direct(cursor)
    }
}

impl<K, V, H> Materialize<(K, V)> for HashMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    const STRATEGY: Strategy = Strategy::Incremental;

    #[inline]
    fn materialize<C: Cursor<Item = (K, V)>>(cursor: C) -> Self {
        collect_incremental(cursor)
    }
}

impl<T, H> Materialize<T> for HashSet<T, H>
where
    T: Eq + Hash,
    H: BuildHasher + Default,
{
    const STRATEGY: Strategy = Strategy::Incremental;

    #[inline]
    fn materialize<C: Cursor<Item = T>>(cursor: C) -> Self {
        collect_incremental(cursor)
    }
}

/// Bound form of [`View::to`](crate::view::View::to).
pub struct ToFn<B> {
    _target: PhantomData<fn() -> B>,
}

/// Materialize at the end of a pipe. The container type comes from the annotation on the
/// binding, or from a turbofish: `to::<BTreeSet<_>>()`.
#[inline]
pub fn to<B>() -> ToFn<B> {
    ToFn {
        _target: PhantomData,
    }
}

impl<S, B> Stage<S> for ToFn<B>
where
    S: Sequence,
    B: Materialize<S::Item>,
{
    type Output = B;

    #[inline]
    fn apply(self, seq: S) -> B {
        B::materialize(seq.into_cursor())
    }
}

/// Bound form of [`View::to_vec`](crate::view::View::to_vec).
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVecFn;

/// Materialize into a `Vec` at the end of a pipe.
#[inline]
pub fn to_vec() -> ToVecFn {
    ToVecFn
}

impl<S: Sequence> Stage<S> for ToVecFn {
    type Output = Vec<S::Item>;

    #[inline]
    fn apply(self, seq: S) -> Vec<S::Item> {
        <Vec<S::Item> as Materialize<S::Item>>::materialize(seq.into_cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::view;

    fn strategy_of<B: Materialize<T>, T>() -> Strategy {
        B::STRATEGY
    }

    #[test]
    fn test_strategies() {
        assert_eq!(strategy_of::<Vec<u8>, u8>(), Strategy::Direct);
        assert_eq!(strategy_of::<String, char>(), Strategy::Direct);
        assert_eq!(strategy_of::<LinkedList<u8>, u8>(), Strategy::Incremental);
        assert_eq!(
            strategy_of::<HashMap<u8, u8>, (u8, u8)>(),
            Strategy::Incremental
        );
    }

    #[test]
    fn test_order_matches_production_order() {
        let src = vec![5, 3, 8, 1];
        let list: LinkedList<i32> = all(&src).cloned().to();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), src);
        let dq: VecDeque<i32> = all(&src) | view::cloned() | to();
        assert_eq!(dq, VecDeque::from(src.clone()));
    }

    #[test]
    fn test_associative_targets() {
        let words = vec!["b", "a", "b"];
        let set: BTreeSet<&str> = all(&words).cloned().to();
        assert_eq!(set.len(), 2);

        let last_seen: HashMap<&str, usize> = all(&words)
            .cloned()
            .enumerate()
            .transform(|(i, w): (usize, &str)| (w, i))
            .to();
        assert_eq!(last_seen["b"], 2);

        let by_index: BTreeMap<usize, &str> = all(&words).cloned().enumerate().to();
        assert_eq!(by_index[&1], "a");

        let hashed: HashSet<i32> = iota(0, 10).filter(|x| x % 3 == 0).to();
        assert_eq!(hashed.len(), 4);
    }

    #[test]
    fn test_strings_from_chars_and_pieces() {
        let s: String = all("héllo").reverse().to();
        assert_eq!(s, "olléh");
        let pieces = vec!["ab", "cd"];
        let joined: String = all(&pieces).cloned().to();
        assert_eq!(joined, "abcd");
    }

    #[test]
    fn test_incremental_without_known_size() {
        let c = iota(0, 20).filter(|x| x % 5 == 0);
        assert_eq!(c.remaining(), None);
        let list: LinkedList<i32> = collect_incremental(c);
        assert_eq!(list.len(), 4);
    }
}
