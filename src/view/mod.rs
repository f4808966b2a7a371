//! Lazy stage producers.
//!
//! Every view is a cursor wrapping another cursor and comes in two spellings that build
//! the same type:
//!
//! * the direct form, a [`View`] method: `all(&v).filter(pred)`;
//! * the bound form, a free function of this module used with the pipe operator:
//!   `all(&v) | view::filter(pred)`.
//!
//! Nothing is computed until the outermost cursor is pulled, and each pull does only the
//! upstream work needed for one element.

use std::borrow::Borrow;
use std::ops::Add;

mod chunk;
mod filter;
mod generate;
mod indirect;
mod interleave;
mod join;
mod reverse;
mod take;
mod transform;
mod zip;

pub use chunk::{chunk, sliding, split, split_when, Chunk, ChunkFn, Sliding, SlidingFn, Split};
pub use chunk::{SplitFn, SplitWhenFn};
pub use filter::{drop_while, filter, remove, remove_if, take_while};
pub use filter::{DropWhile, DropWhileFn, Filter, FilterFn, RemoveFn, RemoveIfFn};
pub use filter::{TakeWhile, TakeWhileFn};
pub use generate::{cycle, empty, generate, iota, iota_from, repeat, repeat_n, single};
pub use generate::{Countable, Cycle, CycleFn, Empty, Generate, Iota, IotaFrom};
pub use generate::{Repeat, RepeatN, Single};
pub use indirect::{address_of, indirect, ptr, AddressOf, AddressOfFn, Indirect, IndirectFn};
pub use indirect::{Ownership, Ptr, PtrFn, Resolve};
pub use interleave::{interleave, intersperse, Interleave, InterleaveFn, Intersperse};
pub use interleave::{IntersperseFn, Tail};
pub use join::{concat, concat_all, flatten, join_with, Concat, ConcatAll, ConcatFn};
pub use join::{Flatten, FlattenFn, JoinWith, JoinWithFn};
pub use reverse::{reverse, Reverse, ReverseFn};
pub use take::{drop, drop_last, slice, stride, take, take_last};
pub use take::{DropFn, DropFront, DropLast, DropLastFn, Slice, SliceFn, Stride, StrideFn};
pub use take::{Take, TakeFn, TakeLast, TakeLastFn};
pub use transform::{cloned, enumerate, keys, partial_sum, replace, replace_if, transform};
pub use transform::{unique, values, Cloned, ClonedFn, Enumerate, EnumerateFn, Keys, KeysFn};
pub use transform::{PartialSum, PartialSumFn, Replace, ReplaceFn, ReplaceIfFn, Transform};
pub use transform::{TransformFn, Unique, UniqueFn, Values, ValuesFn};
pub use zip::{zip, zip3, zip_with, Zip, Zip3, Zip3Fn, ZipFn, ZipWith, ZipWithFn};

use crate::cursor::{BidirectionalCursor, Cursor, ForwardCursor, Sequence};
use crate::error::Result;
use crate::materialize::Materialize;
use crate::predicate::{EqualTo, Not};

/// The direct form of every view, available on every cursor.
///
/// Capability requirements show up as `where Self: ...` bounds, so asking a single-pass
/// cursor for `cycle` or a forward-only one for `reverse` is a compile error rather than a
/// slow path.
pub trait View: Cursor + Sized {
    /// Keep the elements matching `pred`.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Skip the elements equal to `value`.
    #[inline]
    fn remove<V>(self, value: V) -> Filter<Self, Not<EqualTo<V>>>
    where
        Self::Item: Borrow<V>,
        V: PartialEq,
    {
        Filter::new(self, Not(EqualTo(value)))
    }

    /// Skip the elements matching `pred`.
    #[inline]
    fn remove_if<P>(self, pred: P) -> Filter<Self, Not<P>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, Not(pred))
    }

    #[inline]
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    #[inline]
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, pred)
    }

    /// Map every element through `f`.
    #[inline]
    fn transform<B, F>(self, f: F) -> Transform<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        Transform::new(self, f)
    }

    #[inline]
    fn cloned<'a, T>(self) -> Cloned<Self, T>
    where
        Self: Cursor<Item = &'a T>,
        T: Clone + 'a,
    {
        Transform::new(self, T::clone as fn(&T) -> T)
    }

    #[inline]
    fn keys<K, V>(self) -> Keys<Self, K, V>
    where
        Self: Cursor<Item = (K, V)>,
    {
        Transform::new(self, transform::pair_first as fn((K, V)) -> K)
    }

    #[inline]
    fn values<K, V>(self) -> Values<Self, K, V>
    where
        Self: Cursor<Item = (K, V)>,
    {
        Transform::new(self, transform::pair_second as fn((K, V)) -> V)
    }

    /// Pair each element with its zero-based position.
    #[inline]
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    #[inline]
    fn replace<V>(self, old: V, with: Self::Item) -> Replace<Self, EqualTo<V>, Self::Item>
    where
        Self::Item: Borrow<V> + Clone,
        V: PartialEq,
    {
        Replace::new(self, EqualTo(old), with)
    }

    #[inline]
    fn replace_if<P>(self, pred: P, with: Self::Item) -> Replace<Self, P, Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        Replace::new(self, pred, with)
    }

    #[inline]
    fn partial_sum(self) -> PartialSum<Self, Self::Item>
    where
        Self::Item: Add<Output = Self::Item> + Clone,
    {
        PartialSum::new(self)
    }

    /// Collapse runs of equal adjacent elements.
    #[inline]
    fn unique(self) -> Unique<Self, Self::Item>
    where
        Self::Item: PartialEq + Clone,
    {
        Unique::new(self)
    }

    /// Keep at most the first `n` elements.
    #[inline]
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// Skip the first `n` elements.
    #[inline]
    fn drop(self, n: usize) -> DropFront<Self> {
        DropFront::new(self, n)
    }

    #[inline]
    fn take_last(self, n: usize) -> TakeLast<Self>
    where
        Self: ForwardCursor,
    {
        TakeLast::new(self, n)
    }

    #[inline]
    fn drop_last(self, n: usize) -> DropLast<Self>
    where
        Self: ForwardCursor,
    {
        DropLast::new(self, n)
    }

    /// Positions `from..to`; fails when `from > to`.
    #[inline]
    fn slice(self, from: usize, to: usize) -> Result<Slice<Self>> {
        take::slice_of(self, from, to)
    }

    /// Every `step`-th element; fails when `step` is zero.
    #[inline]
    fn stride(self, step: usize) -> Result<Stride<Self>> {
        Stride::new(self, step)
    }

    #[inline]
    fn zip<S: Sequence>(self, other: S) -> Zip<Self, S::Cursor> {
        Zip::new(self, other.into_cursor())
    }

    #[inline]
    fn zip3<S2, S3>(self, second: S2, third: S3) -> Zip3<Self, S2::Cursor, S3::Cursor>
    where
        S2: Sequence,
        S3: Sequence,
    {
        Zip3::new(self, second.into_cursor(), third.into_cursor())
    }

    #[inline]
    fn zip_with<S, F, R>(self, other: S, f: F) -> ZipWith<Self, S::Cursor, F>
    where
        S: Sequence,
        F: FnMut(Self::Item, S::Item) -> R,
    {
        ZipWith::new(self, other.into_cursor(), f)
    }

    /// Groups of `width` elements; fails when `width` is zero.
    #[inline]
    fn chunk(self, width: usize) -> Result<Chunk<Self>>
    where
        Self: ForwardCursor,
    {
        Chunk::new(self, width)
    }

    /// Overlapping windows of `width` elements; fails when `width` is zero.
    #[inline]
    fn sliding(self, width: usize) -> Result<Sliding<Self>>
    where
        Self: ForwardCursor,
    {
        Sliding::new(self, width)
    }

    #[inline]
    fn split<V>(self, separator: V) -> Split<Self, EqualTo<V>>
    where
        Self: ForwardCursor,
        Self::Item: Borrow<V>,
        V: PartialEq,
    {
        Split::new(self, EqualTo(separator))
    }

    #[inline]
    fn split_when<P>(self, pred: P) -> Split<Self, P>
    where
        Self: ForwardCursor,
        P: FnMut(&Self::Item) -> bool,
    {
        Split::new(self, pred)
    }

    #[inline]
    fn concat<S>(self, other: S) -> Concat<Self, S::Cursor>
    where
        S: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other.into_cursor())
    }

    #[inline]
    fn flatten(self) -> Flatten<Self, <Self::Item as Sequence>::Cursor>
    where
        Self::Item: Sequence,
    {
        Flatten::new(self)
    }

    #[inline]
    fn join_with<T>(self, separator: T) -> JoinWith<Self, <Self::Item as Sequence>::Cursor, T>
    where
        Self::Item: Sequence<Item = T>,
        T: Clone,
    {
        JoinWith::new(self, separator)
    }

    /// Alternate with `other`; `tail` says what happens once one side runs out.
    #[inline]
    fn interleave<S>(self, other: S, tail: Tail) -> Interleave<Self, S::Cursor, Self::Item>
    where
        S: Sequence<Item = Self::Item>,
    {
        Interleave::new(self, other.into_cursor(), tail)
    }

    #[inline]
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self, Self::Item>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    #[inline]
    fn reverse(self) -> Reverse<Self>
    where
        Self: BidirectionalCursor,
    {
        Reverse::new(self)
    }

    /// Repeat endlessly; bound it with `take` or similar before consuming.
    #[inline]
    fn cycle(self) -> Cycle<Self>
    where
        Self: ForwardCursor,
    {
        Cycle::new(self)
    }

    #[inline]
    fn address_of<'a, T>(self) -> AddressOf<Self, T>
    where
        Self: Cursor<Item = &'a T>,
        T: ?Sized + 'a,
    {
        Transform::new(self, indirect::address_of_ref as fn(&T) -> *const T)
    }

    #[inline]
    fn indirect(self) -> Indirect<Self, Self::Item>
    where
        Self::Item: Resolve,
    {
        Transform::new(
            self,
            Resolve::resolve as fn(Self::Item) -> <Self::Item as Resolve>::Target,
        )
    }

    #[inline]
    fn ptr(self) -> Ptr<Self, Self::Item>
    where
        Self::Item: Resolve,
    {
        Transform::new(
            self,
            indirect::address_by_value
                as fn(Self::Item) -> *const <Self::Item as Resolve>::Pointee,
        )
    }

    /// Drain into a container of the caller's choosing.
    #[inline]
    fn to<B>(self) -> B
    where
        B: Materialize<Self::Item>,
    {
        B::materialize(self)
    }

    #[inline]
    fn to_vec(self) -> Vec<Self::Item> {
        self.to()
    }
}

impl<C: Cursor> View for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_direct_and_bound_forms_build_the_same_view() {
        let v = vec![5, 6, 7, 8];
        let direct: Take<DropFront<_>> = all(&v).drop(1).take(2);
        let piped: Take<DropFront<_>> = all(&v) | drop(1) | take(2);
        assert_eq!(direct.cloned().to_vec(), piped.cloned().to_vec());
    }

    #[test]
    fn test_long_pipeline_reads_left_to_right() {
        let out = iota(0, 50)
            | filter(|x: &i32| x % 3 == 0)
            | transform(|x: i32| x * 2)
            | drop(1)
            | take(4)
            | to_vec();
        assert_eq!(out, vec![6, 12, 18, 24]);
    }

    #[test]
    fn test_multi_parameter_views_pipe_and_iterate() {
        let zipped = iota(0, 3) | zip(iota(10, 13)) | transform(|(a, b): (i32, i32)| a + b);
        let mut sums = Vec::new();
        for x in zipped {
            sums.push(x);
        }
        assert_eq!(sums, vec![10, 12, 14]);

        let woven = iota(0, 2) | interleave(iota(5, 7), Tail::Stop) | intersperse(-1);
        assert_eq!(woven.into_iter().collect::<Vec<_>>(), vec![0, -1, 5, -1, 1, -1, 6]);

        let labelled = (iota(7, 9) | enumerate()).into_iter().last();
        assert_eq!(labelled, Some((1, 8)));
    }

    #[test]
    fn test_keys_and_values_of_a_map() {
        let m: std::collections::BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(all(&m).keys().cloned().to_vec(), vec!["a", "b"]);
        assert_eq!(all(&m).values().cloned().to_vec(), vec![1, 2]);
    }
}
