//! Eager, in-place mutation of owned containers.
//!
//! An action is built from its arguments alone and runs against a container later, either
//! through [`ActOn::act`](crate::pipe::ActOn::act), [`Action::run`](crate::pipe::Action::run)
//! or `|=` on a [`Mutable`](crate::pipe::Mutable). Which containers an action accepts is
//! decided by the capability traits in this module; asking a `BTreeSet` to `sort` is a
//! compile error, not a runtime one.
//!
//! ```rust
//! use lazyseq::prelude::*;
//! use lazyseq::action;
//!
//! let mut v = vec![4, 1, 3, 1, 4, 2];
//! v.act(action::sort())?.act(action::unique())?.act(action::take(3))?;
//! assert_eq!(v, vec![1, 2, 3]);
//! # Ok::<(), lazyseq::RangeError>(())
//! ```

mod container;
mod order;
mod resize;
mod rewrite;

pub use self::container::{
    Compact, Container, Erase, Insert, Overwrite, Permute, PopBack, PopFront, PushBack,
    PushFront, Reserve,
};
pub use self::order::{
    reverse, shuffle, shuffle_random, sort, sort_by, sort_by_key, sort_with, ReverseFn,
    ShuffleFn, SortByFn, SortByKeyFn, SortFn, SortWithFn,
};
pub use self::resize::{
    drop, drop_last, erase, insert, pop_back, pop_front, push_back, push_front, slice, stride,
    take, take_last, DropFn, DropLastFn, EraseFn, InsertFn, PopBackFn, PopFrontFn, PushBackFn,
    PushFrontFn, SliceFn, StrideFn, TakeFn, TakeLastFn,
};
pub use self::rewrite::{
    remove, remove_if, replace, replace_if, transform, unique, RemoveFn, RemoveIfFn,
    ReplaceFn, ReplaceIfFn, TransformFn, UniqueFn,
};
