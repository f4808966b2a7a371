//! # lazyseq: lazy, capability-aware sequence pipelines
//!
//! Chain transformations over any sequence-like input and pay only for the elements you
//! pull. A pipeline is a stack of cursors, one per stage, fused into a single nested
//! `next` call per element: nothing is buffered between stages.
//!
//! ## Core Traits
//!
//! - **[`Cursor`]** and its capability ladder ([`ForwardCursor`], [`BidirectionalCursor`],
//!   [`SizedCursor`], [`RandomAccessCursor`], [`ContiguousCursor`]): what a position
//!   can do, checked at compile time
//! - **[`Sequence`]**: anything that can produce a cursor: containers by reference,
//!   integer ranges, iterators, other cursors
//! - **[`Stage`]**: a bound transformation, applied with `|`
//! - **[`Action`]**: an in-place container mutation, applied with `act` or `|=`
//! - **[`Materialize`]**: building an owned container from a pipeline
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//! use lazyseq::{action, view};
//!
//! // Views are lazy and compose with `|`.
//! let evens: Vec<i32> = iota(0, 10) | view::filter(|x: &i32| x % 2 == 0) | to();
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//!
//! // Actions mutate in place.
//! let mut v = vec![5, 3, 5, 1];
//! v.act(action::sort())?.act(action::unique())?;
//! assert_eq!(v, vec![1, 3, 5]);
//!
//! // Range errors are values, not panics.
//! assert!(view::chunk(0).is_err());
//! # Ok::<(), lazyseq::RangeError>(())
//! ```
//!
//! ## Modules
//!
//! **Building pipelines:**
//! - [`cursor`] - capability traits, sources and stepping primitives
//! - [`view`] - lazy stages
//! - [`pipe`] - the `|` protocol, stage composition, the iterator bridge
//!
//! **Consuming them:**
//! - [`algorithm`] - reducers such as `find`, `fold_left` and `binary_search`
//! - [`materialize`] - `to()` and `to_vec()`
//! - [`action`] - in-place mutation of owned containers
//!
//! ## Features
//!
//! - `tracing` (default): emit `trace`/`debug` events at materialization and action
//!   decision points under the `lazyseq` target

#[macro_use]
mod macros;

pub mod action;
pub mod algorithm;
pub mod cursor;
pub mod error;
pub mod materialize;
pub mod pipe;
pub mod predicate;
pub mod prelude;
pub mod step;
pub mod view;

pub use cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, RandomAccessCursor,
    Sequence, SizedCursor,
};
pub use error::{RangeError, Result};
pub use materialize::Materialize;
pub use pipe::{Action, Stage};
pub use step::Step;
pub use view::View;
