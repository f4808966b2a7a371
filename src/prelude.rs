//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for the traits, sources and pipe helpers. Views and
//! actions share names (`take`, `reverse`, `unique`, ...) so they stay behind their
//! module paths: `view::take(3)`, `action::take(3)`.

// Core traits
pub use crate::cursor::{
    BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, RandomAccessCursor,
    Sequence, SizedCursor,
};
pub use crate::materialize::Materialize;
pub use crate::pipe::{ActOn, Action, Stage};
pub use crate::view::View;
pub use crate::{RangeError, Step};

// Sources
pub use crate::cursor::{all, from_iter, single_pass};
pub use crate::view::{
    concat_all, empty, generate, iota, iota_from, repeat, repeat_n, single, Iota, IotaFrom,
    Tail,
};

// Stepping
pub use crate::cursor::{advance, as_slice, begin, distance, end, is_end, prev, size};

// Composition
pub use crate::pipe::{act_with, chain, compose, stage, Mutable};

// Terminals
pub use crate::algorithm::accumulate;
pub use crate::materialize::{to, to_vec};
