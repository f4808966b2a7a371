//! Reducers: terminal consumers that drive a pipeline to a scalar or a position.
//!
//! Every reducer accepts any [`Sequence`](crate::cursor::Sequence), so a container, a
//! cursor or a whole pipeline can be passed directly. The ones that may stop early are
//! written as a step function run by [`drive`].

mod find;
mod fold;
mod search;

pub use find::{
    all_of, any_of, at, back, contains, count, count_if, equal, find, find_if, find_if_not,
    front, none_of, position, position_last, position_last_or, position_or,
};
pub use fold::{
    accumulate, fold_left, fold_left_first, fold_right, fold_right_first, is_sorted, max,
    max_by, max_by_key, max_element, min, min_by, min_by_key, min_element,
};
pub use search::{binary_search, lower_bound, upper_bound};

use crate::cursor::Cursor;
use crate::step::Step;

/// Feed every element of `cursor` to `step`, threading an accumulator through.
///
/// `step` returns `Step::Yielded(acc)` to ask for the next element and
/// `Step::Complete(r)` to stop. The result is the `Complete` that stopped the loop, or
/// `Yielded` with the final accumulator once the cursor runs dry. The cursor is borrowed,
/// so the caller can resume from where the loop stopped.
///
/// ```rust
/// use lazyseq::algorithm::drive;
/// use lazyseq::prelude::*;
/// use lazyseq::Step;
///
/// let mut c = iota(1, 100);
/// let first_big = drive(&mut c, 0, |sum, x| {
///     if x * x > 50 { Step::Complete(x) } else { Step::Yielded(sum + x) }
/// });
/// assert_eq!(first_big, Step::Complete(8));
/// assert_eq!(c.next(), Some(9));
/// ```
#[inline]
pub fn drive<C, A, R, F>(cursor: &mut C, init: A, mut step: F) -> Step<A, R>
where
    C: Cursor + ?Sized,
    F: FnMut(A, C::Item) -> Step<A, R>,
{
    let mut acc = init;
    while let Some(item) = cursor.next() {
        match step(acc, item) {
            Step::Yielded(next) => acc = next,
            Step::Complete(done) => return Step::Complete(done),
        }
    }
    Step::Yielded(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_drive_runs_to_exhaustion() {
        let v = vec![1, 2, 3];
        let mut c = all(&v);
        let out: Step<i32, ()> = drive(&mut c, 0, |acc, x| Step::Yielded(acc + x));
        assert_eq!(out, Step::Yielded(6));
        assert!(is_end(&c));
    }

    #[test]
    fn test_drive_stops_without_pulling_further() {
        let mut pulled = 0;
        let mut c = generate(|| {
            pulled += 1;
            Some(pulled)
        });
        let out = drive(&mut c, (), |(), x| {
            if x == 3 {
                Step::Complete(x)
            } else {
                Step::Yielded(())
            }
        });
        assert_eq!(out, Step::Complete(3));
        drop(c);
        assert_eq!(pulled, 3);
    }
}
