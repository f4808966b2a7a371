//! Actions that cut or grow a container at computed positions.
//!
//! Cut points are clamped the way the matching views clamp them: `take(n)` with `n` past
//! the end keeps everything, `drop(n)` empties the container. Only positions that would
//! have to be invented (`insert` past the end, `erase` with `to > len`, an inverted
//! `slice`) are range errors.

use super::container::{Compact, Erase, Insert, PopBack, PopFront, PushBack, PushFront};
use crate::error::{non_zero, ordered, within, Result};
use crate::pipe::Action;

#[inline]
fn cut<C: Erase + ?Sized>(target: &mut C, from: usize, to: usize) {
    if from < to {
        event!(trace, from, to, len = target.size(), "erasing range");
        target.erase_range(from, to);
    }
}

/// Created via [`erase`].
#[derive(Debug, Clone, Copy)]
pub struct EraseFn {
    from: usize,
    to: usize,
}

/// Remove positions `from..to`.
#[inline]
pub fn erase(from: usize, to: usize) -> EraseFn {
    EraseFn { from, to }
}

impl<C: Erase + ?Sized> Action<C> for EraseFn {
    fn run(self, target: &mut C) -> Result<()> {
        ordered(self.from, self.to)?;
        within(self.to, target.size())?;
        cut(target, self.from, self.to);
        Ok(())
    }
}

/// Created via [`insert`].
#[derive(Debug, Clone, Copy)]
pub struct InsertFn<T> {
    at: usize,
    value: T,
}

/// Insert `value` before position `at`; `at == len` appends.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::action;
///
/// let mut v = vec![1, 3];
/// v.act(action::insert(1, 2))?;
/// assert_eq!(v, vec![1, 2, 3]);
/// assert!(v.act(action::insert(9, 0)).is_err());
/// # Ok::<(), lazyseq::RangeError>(())
/// ```
#[inline]
pub fn insert<T>(at: usize, value: T) -> InsertFn<T> {
    InsertFn { at, value }
}

impl<C: Insert + ?Sized> Action<C> for InsertFn<C::Elem> {
    fn run(self, target: &mut C) -> Result<()> {
        let at = within(self.at, target.size())?;
        target.insert_at(at, self.value);
        Ok(())
    }
}

/// Created via [`push_back`].
#[derive(Debug, Clone, Copy)]
pub struct PushBackFn<T> {
    value: T,
}

/// Append `value`.
#[inline]
pub fn push_back<T>(value: T) -> PushBackFn<T> {
    PushBackFn { value }
}

impl<C: PushBack + ?Sized> Action<C> for PushBackFn<C::Elem> {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        target.push_back(self.value);
        Ok(())
    }
}

/// Created via [`push_front`].
#[derive(Debug, Clone, Copy)]
pub struct PushFrontFn<T> {
    value: T,
}

/// Prepend `value`. O(1) on deques and lists, a shift on vectors.
#[inline]
pub fn push_front<T>(value: T) -> PushFrontFn<T> {
    PushFrontFn { value }
}

impl<C: PushFront + ?Sized> Action<C> for PushFrontFn<C::Elem> {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        target.push_front(self.value);
        Ok(())
    }
}

/// Created via [`pop_back`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PopBackFn;

/// Discard the last element. Call [`PopBack::pop_back`] directly to keep it.
#[inline]
pub fn pop_back() -> PopBackFn {
    PopBackFn
}

impl<C: PopBack + ?Sized> Action<C> for PopBackFn {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        target.pop_back();
        Ok(())
    }
}

/// Created via [`pop_front`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PopFrontFn;

/// Discard the first element. Call [`PopFront::pop_front`] directly to keep it.
#[inline]
pub fn pop_front() -> PopFrontFn {
    PopFrontFn
}

impl<C: PopFront + ?Sized> Action<C> for PopFrontFn {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        target.pop_front();
        Ok(())
    }
}

/// Created via [`drop`].
#[derive(Debug, Clone, Copy)]
pub struct DropFn {
    n: usize,
}

/// Remove the first `n` elements, or all of them if there are fewer.
#[inline]
pub fn drop(n: usize) -> DropFn {
    DropFn { n }
}

impl<C: Erase + ?Sized> Action<C> for DropFn {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        let to = self.n.min(target.size());
        cut(target, 0, to);
        Ok(())
    }
}

/// Created via [`take`].
#[derive(Debug, Clone, Copy)]
pub struct TakeFn {
    n: usize,
}

/// Keep only the first `n` elements.
#[inline]
pub fn take(n: usize) -> TakeFn {
    TakeFn { n }
}

impl<C: Erase + ?Sized> Action<C> for TakeFn {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        let len = target.size();
        cut(target, self.n.min(len), len);
        Ok(())
    }
}

/// Created via [`drop_last`].
#[derive(Debug, Clone, Copy)]
pub struct DropLastFn {
    n: usize,
}

/// Remove the last `n` elements, or all of them if there are fewer.
#[inline]
pub fn drop_last(n: usize) -> DropLastFn {
    DropLastFn { n }
}

impl<C: Erase + ?Sized> Action<C> for DropLastFn {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        let len = target.size();
        cut(target, len.saturating_sub(self.n), len);
        Ok(())
    }
}

/// Created via [`take_last`].
#[derive(Debug, Clone, Copy)]
pub struct TakeLastFn {
    n: usize,
}

/// Keep only the last `n` elements.
#[inline]
pub fn take_last(n: usize) -> TakeLastFn {
    TakeLastFn { n }
}

impl<C: Erase + ?Sized> Action<C> for TakeLastFn {
    #[inline]
    fn run(self, target: &mut C) -> Result<()> {
        let len = target.size();
        cut(target, 0, len.saturating_sub(self.n));
        Ok(())
    }
}

/// Created via [`slice`].
#[derive(Debug, Clone, Copy)]
pub struct SliceFn {
    from: usize,
    to: usize,
}

/// Keep positions `from..to`. `to` is clamped to the length; `from > to` is a range error
/// reported when the action runs.
#[inline]
pub fn slice(from: usize, to: usize) -> SliceFn {
    SliceFn { from, to }
}

impl<C: Erase + ?Sized> Action<C> for SliceFn {
    fn run(self, target: &mut C) -> Result<()> {
        ordered(self.from, self.to)?;
        let len = target.size();
        let to = self.to.min(len);
        cut(target, to, len);
        cut(target, 0, self.from.min(to));
        Ok(())
    }
}

/// Created via [`stride`].
#[derive(Debug, Clone, Copy)]
pub struct StrideFn {
    step: usize,
}

/// Keep every `step`-th element, starting with the first. A zero step is a range error
/// reported when the action runs.
#[inline]
pub fn stride(step: usize) -> StrideFn {
    StrideFn { step }
}

impl<C: Compact + ?Sized> Action<C> for StrideFn {
    fn run(self, target: &mut C) -> Result<()> {
        let step = non_zero(self.step, "stride step")?;
        let mut index = 0;
        target.retain_elems(|_| {
            let keep = index % step == 0;
            index += 1;
            keep
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;
    use crate::pipe::ActOn;
    use std::collections::{LinkedList, VecDeque};

    #[test]
    fn test_drop_and_take_clamp() {
        let mut v: Vec<i32> = (0..10).collect();
        v.act(drop(4)).unwrap();
        assert_eq!(v, vec![4, 5, 6, 7, 8, 9]);
        v.act(take(100)).unwrap();
        assert_eq!(v.len(), 6);
        v.act(drop(100)).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_last_variants_on_list() {
        let mut list: LinkedList<i32> = (0..6).collect();
        list.act(drop_last(2)).unwrap();
        list.act(take_last(3)).unwrap();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_slice_keeps_window() {
        let mut dq: VecDeque<i32> = (0..8).collect();
        dq.act(slice(2, 5)).unwrap();
        assert_eq!(dq, VecDeque::from(vec![2, 3, 4]));

        let mut v = vec![1, 2, 3];
        v.act(slice(1, 50)).unwrap();
        assert_eq!(v, vec![2, 3]);
        assert_eq!(
            v.act(slice(2, 1)).err(),
            Some(RangeError::InvertedBounds { from: 2, to: 1 })
        );
    }

    #[test]
    fn test_erase_checks_bounds() {
        let mut v = vec![1, 2, 3, 4];
        v.act(erase(1, 3)).unwrap();
        assert_eq!(v, vec![1, 4]);
        assert_eq!(
            v.act(erase(0, 5)).err(),
            Some(RangeError::OutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_push_and_pop_both_ends() {
        let mut dq = VecDeque::from(vec![2]);
        dq.act(push_front(1))
            .unwrap()
            .act(push_back(3))
            .unwrap()
            .act(pop_front())
            .unwrap();
        assert_eq!(dq, VecDeque::from(vec![2, 3]));
        let mut empty: Vec<i32> = Vec::new();
        assert!(empty.act(pop_back()).is_ok());
    }

    #[test]
    fn test_stride_action() {
        let mut v: Vec<i32> = (0..10).collect();
        v.act(stride(4)).unwrap();
        assert_eq!(v, vec![0, 4, 8]);
        assert!(v.act(stride(0)).is_err());
    }
}
