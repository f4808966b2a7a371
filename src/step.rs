/// Outcome of one round of a drive loop: keep going with a value, or stop with a result.
///
/// Reducers are written as a closure that is resumed once per element. The closure
/// returns `Step::Yielded(acc)` to ask for the next element and `Step::Complete(r)` to
/// stop early; [`drive`](crate::algorithm::drive) hands the last `Step` back to the caller.
///
/// ```rust
/// use lazyseq::algorithm::drive;
/// use lazyseq::prelude::*;
///
/// // Sum until the running total passes 5.
/// let out = drive(&mut iota(1, 10), 0, |acc, x| {
///     let acc = acc + x;
///     if acc > 5 { Step::Complete(acc) } else { Step::Yielded(acc) }
/// });
/// assert_eq!(out, Step::Complete(6));
/// assert_eq!(out.complete_value(), Some(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// Continue with an intermediate value
    Yielded(Y),
    /// Stop with a final value
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// `true` while the loop still wants elements.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// `true` once the loop stopped early.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// The early-exit result, if the loop stopped before the input ran out.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }
}

impl<T> Step<T, T> {
    /// The value, whether the loop ran to the end or stopped early.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Step::Yielded(t) | Step::Complete(t) => t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_complete() {
        let y: Step<i32, &str> = Step::Yielded(42);
        let d: Step<i32, &str> = Step::Complete("found");

        assert!(y.is_yielded());
        assert!(!y.is_complete());
        assert!(d.is_complete());
        assert!(!d.is_yielded());
    }

    #[test]
    fn test_complete_value_only_on_early_exit() {
        assert_eq!(Step::<i32, &str>::Yielded(42).complete_value(), None);
        assert_eq!(Step::<i32, &str>::Complete("found").complete_value(), Some("found"));
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Step::<u8, u8>::Yielded(1).into_inner(), 1);
        assert_eq!(Step::<u8, u8>::Complete(2).into_inner(), 2);
    }
}
