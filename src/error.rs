//! Recoverable range violations.
//!
//! Capability mismatches never reach this module: they are rejected by trait bounds at
//! compile time. What remains are numeric arguments whose validity depends on a runtime
//! value, such as a zero chunk width or an insertion point past the end of a container.

/// An out-of-domain numeric argument passed to a view, action or reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeError {
    /// A width or step that must be positive was zero.
    #[error("{what} must be at least 1")]
    ZeroCount {
        /// Name of the offending parameter.
        what: &'static str,
    },
    /// A `[from, to)` pair with `from > to`.
    #[error("range start {from} is past its end {to}")]
    InvertedBounds { from: usize, to: usize },
    /// A position outside `0..=len` (or `0..len` for element access).
    #[error("position {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Result alias used throughout the crate.
pub type Result<T, E = RangeError> = std::result::Result<T, E>;

pub(crate) fn non_zero(value: usize, what: &'static str) -> Result<usize> {
    if value == 0 {
        Err(RangeError::ZeroCount { what })
    } else {
        Ok(value)
    }
}

pub(crate) fn ordered(from: usize, to: usize) -> Result<()> {
    if from > to {
        Err(RangeError::InvertedBounds { from, to })
    } else {
        Ok(())
    }
}

pub(crate) fn within(index: usize, len: usize) -> Result<usize> {
    if index > len {
        Err(RangeError::OutOfBounds { index, len })
    } else {
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RangeError::ZeroCount { what: "chunk width" }.to_string(),
            "chunk width must be at least 1"
        );
        assert_eq!(
            RangeError::InvertedBounds { from: 4, to: 2 }.to_string(),
            "range start 4 is past its end 2"
        );
        assert_eq!(
            RangeError::OutOfBounds { index: 9, len: 3 }.to_string(),
            "position 9 is out of bounds for length 3"
        );
    }

    #[test]
    fn test_helpers() {
        assert_eq!(non_zero(3, "n"), Ok(3));
        assert!(non_zero(0, "n").is_err());
        assert!(ordered(1, 1).is_ok());
        assert!(ordered(2, 1).is_err());
        assert_eq!(within(3, 3), Ok(3));
        assert!(within(4, 3).is_err());
    }
}
