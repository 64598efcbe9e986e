// src/error.rs
// Construction-time failures. Numeric degeneracies (zero divisors, log of
// zero, overflow) never surface here: they propagate as NaN/Inf components.

use thiserror::Error;

/// Result alias for construction and conversion.
pub type Result<T> = std::result::Result<T, DimensionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// The component count cannot describe any Cayley-Dickson algebra.
    #[error("component count {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    /// A valid count, but not the one the target algebra requires.
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    Mismatch { expected: usize, found: usize },
}

impl DimensionError {
    /// Classifies a component count `found` offered to an algebra of dimension `expected`.
    pub(crate) fn for_count(expected: usize, found: usize) -> Self {
        if found.is_power_of_two() {
            DimensionError::Mismatch { expected, found }
        } else {
            DimensionError::NotPowerOfTwo { len: found }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_counts() {
        assert_eq!(DimensionError::for_count(4, 3), DimensionError::NotPowerOfTwo { len: 3 });
        assert_eq!(DimensionError::for_count(4, 0), DimensionError::NotPowerOfTwo { len: 0 });
        assert_eq!(
            DimensionError::for_count(4, 8),
            DimensionError::Mismatch { expected: 4, found: 8 }
        );
    }

    #[test]
    fn messages_name_the_counts() {
        let msg = DimensionError::Mismatch { expected: 2, found: 4 }.to_string();
        assert!(msg.contains('2') && msg.contains('4'));
        assert_eq!(
            DimensionError::NotPowerOfTwo { len: 6 }.to_string(),
            "component count 6 is not a power of two"
        );
    }
}
