//! Inclusive range of word lengths

use crate::error::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// Validated `min..=max` word lengths, both at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Validate and build a range
    ///
    /// # Errors
    /// [`Error::InvalidRange`] when a bound is zero or `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        let reason = if min < 1 || max < 1 {
            Some("lengths must be at least 1")
        } else if min > max {
            Some("minimum length cannot be greater than maximum length")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidRange { min, max, reason }),
            None => Ok(Self { min, max }),
        }
    }

    /// Range covering exactly one length
    pub fn single(length: usize) -> Result<Self> {
        Self::new(length, length)
    }

    /// Shortest length
    pub fn min(&self) -> usize {
        self.min
    }

    /// Longest length
    pub fn max(&self) -> usize {
        self.max
    }

    /// Lengths in increasing order
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    /// Number of distinct lengths
    pub fn len(&self) -> usize {
        self.max - self.min + 1
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let range = LengthRange::new(2, 4).unwrap();
        assert_eq!(range.lengths().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(range.len(), 3);
        assert_eq!(range.to_string(), "2-4");
    }

    #[test]
    fn test_single_length() {
        let range = LengthRange::single(5).unwrap();
        assert_eq!(range.min(), range.max());
        assert_eq!(range.len(), 1);
        assert_eq!(range.to_string(), "5");
    }

    #[test]
    fn test_zero_bounds_rejected() {
        for (min, max) in [(0, 2), (1, 0), (0, 0)] {
            let err = LengthRange::new(min, max).unwrap_err();
            assert!(matches!(err, Error::InvalidRange { .. }), "{min}..={max}");
        }
    }

    #[test]
    fn test_inverted_rejected() {
        let err = LengthRange::new(3, 2).unwrap_err();
        assert!(err.to_string().contains("cannot be greater"));
    }
}
