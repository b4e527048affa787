//! Output size prediction
//!
//! Counts are exact. Totals that do not fit in `u128` are reported as
//! `None` rather than wrapping.

use crate::alphabet::Alphabet;
use crate::range::LengthRange;

/// `radix^length`, or `None` on overflow
pub fn words_for_length(radix: usize, length: usize) -> Option<u128> {
    if radix == 1 {
        return Some(1);
    }
    let exp = u32::try_from(length).ok()?;
    (radix as u128).checked_pow(exp)
}

/// Bytes of line-delimited output for one length
///
/// Each of the `length` positions shows every character `radix^(length-1)`
/// times, and each word carries one trailing newline.
pub fn bytes_for_length(alphabet: &Alphabet, length: usize) -> Option<u128> {
    let words = words_for_length(alphabet.len(), length)?;
    let per_position = words_for_length(alphabet.len(), length.checked_sub(1)?)?;
    let char_bytes = alphabet.char_bytes() as u128;

    (length as u128)
        .checked_mul(per_position)?
        .checked_mul(char_bytes)?
        .checked_add(words)
}

/// Predicted totals for a full run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Estimate {
    /// Words across every length, `None` when it overflows
    pub words: Option<u128>,
    /// Output bytes including newlines, `None` when it overflows
    pub bytes: Option<u128>,
}

impl Estimate {
    /// Compute totals for `range` over `alphabet`
    ///
    /// Runs in time bounded by the point of overflow, not by `range.max()`.
    pub fn compute(range: &LengthRange, alphabet: &Alphabet) -> Self {
        if alphabet.len() == 1 {
            return Self::single_char(range, alphabet);
        }

        let mut words = Some(0u128);
        let mut bytes = Some(0u128);

        // K >= 2: both totals overflow before length 129
        for length in range.lengths() {
            words = words.and_then(|w| w.checked_add(words_for_length(alphabet.len(), length)?));
            bytes = bytes.and_then(|b| b.checked_add(bytes_for_length(alphabet, length)?));
            if words.is_none() && bytes.is_none() {
                break;
            }
        }

        Self { words, bytes }
    }

    /// One word per length: closed form over the arithmetic series of lengths
    fn single_char(range: &LengthRange, alphabet: &Alphabet) -> Self {
        let min = range.min() as u128;
        let max = range.max() as u128;
        let count = max - min + 1;

        // (min + max) * count is always even; halve the even factor first
        let sum = min + max;
        let length_sum = if sum % 2 == 0 {
            (sum / 2).checked_mul(count)
        } else {
            sum.checked_mul(count / 2)
        };
        let bytes = length_sum
            .and_then(|n| n.checked_mul(alphabet.char_bytes() as u128))
            .and_then(|n| n.checked_add(count));

        Self {
            words: Some(count),
            bytes,
        }
    }

    /// Word count narrowed to `u64`, for progress displays
    pub fn words_u64(&self) -> Option<u64> {
        self.words.and_then(|w| u64::try_from(w).ok())
    }
}
