//! Fixed-width base-K counter driving enumeration of one length
//!
//! Position 0 is the most significant digit. [`Odometer::advance`]
//! increments the last position and ripples the carry leftward, so the
//! sequence of states is plain counting in base K.

use crate::alphabet::Alphabet;
use smallvec::SmallVec;

/// Lengths up to this many positions stay on the stack
const INLINE_POSITIONS: usize = 16;

/// Position-vector for one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odometer {
    digits: SmallVec<[usize; INLINE_POSITIONS]>,
    radix: usize,
}

impl Odometer {
    /// All-zero vector of `length` positions in base `radix`
    pub fn new(length: usize, radix: usize) -> Self {
        debug_assert!(radix >= 1, "radix must be at least 1");
        Self {
            digits: SmallVec::from_elem(0, length),
            radix,
        }
    }

    /// State reached after `index` advances from zero
    ///
    /// Returns `None` when `index >= radix^length`.
    pub fn from_index(length: usize, radix: usize, mut index: u128) -> Option<Self> {
        let mut odometer = Self::new(length, radix);
        let base = radix as u128;

        for digit in odometer.digits.iter_mut().rev() {
            *digit = (index % base) as usize;
            index /= base;
        }

        (index == 0).then_some(odometer)
    }

    /// Step to the next state
    ///
    /// Returns `false` when the carry ran past position 0, which leaves
    /// every position back at zero and ends this length.
    pub fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return true;
            }
            *digit = 0;
        }
        false
    }

    /// Current digits, most significant first
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for a zero-length vector
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Base of the counter
    pub fn radix(&self) -> usize {
        self.radix
    }

    /// Render the current word into `buf`, replacing its contents
    ///
    /// The alphabet must be the one whose length is the radix.
    pub fn write_word(&self, alphabet: &Alphabet, buf: &mut String) {
        debug_assert_eq!(alphabet.len(), self.radix);
        let chars = alphabet.chars();
        buf.clear();
        buf.extend(self.digits.iter().map(|&d| chars[d]));
    }

    /// Current word as an owned string
    pub fn word(&self, alphabet: &Alphabet) -> String {
        let mut buf = String::with_capacity(self.len());
        self.write_word(alphabet, &mut buf);
        buf
    }
}
