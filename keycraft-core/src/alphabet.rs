//! Ordered set of distinct characters words are built from

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Ordered, duplicate-free character sequence
///
/// Index 0 is the "zero digit": the first character of every length's
/// first word. Duplicates are dropped on construction, keeping the first
/// occurrence, so the effective radix always equals the number of
/// distinct characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from characters in order
    ///
    /// # Errors
    /// Returns [`Error::InvalidAlphabet`] when no character is supplied.
    pub fn new<I>(chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut distinct: Vec<char> = Vec::new();
        for c in chars {
            if !distinct.contains(&c) {
                distinct.push(c);
            }
        }

        if distinct.is_empty() {
            return Err(Error::InvalidAlphabet(
                "alphabet must contain at least one character".into(),
            ));
        }

        Ok(Self { chars: distinct })
    }

    /// Number of distinct characters (the radix K)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed alphabet
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in enumeration order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at a digit value
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Whether `c` belongs to the alphabet
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Digit value of `c`, if present
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&x| x == c)
    }

    /// Iterate characters in order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Sum of the UTF-8 widths of all characters
    pub fn char_bytes(&self) -> usize {
        self.chars.iter().map(|c| c.len_utf8()).sum()
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let alphabet: Alphabet = "cab".parse().unwrap();
        assert_eq!(alphabet.chars(), &['c', 'a', 'b']);
        assert_eq!(alphabet.get(0), Some('c'));
        assert_eq!(alphabet.index_of('b'), Some(2));
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let alphabet: Alphabet = "abca!a".parse().unwrap();
        assert_eq!(alphabet.to_string(), "abc!");
        assert_eq!(alphabet.len(), 4);
    }

    #[test]
    fn test_empty_rejected() {
        let err = Alphabet::new(std::iter::empty()).unwrap_err();
        assert!(matches!(err, Error::InvalidAlphabet(_)));
        assert!("".parse::<Alphabet>().is_err());
    }

    #[test]
    fn test_char_bytes_counts_utf8_width() {
        let alphabet: Alphabet = "aé日".parse().unwrap();
        assert_eq!(alphabet.char_bytes(), 1 + 2 + 3);
        assert!(alphabet.contains('日'));
        assert!(!alphabet.contains('z'));
    }
}
