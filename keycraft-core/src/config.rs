//! Configuration API for enumeration

use crate::alphabet::Alphabet;
use crate::charset::{AlphabetBuilder, CharClass};
use crate::error::{Error, Result};
use crate::estimate::Estimate;
use crate::range::LengthRange;

/// Validated enumeration inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) range: LengthRange,
    pub(crate) alphabet: Alphabet,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Pair already-validated inputs
    pub fn new(range: LengthRange, alphabet: Alphabet) -> Self {
        Self { range, alphabet }
    }

    /// Length range
    pub fn range(&self) -> &LengthRange {
        &self.range
    }

    /// Alphabet
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Predicted output size
    pub fn estimate(&self) -> Estimate {
        Estimate::compute(&self.range, &self.alphabet)
    }
}

/// Fluent builder for configuration
///
/// Either an explicit alphabet or a class/custom selection may be given;
/// an explicit alphabet wins.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    min_length: Option<usize>,
    max_length: Option<usize>,
    charset: AlphabetBuilder,
    alphabet: Option<Alphabet>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shortest word length
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Set the longest word length
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Use one fixed length
    pub fn length(self, length: usize) -> Self {
        self.min_length(length).max_length(length)
    }

    /// Select a character class
    pub fn class(mut self, class: CharClass) -> Self {
        self.charset = self.charset.class(class);
        self
    }

    /// Select several character classes
    pub fn classes<I: IntoIterator<Item = CharClass>>(mut self, classes: I) -> Self {
        self.charset = self.charset.classes(classes);
        self
    }

    /// Append custom characters after the classes
    pub fn custom(mut self, chars: &str) -> Self {
        self.charset = self.charset.custom(chars);
        self
    }

    /// Use an explicit alphabet
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// [`Error::InvalidRange`] for missing or invalid lengths,
    /// [`Error::InvalidAlphabet`] when no character was selected.
    pub fn build(self) -> Result<Config> {
        let (min, max) = match (self.min_length, self.max_length) {
            (Some(min), Some(max)) => (min, max),
            (min, max) => {
                return Err(Error::InvalidRange {
                    min: min.unwrap_or(0),
                    max: max.unwrap_or(0),
                    reason: "both minimum and maximum length are required",
                })
            }
        };
        let range = LengthRange::new(min, max)?;

        let alphabet = match self.alphabet {
            Some(alphabet) => alphabet,
            None => self.charset.build()?,
        };

        Ok(Config { range, alphabet })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_classes() {
        let config = Config::builder()
            .min_length(1)
            .max_length(2)
            .class(CharClass::Digits)
            .build()
            .unwrap();
        assert_eq!(config.range().lengths().count(), 2);
        assert_eq!(config.alphabet().len(), 10);
        assert_eq!(config.estimate().words, Some(10 + 100));
    }

    #[test]
    fn test_explicit_alphabet_wins() {
        let config = Config::builder()
            .length(3)
            .class(CharClass::Lowercase)
            .alphabet("01".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(config.alphabet().to_string(), "01");
        assert_eq!(config.range().min(), 3);
    }

    #[test]
    fn test_missing_lengths() {
        let err = Config::builder().custom("ab").max_length(2).build().unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_range_checked_before_alphabet() {
        let err = Config::builder().min_length(4).max_length(2).build().unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }

    #[test]
    fn test_nothing_selected() {
        let err = Config::builder().length(2).build().unwrap_err();
        assert!(matches!(err, Error::InvalidAlphabet(_)));
    }
}
