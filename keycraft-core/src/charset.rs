//! Named character classes and alphabet assembly

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Built-in character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharClass {
    /// `a` through `z`
    #[cfg_attr(feature = "serde", serde(alias = "lower"))]
    Lowercase,
    /// `A` through `Z`
    #[cfg_attr(feature = "serde", serde(alias = "upper"))]
    Uppercase,
    /// `0` through `9`
    #[cfg_attr(feature = "serde", serde(alias = "numbers"))]
    Digits,
    /// `!@#$%^&*`
    Special,
}

impl CharClass {
    /// Every class in concatenation order
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Special,
    ];

    /// Characters contributed by the class
    pub fn chars(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharClass::Digits => "0123456789",
            CharClass::Special => "!@#$%^&*",
        }
    }

    /// Stable lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Special => "special",
        }
    }

    /// Human readable label
    pub fn description(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase letters (a-z)",
            CharClass::Uppercase => "Uppercase letters (A-Z)",
            CharClass::Digits => "Numbers (0-9)",
            CharClass::Special => "Special characters (!@#$%^&*)",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowercase" | "lower" => Ok(CharClass::Lowercase),
            "uppercase" | "upper" => Ok(CharClass::Uppercase),
            "digits" | "numbers" => Ok(CharClass::Digits),
            "special" => Ok(CharClass::Special),
            other => Err(Error::InvalidAlphabet(format!(
                "unknown character class '{other}'"
            ))),
        }
    }
}

/// Assembles an [`Alphabet`] from classes and custom characters
///
/// Classes are always concatenated in [`CharClass::ALL`] order no matter
/// the order they were selected in; custom characters come last.
#[derive(Debug, Clone, Default)]
pub struct AlphabetBuilder {
    classes: [bool; 4],
    custom: String,
}

impl AlphabetBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a class
    pub fn class(mut self, class: CharClass) -> Self {
        self.classes[class as usize] = true;
        self
    }

    /// Select several classes
    pub fn classes<I: IntoIterator<Item = CharClass>>(mut self, classes: I) -> Self {
        for class in classes {
            self = self.class(class);
        }
        self
    }

    /// Append custom characters
    pub fn custom(mut self, chars: &str) -> Self {
        self.custom.push_str(chars);
        self
    }

    /// Selected classes in concatenation order
    pub fn selected(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.classes[*class as usize])
    }

    /// Build the alphabet
    ///
    /// # Errors
    /// [`Error::InvalidAlphabet`] when nothing was selected.
    pub fn build(&self) -> Result<Alphabet> {
        let chars = self
            .selected()
            .flat_map(|class| class.chars().chars())
            .chain(self.custom.chars());

        Alphabet::new(chars).map_err(|_| {
            Error::InvalidAlphabet("select at least one character set".into())
        })
    }
}
