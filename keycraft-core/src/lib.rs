//! Exhaustive wordlist enumeration
//!
//! This crate produces every string of every length in a range over a
//! chosen alphabet, in a fixed order, streaming each word to a [`Sink`]
//! as soon as it exists. Output grows as K^L, so nothing is ever
//! materialized: working memory is one position-vector and one word
//! buffer per run.
//!
//! # Ordering
//!
//! Lengths are visited in increasing order. Inside one length, words
//! follow base-K counting with the alphabet as digit symbols (the first
//! character is digit 0, the last position moves fastest).
//!
//! # Example
//!
//! ```rust
//! use keycraft_core::{Alphabet, Enumerator, LengthRange, MemorySink};
//!
//! let range = LengthRange::new(1, 2).unwrap();
//! let alphabet: Alphabet = "ab".parse().unwrap();
//!
//! let mut sink = MemorySink::new();
//! let outcome = Enumerator::new(range, alphabet).enumerate(&mut sink).unwrap();
//!
//! assert!(outcome.is_completed());
//! assert_eq!(sink.words(), &["a", "b", "aa", "ab", "ba", "bb"]);
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod cancel;
pub mod charset;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod estimate;
pub mod odometer;
pub mod range;
pub mod sink;

pub use alphabet::Alphabet;
pub use cancel::CancellationToken;
pub use charset::{AlphabetBuilder, CharClass};
pub use config::{Config, ConfigBuilder};
pub use enumerator::{enumerate, enumerate_raw, Enumerator, Outcome, Status};
pub use error::{Error, Result};
pub use estimate::Estimate;
pub use odometer::Odometer;
pub use range::LengthRange;
pub use sink::{CountingSink, FnSink, LineSink, MemorySink, Sink};
