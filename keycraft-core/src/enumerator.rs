//! Exhaustive, ordered, streaming word enumeration

use crate::alphabet::Alphabet;
use crate::cancel::CancellationToken;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::odometer::Odometer;
use crate::range::LengthRange;
use crate::sink::Sink;
use std::time::{Duration, Instant};

/// How an enumeration run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every word of every length was delivered
    Completed,
    /// Stopped by the cancellation token; delivered words stand
    Cancelled,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Terminal status
    pub status: Status,
    /// Words the sink accepted
    pub words: u64,
    /// Wall-clock time spent enumerating
    pub elapsed: Duration,
    /// Longest length whose words were all delivered
    pub last_complete_length: Option<usize>,
}

impl Outcome {
    /// Whether the run delivered everything
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

/// Produces every word of every length in a range
///
/// Lengths run in increasing order. Within a length the words follow
/// base-K counting with the alphabet as digit symbols, the last position
/// moving fastest. Working memory is one [`Odometer`] and one reused word
/// buffer, independent of how many words are produced.
#[derive(Debug, Clone)]
pub struct Enumerator {
    range: LengthRange,
    alphabet: Alphabet,
    cancel: Option<CancellationToken>,
}

impl Enumerator {
    /// Create an enumerator from validated inputs
    pub fn new(range: LengthRange, alphabet: Alphabet) -> Self {
        Self {
            range,
            alphabet,
            cancel: None,
        }
    }

    /// Create an enumerator from a built configuration
    pub fn from_config(config: Config) -> Self {
        Self::new(config.range, config.alphabet)
    }

    /// Poll `token` before every word
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Length range being enumerated
    pub fn range(&self) -> &LengthRange {
        &self.range
    }

    /// Alphabet being enumerated
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    /// Stream every word to `sink`
    ///
    /// # Errors
    /// [`Error::SinkFailure`] as soon as the sink rejects a word; no
    /// further word is produced.
    pub fn enumerate<S: Sink + ?Sized>(&self, sink: &mut S) -> Result<Outcome> {
        let start = Instant::now();
        let radix = self.alphabet.len();
        // sized by the current length only
        let mut word = String::new();
        let mut words = 0u64;
        let mut last_complete_length = None;

        for length in self.range.lengths() {
            let mut odometer = Odometer::new(length, radix);

            loop {
                if self.is_cancelled() {
                    return Ok(Outcome {
                        status: Status::Cancelled,
                        words,
                        elapsed: start.elapsed(),
                        last_complete_length,
                    });
                }

                odometer.write_word(&self.alphabet, &mut word);
                sink.accept(&word).map_err(|source| Error::SinkFailure {
                    delivered: words,
                    source,
                })?;
                words += 1;

                if !odometer.advance() {
                    break;
                }
            }

            last_complete_length = Some(length);
        }

        Ok(Outcome {
            status: Status::Completed,
            words,
            elapsed: start.elapsed(),
            last_complete_length,
        })
    }
}

/// Enumerate `range` over `alphabet` into `sink`
pub fn enumerate<S: Sink + ?Sized>(
    range: LengthRange,
    alphabet: Alphabet,
    sink: &mut S,
) -> Result<Outcome> {
    Enumerator::new(range, alphabet).enumerate(sink)
}

/// Validate raw bounds and characters, then enumerate
///
/// The range is checked before the alphabet; either failure happens
/// before the sink sees any call.
pub fn enumerate_raw<S: Sink + ?Sized>(
    min_length: usize,
    max_length: usize,
    chars: &str,
    sink: &mut S,
) -> Result<Outcome> {
    let range = LengthRange::new(min_length, max_length)?;
    let alphabet: Alphabet = chars.parse()?;
    enumerate(range, alphabet, sink)
}
