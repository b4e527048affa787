//! Destinations for generated words
//!
//! The enumerator hands each word to a [`Sink`] exactly once, in order.
//! Opening and closing the underlying destination stays with the caller.

use std::io::{self, Write};

/// Write-only destination accepting one word at a time
pub trait Sink {
    /// Accept the next word
    fn accept(&mut self, word: &str) -> io::Result<()>;

    /// Flush buffered output; called by the owner, never by the enumerator
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        (**self).accept(word)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        (**self).accept(word)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Newline-terminated words on any writer
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Wrap a writer; buffering is the caller's choice
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for LineSink<W> {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        self.writer.write_all(word.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Collects words in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    words: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Words received so far
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Take ownership of the received words
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl Sink for MemorySink {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        self.words.push(word.to_owned());
        Ok(())
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F> Sink for FnSink<F>
where
    F: FnMut(&str) -> io::Result<()>,
{
    fn accept(&mut self, word: &str) -> io::Result<()> {
        (self.0)(word)
    }
}

/// Counts accepted words on the way to an inner sink
pub struct CountingSink<S> {
    inner: S,
    count: u64,
}

impl<S: Sink> CountingSink<S> {
    /// Wrap `inner`
    pub fn new(inner: S) -> Self {
        Self { inner, count: 0 }
    }

    /// Words the inner sink accepted
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Unwrap the inner sink
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for CountingSink<S> {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        self.inner.accept(word)?;
        self.count += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.finish()
    }
}
