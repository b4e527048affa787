//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use keycraft_core::Sink;
use std::io;
use std::time::Duration;

/// Words delivered between progress bar updates
const UPDATE_EVERY: u64 = 4096;

/// Progress reporter for wordlist generation
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the bar for `total_words`; unknown totals show no bar
    pub fn init_words(&mut self, total_words: Option<u64>) {
        if self.quiet {
            return;
        }
        let Some(total) = total_words else {
            log::debug!("Word count exceeds u64, progress bar disabled");
            return;
        };

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {human_pos}/{human_len} words ({per_sec}, eta {eta}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Whether a bar is showing
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Wrap a sink so delivered words advance the bar
    pub fn track<S: Sink>(&self, inner: S) -> ProgressSink<S> {
        ProgressSink {
            inner,
            progress_bar: self.progress_bar.clone(),
            pending: 0,
        }
    }

    /// Finish progress reporting
    pub fn finish(&self, message: &'static str) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(message);
        }
    }

    /// Stop the bar without completing it
    pub fn abandon(&self, message: &'static str) {
        if let Some(pb) = &self.progress_bar {
            pb.abandon_with_message(message);
        }
    }
}

/// Sink decorator feeding a progress bar in batches
pub struct ProgressSink<S> {
    inner: S,
    progress_bar: Option<ProgressBar>,
    pending: u64,
}

impl<S> ProgressSink<S> {
    fn flush_pending(&mut self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(self.pending);
        }
        self.pending = 0;
    }
}

impl<S: Sink> Sink for ProgressSink<S> {
    fn accept(&mut self, word: &str) -> io::Result<()> {
        self.inner.accept(word)?;
        self.pending += 1;
        if self.pending >= UPDATE_EVERY {
            self.flush_pending();
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.flush_pending();
        self.inner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycraft_core::MemorySink;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_words(Some(100));
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_unknown_total_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_words(None);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_progress_sink_counts_batches() {
        let pb = ProgressBar::hidden();
        pb.set_length(10_000);
        let mut sink = ProgressSink {
            inner: MemorySink::new(),
            progress_bar: Some(pb.clone()),
            pending: 0,
        };

        for _ in 0..5000 {
            sink.accept("w").unwrap();
        }
        assert_eq!(pb.position(), UPDATE_EVERY);

        sink.finish().unwrap();
        assert_eq!(pb.position(), 5000);
        assert_eq!(sink.inner.words().len(), 5000);
    }

    #[test]
    fn test_progress_sink_without_bar_passes_through() {
        let reporter = ProgressReporter::new(true);
        let mut sink = reporter.track(MemorySink::new());
        sink.accept("a").unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.inner.words(), &["a"]);
    }
}
