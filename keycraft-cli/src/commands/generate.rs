//! Generate command implementation

use super::selection::SelectionArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::Destination;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use keycraft_core::{CancellationToken, Enumerator, Outcome, Sink, Status};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output file, overwritten if it exists (default: a new wordlist file)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write words to standard output
    #[arg(long)]
    pub stdout: bool,

    /// Stop after this many seconds, keeping what was written
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<Status> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting wordlist generation");
        log::debug!("Arguments: {:?}", self);

        let file = self.selection.load_file()?;
        let config = self.selection.resolve(&file)?;
        let estimate = config.estimate();
        match estimate.words {
            Some(words) => log::info!("Generating {words} words"),
            None => log::warn!("Word count overflows 128 bits; this run will not finish"),
        }

        let destination = self.destination(&file);
        let output = destination.open()?;
        let label = output.label;

        let mut enumerator = Enumerator::from_config(config);
        if let Some(token) = self.start_timer()? {
            enumerator = enumerator.with_cancellation(token);
        }

        let mut reporter = ProgressReporter::new(self.quiet || destination.is_stdout());
        reporter.init_words(estimate.words_u64());

        let mut sink = reporter.track(output.sink);
        let result = enumerator.enumerate(&mut sink);
        // words already delivered stand, even after a failure
        let flushed = sink
            .finish()
            .with_context(|| format!("Failed to flush output: {label}"));

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                reporter.abandon("Failed");
                return Err(anyhow::Error::new(CliError::from(e)))
                    .with_context(|| format!("Failed writing {label}"));
            }
        };
        flushed?;

        match outcome.status {
            Status::Completed => reporter.finish("Complete"),
            Status::Cancelled => reporter.abandon("Cancelled"),
        }

        let message = format_report(&outcome, &label);
        if destination.is_stdout() {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
        Ok(outcome.status)
    }

    /// Pick the destination from flags, then the configuration file
    pub fn destination(&self, file: &CliConfig) -> Destination {
        if self.stdout {
            Destination::Stdout
        } else if let Some(path) = &self.output {
            Destination::File(path.clone())
        } else {
            Destination::Unique {
                directory: PathBuf::from(&file.output.directory),
                base_name: file.output.base_name.clone(),
                extension: file.output.extension.clone(),
            }
        }
    }

    /// Arm a background timer that cancels the run
    fn start_timer(&self) -> Result<Option<CancellationToken>> {
        let Some(seconds) = self.timeout else {
            return Ok(None);
        };
        let limit = Duration::try_from_secs_f64(seconds).map_err(|_| {
            CliError::InvalidInput(format!("timeout must be a non-negative number, got {seconds}"))
        })?;

        let token = CancellationToken::new();
        let trigger = token.clone();
        thread::Builder::new()
            .name("keycraft-timeout".into())
            .spawn(move || {
                thread::sleep(limit);
                log::info!("Timeout of {:.2}s reached, cancelling", limit.as_secs_f64());
                trigger.cancel();
            })
            .context("Failed to start timeout thread")?;

        Ok(Some(token))
    }
}

/// Human summary of a run
pub fn format_report(outcome: &Outcome, label: &str) -> String {
    let seconds = outcome.elapsed.as_secs_f64();
    match outcome.status {
        Status::Completed => format!("Wordlist saved as {label}. Completed in {seconds:.2} seconds."),
        Status::Cancelled => format!(
            "Generation cancelled after {} words ({seconds:.2} seconds). Partial wordlist saved as {label}.",
            outcome.words
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(output: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            selection: SelectionArgs {
                min_length: Some(1),
                max_length: Some(2),
                custom: Some("ab".to_string()),
                ..SelectionArgs::default()
            },
            output,
            stdout: false,
            timeout: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        let status = args(Some(path.clone())).execute().unwrap();
        assert_eq!(status, Status::Completed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a\nb\naa\nab\nba\nbb\n"
        );
    }

    #[test]
    fn test_destination_precedence() {
        let file = CliConfig::default();

        let mut generate = args(Some(PathBuf::from("x.txt")));
        assert_eq!(
            generate.destination(&file),
            Destination::File(PathBuf::from("x.txt"))
        );

        generate.output = None;
        assert!(matches!(
            generate.destination(&file),
            Destination::Unique { ref base_name, .. } if base_name == "wordlist"
        ));

        generate.stdout = true;
        assert!(generate.destination(&file).is_stdout());
    }

    #[test]
    fn test_negative_timeout_rejected() {
        let mut generate = args(None);
        generate.timeout = Some(-1.0);
        let err = generate.start_timer().unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_zero_timeout_cancels() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");

        let mut generate = args(Some(path));
        generate.selection.max_length = Some(30);
        generate.timeout = Some(0.0);

        let status = generate.execute().unwrap();
        assert_eq!(status, Status::Cancelled);
    }

    #[test]
    fn test_format_report() {
        let outcome = Outcome {
            status: Status::Completed,
            words: 6,
            elapsed: Duration::from_millis(1250),
            last_complete_length: Some(2),
        };
        assert_eq!(
            format_report(&outcome, "wordlist.txt"),
            "Wordlist saved as wordlist.txt. Completed in 1.25 seconds."
        );

        let cancelled = Outcome {
            status: Status::Cancelled,
            ..outcome
        };
        assert!(format_report(&cancelled, "w.txt").starts_with("Generation cancelled after 6 words"));
    }
}
