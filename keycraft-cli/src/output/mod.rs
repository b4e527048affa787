//! Output destination module

use anyhow::{Context, Result};
use keycraft_core::{LineSink, Sink};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

pub mod unique;

pub use unique::{candidate_name, create_unique};

/// Where generated words go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Stdout,
    /// A path given explicitly; truncated if it exists
    File(PathBuf),
    /// A fresh, collision-free file in a directory
    Unique {
        /// Directory to create the file in
        directory: PathBuf,
        /// File name stem
        base_name: String,
        /// Extension including the dot
        extension: String,
    },
}

impl Destination {
    /// Whether words go to the terminal stream
    pub fn is_stdout(&self) -> bool {
        matches!(self, Destination::Stdout)
    }

    /// Open the destination as a buffered line sink
    pub fn open(&self) -> Result<OpenedOutput> {
        match self {
            Destination::Stdout => Ok(OpenedOutput {
                label: "stdout".to_string(),
                sink: Box::new(LineSink::new(BufWriter::new(io::stdout()))),
            }),
            Destination::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(OpenedOutput::file(path.clone(), file))
            }
            Destination::Unique {
                directory,
                base_name,
                extension,
            } => {
                let (path, file) = create_unique(directory, base_name, extension).with_context(
                    || format!("Failed to create wordlist in {}", directory.display()),
                )?;
                Ok(OpenedOutput::file(path, file))
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Unique {
                directory,
                base_name,
                extension,
            } => write!(
                f,
                "{} (unique)",
                directory.join(candidate_name(base_name, extension, 0)).display()
            ),
        }
    }
}

/// An open destination ready for words
pub struct OpenedOutput {
    /// Name shown in the final report
    pub label: String,
    /// Buffered newline-delimited sink
    pub sink: Box<dyn Sink>,
}

impl OpenedOutput {
    fn file(path: PathBuf, file: File) -> Self {
        log::info!("Writing wordlist to {}", path.display());
        Self {
            label: path.display().to_string(),
            sink: Box::new(LineSink::new(BufWriter::new(file))),
        }
    }
}
