//! Estimate command implementation

use super::selection::SelectionArgs;
use anyhow::Result;
use clap::Args;
use keycraft_core::{estimate, Config};
use serde::Serialize;

/// Arguments for the estimate command
#[derive(Debug, Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

/// Per-length line of an estimate report
#[derive(Debug, Serialize)]
pub struct LengthEstimate {
    /// Word length
    pub length: usize,
    /// Words of this length, `null` on overflow
    pub words: Option<String>,
    /// Output bytes for this length, `null` on overflow
    pub bytes: Option<String>,
}

/// Lengths past the listed rows, summarized in one line
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UnlistedLengths {
    /// First length not listed
    pub from: usize,
    /// Last length of the range
    pub to: usize,
    /// Whether their counts overflow
    pub overflow: bool,
}

/// Rows listed before the remaining lengths are summarized
pub const MAX_LISTED_LENGTHS: usize = 64;

/// Full estimate report
#[derive(Debug, Serialize)]
pub struct EstimateReport {
    /// Characters in enumeration order
    pub alphabet: String,
    /// Alphabet size
    pub alphabet_size: usize,
    /// Per-length breakdown
    pub lengths: Vec<LengthEstimate>,
    /// Lengths left out of the breakdown, if any
    pub unlisted: Option<UnlistedLengths>,
    /// Total words, `null` on overflow
    pub total_words: Option<String>,
    /// Total bytes, `null` on overflow
    pub total_bytes: Option<String>,
}

impl EstimateReport {
    /// Build the report for a configuration
    ///
    /// Counts are carried as decimal strings since they may exceed what
    /// JSON numbers hold exactly.
    pub fn new(config: &Config) -> Self {
        let alphabet = config.alphabet();
        let range = config.range();
        let totals = config.estimate();

        let mut lengths = Vec::new();
        let mut unlisted = None;
        for length in range.lengths() {
            if lengths.len() == MAX_LISTED_LENGTHS {
                unlisted = Some(UnlistedLengths {
                    from: length,
                    to: range.max(),
                    overflow: false,
                });
                break;
            }

            let words = estimate::words_for_length(alphabet.len(), length);
            lengths.push(LengthEstimate {
                length,
                words: words.map(|n| n.to_string()),
                bytes: estimate::bytes_for_length(alphabet, length).map(|n| n.to_string()),
            });

            // every longer length overflows too
            if words.is_none() && length < range.max() {
                unlisted = Some(UnlistedLengths {
                    from: length + 1,
                    to: range.max(),
                    overflow: true,
                });
                break;
            }
        }

        Self {
            alphabet: alphabet.to_string(),
            alphabet_size: alphabet.len(),
            lengths,
            unlisted,
            total_words: totals.words.map(|n| n.to_string()),
            total_bytes: totals.bytes.map(|n| n.to_string()),
        }
    }

    /// Plain text rendering
    pub fn to_text(&self) -> String {
        let overflow = || "overflow".to_string();
        let mut text = format!(
            "Alphabet ({} characters): {}\n",
            self.alphabet_size, self.alphabet
        );
        for line in &self.lengths {
            text.push_str(&format!(
                "  length {:>3}: {} words, {} bytes\n",
                line.length,
                line.words.clone().unwrap_or_else(overflow),
                line.bytes.clone().unwrap_or_else(overflow),
            ));
        }
        if let Some(rest) = &self.unlisted {
            let detail = if rest.overflow { "overflow" } else { "not listed" };
            text.push_str(&format!("  length {}-{}: {detail}\n", rest.from, rest.to));
        }
        text.push_str(&format!(
            "Total: {} words, {}\n",
            self.total_words.clone().unwrap_or_else(overflow),
            self.total_bytes
                .as_deref()
                .and_then(|b| b.parse::<u128>().ok())
                .map(human_bytes)
                .unwrap_or_else(overflow),
        ));
        text
    }
}

/// Bytes with a binary unit suffix
pub fn human_bytes(bytes: u128) -> String {
    const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

impl EstimateArgs {
    /// Execute the estimate command
    pub fn execute(&self) -> Result<()> {
        let file = self.selection.load_file()?;
        let config = self.selection.resolve(&file)?;
        let report = EstimateReport::new(&config);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report.to_text());
        }
        Ok(())
    }
}
