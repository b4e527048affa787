//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the lengths and character sets in the file");
        println!("2. Check the size before generating:");
        println!("   keycraft estimate --config {}", self.output.display());
        println!("3. Generate the wordlist:");
        println!("   keycraft generate --config {}", self.output.display());

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# keycraft wordlist configuration
#
# Command-line flags override [length] and `custom`; classes given on
# the command line are added to the ones listed here.

[length]
# Every word length from min to max (inclusive) is generated
min = 4
max = 6

[charset]
# Any of: "lowercase", "uppercase", "digits", "special"
# Concatenated in that order regardless of the order listed here
classes = ["lowercase", "digits"]

# Extra characters appended after the classes (duplicates are dropped)
custom = ""

[output]
# New wordlists are named wordlist.txt, wordlist1.txt, wordlist2.txt, ...
base_name = "wordlist"
extension = ".txt"
directory = "."
"#
    }
}
