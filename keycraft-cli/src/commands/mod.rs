//! CLI command implementations

use clap::Subcommand;
use keycraft_core::CharClass;

pub mod estimate;
pub mod generate;
pub mod generate_config;
pub mod selection;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate every word for a length range and character selection
    Generate(generate::GenerateArgs),

    /// Report how many words and bytes a generation would produce
    Estimate(estimate::EstimateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in character classes
    Classes,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) {
        match self {
            ListCommands::Classes => print!("{}", classes_listing()),
        }
    }
}

/// One line per class: name, description, characters
pub fn classes_listing() -> String {
    CharClass::ALL
        .iter()
        .map(|class| {
            format!(
                "{:<10} {:<32} {}\n",
                class.name(),
                class.description(),
                class.chars()
            )
        })
        .collect()
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // a second initialization (tests, embedding) keeps the first logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Classes,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Classes"));
    }

    #[test]
    fn test_classes_listing() {
        let listing = classes_listing();
        assert_eq!(listing.lines().count(), 4);
        assert!(listing.contains("lowercase"));
        assert!(listing.contains("!@#$%^&*"));
        assert!(listing.lines().nth(2).unwrap().starts_with("digits"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(1, false);
        init_logging(2, false);
        init_logging(0, true);
    }
}
