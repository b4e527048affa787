//! keycraft command-line entry point

use clap::Parser;
use keycraft_cli::commands::Commands;
use keycraft_core::Status;
use std::process::ExitCode;

/// Exhaustive wordlist generator: every word over the chosen character sets
#[derive(Debug, Parser)]
#[command(name = "keycraft", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Exit status for a run stopped by its timeout
const EXIT_CANCELLED: u8 = 2;

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Generate(args) => match args.execute()? {
            Status::Completed => Ok(ExitCode::SUCCESS),
            Status::Cancelled => Ok(ExitCode::from(EXIT_CANCELLED)),
        },
        Commands::Estimate(args) => args.execute().map(|()| ExitCode::SUCCESS),
        Commands::GenerateConfig(args) => args.execute().map(|()| ExitCode::SUCCESS),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
