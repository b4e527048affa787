//! keycraft CLI library
//!
//! This library provides the command-line interface for the keycraft
//! wordlist generator.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
