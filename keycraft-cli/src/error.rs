//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file unreadable or malformed
    ConfigError(String),
    /// Length bounds or character selection rejected
    InvalidInput(String),
    /// Output destination could not be opened or written
    OutputError(String),
    /// Enumeration failed part way through
    GenerationError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
            CliError::GenerationError(msg) => write!(f, "Generation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<keycraft_core::Error> for CliError {
    fn from(err: keycraft_core::Error) -> Self {
        if err.is_validation() {
            CliError::InvalidInput(err.to_string())
        } else {
            CliError::GenerationError(err.to_string())
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("missing [length] table".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: missing [length] table"
        );
    }

    #[test]
    fn test_output_error_display() {
        let error = CliError::OutputError("permission denied".to_string());
        assert_eq!(error.to_string(), "Output error: permission denied");
    }

    #[test]
    fn test_from_core_validation_error() {
        let core = keycraft_core::LengthRange::new(3, 2).unwrap_err();
        let error = CliError::from(core);
        assert!(matches!(error, CliError::InvalidInput(_)));
        assert!(error.to_string().starts_with("Invalid input:"));
    }

    #[test]
    fn test_from_core_sink_error() {
        let core = keycraft_core::Error::SinkFailure {
            delivered: 10,
            source: std::io::Error::other("disk full"),
        };
        let error = CliError::from(core);
        assert!(matches!(error, CliError::GenerationError(_)));
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<()> = Err(CliError::InvalidInput("x".into()).into());
        assert!(failure
            .unwrap_err()
            .to_string()
            .contains("Invalid input: x"));
    }
}
