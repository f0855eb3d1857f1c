//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file content is not text
    #[error("Sorry! {0} is not a text file and is not currently supported")]
    NotText(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_text_error_display() {
        let error = CliError::NotText("photo.png".to_string());
        assert_eq!(
            error.to_string(),
            "Sorry! photo.png is not a text file and is not currently supported"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::NotText("data.bin".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("NotText"));
        assert!(debug_str.contains("data.bin"));
    }
}
