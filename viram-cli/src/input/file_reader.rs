//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation and a text-content gate
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text, rejecting content that is not text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        if !Self::looks_like_text(&bytes) {
            return Err(CliError::NotText(path.display().to_string()).into());
        }

        let content = String::from_utf8(bytes)
            .map_err(|_| CliError::NotText(path.display().to_string()))?;

        Ok(content)
    }

    /// Cheap text sniff over the head of the file: text never contains NUL
    fn looks_like_text(bytes: &[u8]) -> bool {
        const SNIFF_LEN: usize = 8192;
        !bytes.iter().take(SNIFF_LEN).any(|&b| b == 0)
    }
}
