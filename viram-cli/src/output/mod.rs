//! Output path derivation and file writing

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output path: `<stem>_hyphenated.<extension>` next to the input.
/// Extensionless inputs get plain `<stem>_hyphenated`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input.extension() {
        Some(ext) => format!("{stem}_hyphenated.{}", ext.to_string_lossy()),
        None => format!("{stem}_hyphenated"),
    };

    input.with_file_name(name)
}

/// Write UTF-8 text to `path`
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write file: {}", path.display()))
}
