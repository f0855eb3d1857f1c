//! Hyphenate command implementation

use crate::error::CliResult;
use crate::input::FileReader;
use crate::output;
use clap::Parser;
use std::path::PathBuf;
use viram_core::{normalize_chillu, Hyphenator};

/// Arguments for the hyphenate command
#[derive(Debug, Parser)]
#[command(
    name = "viram",
    version,
    about = "Inserts syllable-boundary hyphenation points into Indic text files",
    long_about = "Inserts syllable-boundary hyphenation points into text written in \
                  Tamil, Odia, Telugu, Kannada or Malayalam. Break points default to \
                  invisible soft hyphens (U+00AD); pass --marker for a visible character."
)]
pub struct HyphenateArgs {
    /// Input file: must be a text file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: `<input stem>_hyphenated.<input extension>`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Visible marker character to use instead of soft hyphens
    #[arg(short, long, value_name = "CHAR")]
    pub marker: Option<char>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl HyphenateArgs {
    /// Execute the hyphenate command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Hyphenating {}", self.input.display());
        log::debug!("Arguments: {self:?}");

        let text = FileReader::read_text(&self.input)?;

        let hyphenator = match self.marker {
            Some(marker) => Hyphenator::with_marker(marker),
            None => Hyphenator::new(),
        };
        // Legacy chillu spellings are rewritten before hyphenation runs.
        let result = hyphenator.hyphenate(&normalize_chillu(&text));

        let out_path = match &self.output {
            Some(path) => path.clone(),
            None => output::default_output_path(&self.input),
        };
        output::write_text(&out_path, &result)?;

        log::info!("Wrote {}", out_path.display());

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
