//! Command-line argument parsing
//!
//! Supports:
//! - One toggle per `--at LINE:COL` (1-indexed), applied in order
//! - Collapse-on-save with `--save`
//! - Writing the result back with `--write`, or a JSON report with `--json`

use clap::Parser;
use std::path::PathBuf;

use crate::model::Position;
use crate::syntax::LanguageId;

/// Toggle string literals between one line and one word per line
#[derive(Parser, Debug)]
#[command(
    name = "string-toggle",
    version,
    about = "Toggle string literals between one line and one word per line"
)]
pub struct CliArgs {
    /// File to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Toggle the string at LINE:COL (1-indexed); repeat for several toggles
    #[arg(long = "at", value_name = "LINE:COL", value_parser = parse_position)]
    pub at: Vec<Position>,

    /// Collapse every split string afterwards, as if the file were saved
    #[arg(long)]
    pub save: bool,

    /// Write the result back to FILE instead of printing it
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Print a JSON report instead of the plain text
    #[arg(long)]
    pub json: bool,

    /// Language id to use instead of detecting it from the extension
    #[arg(long, value_name = "ID")]
    pub language: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    /// Toggle positions, 0-indexed
    pub positions: Vec<Position>,
    pub save: bool,
    pub write: bool,
    pub json: bool,
    pub language: Option<LanguageId>,
}

/// Parse `LINE:COL` (1-indexed) into a 0-indexed position
pub fn parse_position(value: &str) -> Result<Position, String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{}'", value))?;
    let line: usize = line
        .trim()
        .parse()
        .map_err(|_| format!("invalid line number '{}'", line))?;
    let column: usize = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column number '{}'", column))?;
    if line == 0 || column == 0 {
        return Err("line and column start at 1".to_string());
    }
    // Convert from 1-indexed (user input) to 0-indexed (internal)
    Ok(Position::new(line - 1, column - 1))
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.file.is_dir() {
            return Err(format!("{} is a directory", self.file.display()));
        }
        if self.write && self.json {
            return Err("--write and --json cannot be combined".to_string());
        }

        Ok(RunConfig {
            file: self.file,
            positions: self.at,
            save: self.save,
            write: self.write,
            json: self.json,
            language: self.language.as_deref().map(LanguageId::from_language_id),
        })
    }
}
