//! Command-line argument parsing for the editor
//!
//! Supports opening a file and jumping to an initial line/column.

use clap::Parser;
use std::path::PathBuf;

/// A minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "comet", version, about = "A minimal terminal text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Go to line N in the opened file
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Go to column N (used with --line)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// File to open, if any
    pub path: Option<PathBuf>,
    /// Initial cursor position (line, column) - 1-indexed from user,
    /// converted to 0-indexed
    pub initial_position: Option<(usize, usize)>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        let initial_position = self.line.map(|line| {
            let line_0 = line.saturating_sub(1);
            let col_0 = self.column.unwrap_or(1).saturating_sub(1);
            (line_0, col_0)
        });

        StartupConfig {
            path: self.path,
            initial_position,
        }
    }
}
