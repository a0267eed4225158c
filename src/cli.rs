//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - With only SOURCE_DIR the tool lists matches; adding DEST_DIR copies them.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// CLI wrapper for the flac_gather library.
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Find files by extension and gather them into one flat directory"
)]
pub struct Args {
    /// Root directory to search recursively.
    #[arg(value_name = "SOURCE_DIR", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Destination directory for the copies. When omitted, matching files
    /// are only listed.
    #[arg(value_name = "DEST_DIR", value_hint = ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// File extension to search for, with or without the leading dot.
    #[arg(
        short = 'e',
        long,
        default_value = "flac",
        help = "Extension to search for (leading dot optional)"
    )]
    pub extension: String,

    /// Collision policy when two sources flatten to the same file name.
    #[arg(
        long,
        help = "Collision policy when flattened names clash: overwrite, skip, rename"
    )]
    pub collision: Option<String>,

    /// Exit with an error status when any individual file fails to copy.
    #[arg(long, help = "Exit non-zero when any file fails to copy")]
    pub strict: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stdout.
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        help = "Append logs to a file in addition to stdout"
    )]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    /// An unrecognized --log-level value is an error, matching how
    /// --collision is validated.
    pub fn effective_log_level(&self) -> Result<LogLevel, String> {
        if self.debug {
            return Ok(LogLevel::Debug);
        }
        match self.log_level.as_deref() {
            Some(s) => LogLevel::parse(s).ok_or_else(|| format!("invalid log level: '{s}'")),
            None => Ok(LogLevel::default()),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
