//! CLI module for sgoann
//!
//! ## Commands
//!
//! - `check <PATH>...` - Parse annotation files (or directories of them) and report errors
//! - `dump <PATH>` - Print the parsed symbol path → signature mapping
//! - `lookup <FILE> <SYMBOL>` - Print the signature of one symbol
//! - `lex <FILE>` - Print the token stream with positions (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::{OutputConfig, OutputFormat};
use crate::version::SGOANN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Check, inspect and query .sgoann type annotation files
#[derive(Parser, Debug)]
#[command(name = "sgoann")]
#[command(version = SGOANN_VERSION)]
#[command(about = "Check, inspect and query .sgoann type annotation files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse annotation files and report errors
    Check {
        /// Files or directories (searched recursively for *.sgoann)
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the symbol path → signature mapping
    Dump {
        /// Annotation file, or a directory loaded as a package registry
        #[arg(value_name = "PATH")]
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
        /// Separator between path and signature in text output
        #[arg(long, value_name = "SEP", default_value = "\t")]
        separator: String,
    },

    /// Print the signature of one symbol path
    Lookup {
        /// Annotation file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Exact symbol path, e.g. `Stdout`, `Reader.Read` or `(*File).Read`
        #[arg(value_name = "SYMBOL")]
        symbol: String,
    },

    /// Print the token stream with positions (debug)
    Lex {
        /// Annotation file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Check { paths } => commands::check_paths(&paths),
        Command::Dump {
            path,
            format,
            compact,
            separator,
        } => {
            let config = OutputConfig::new()
                .with_format(format)
                .with_pretty(!compact)
                .with_separator(separator);
            commands::dump(&path, &config)
        }
        Command::Lookup { file, symbol } => commands::lookup(&file, &symbol),
        Command::Lex { file } => commands::lex_file(&file),
    }
}

// ============================================================================
// Tests
// ============================================================================
