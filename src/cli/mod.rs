//! CLI module for the Vela compiler
//!
//! ## Commands
//!
//! - `check <file>` - Parse and type check a source file (also the default
//!   action when only a file is given)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Only the top-level `run()` function handles errors and
//! exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::VELA_VERSION;

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

/// The Vela language compiler front end
#[derive(Parser, Debug)]
#[command(name = "vela")]
#[command(version = VELA_VERSION)]
#[command(about = "The Vela language compiler front end", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the token stream instead of checking (debug)
    #[arg(long)]
    pub tokens: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and type check a source file
    Check {
        /// Source file to check
        file: PathBuf,
    },
}

/// Top-level CLI entry point: parse arguments, dispatch, exit.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file, false),
        None => match cli.file {
            Some(file) => commands::check_file(&file, cli.tokens),
            None => Err(CliError::failure(
                "no input file given; try `vela check <file>`",
            )),
        },
    };

    match result {
        Ok(code) => process::exit(code.0),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(err.exit_code.0);
        }
    }
}
