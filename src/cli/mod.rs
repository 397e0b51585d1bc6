//! CLI module for Rein
//!
//! `rein [FILES]...` runs every registered test found in the given files and prints the report.
//!
//! ## Embedding
//!
//! Tests register into the binary that links them. A test suite crate ships its own binary whose `main` is
//! [`run`], after pulling its test modules in:
//!
//! ```ignore
//! mod arithmetic; // calls rein::register_test!(...)
//!
//! fn main() {
//!     rein::cli::run();
//! }
//! ```
//!
//! ## Design
//!
//! Argument parsing uses clap derive macros. Command functions return `CliResult<T>` instead of calling
//! `process::exit`; only the top-level `run()` handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{DEFAULT_ASSERTION_PATTERN, DEFAULT_TEST_PATTERN, OutputMode, RunnerConfig};
use crate::runner::{Runner, TestFiles};
use crate::version::REIN_VERSION;

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

/// Run test_* functions from the given source files and report failed assertions
#[derive(Parser, Debug)]
#[command(name = "rein")]
#[command(version = REIN_VERSION)]
#[command(about = "Run test_* functions and report failed assertions", long_about = None)]
pub struct Cli {
    /// Test files, in run order (unreadable files are skipped)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Wrap the report in a <pre> block (for HTML responses)
    #[arg(long)]
    pub pre: bool,

    /// Regex counting assertion call-sites
    #[arg(long = "assert-pattern", value_name = "REGEX", default_value = DEFAULT_ASSERTION_PATTERN)]
    pub assert_pattern: String,

    /// Regex locating test definitions (group 1 is the name)
    #[arg(long = "test-pattern", value_name = "REGEX", default_value = DEFAULT_TEST_PATTERN)]
    pub test_pattern: String,
}

impl Cli {
    /// Runner configuration selected by the flags.
    pub fn config(&self) -> RunnerConfig {
        let output = if self.pre {
            OutputMode::Preformatted
        } else {
            OutputMode::Plain
        };
        RunnerConfig::new()
            .with_assertion_pattern(self.assert_pattern.clone())
            .with_test_pattern(self.test_pattern.clone())
            .with_output(output)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
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

/// Execute the run described by `cli` and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    let mut runner = Runner::new(&config).map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    let files: TestFiles = cli.files.into_iter().collect();
    let passed = runner
        .run(files)
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    if passed {
        Ok(ExitCode::SUCCESS)
    } else {
        // Report already printed
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

// ============================================================================
// Tests
// ============================================================================
