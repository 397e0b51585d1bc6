//! Rein - a minimal test harness
//!
//! Rein discovers `test_*` functions in the source files it is given, runs them
//! against an assertion context, and prints a pass/fail report with timing.
//!
//! ```ignore
//! use rein::{check, testing::Assertions};
//!
//! fn test_addition(t: &mut Assertions) {
//!     check!(t, 1 + 1 == 2);
//!     t.assert_with(2 * 2 == 4, "multiplication works");
//! }
//!
//! rein::register_test!(test_addition);
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test functions**: A false assertion is recorded, never a panic. A panic raised by a test function is not
//!   caught: it unwinds out of [`Runner::run`] and aborts the batch.

pub mod cli;
pub mod config;
pub mod interfaces;
pub mod registry;
pub mod report;
pub mod runner;
pub mod testing;
pub mod version;

#[doc(hidden)]
pub use inventory;

pub use config::{OutputMode, RunnerConfig};
pub use interfaces::{LoadError, LoadedFile, ReportSink, SourceLoader, TestLoader, WriterSink};
pub use registry::{Registry, TestCase};
pub use report::render_report;
pub use runner::{RunResult, Runner, RunnerError, TestFiles, run};
pub use testing::{AssertionFailure, Assertions};
