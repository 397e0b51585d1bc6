//! Test runner implementation
//!
//! ## Phases
//!
//! One call to [`Runner::run`] performs, in order:
//! 1. A fresh [`Assertions`] context is created for the run
//! 2. Each candidate file is handed to the [`TestLoader`] (unreadable files are skipped)
//! 3. Resolved tests are invoked synchronously, in discovery order, against the context
//! 4. The [`RunResult`] is rendered and written to the [`ReportSink`]
//!
//! ## Failure semantics
//!
//! A false assertion is recorded and the run continues. A panic inside a test function is not caught: it unwinds out
//! of `run` and no report is written.
//!
//! ## Assertion count
//!
//! `assertion_count` is the number of assertion call-sites in the **last** readable file scanned, not a total
//! across files. `test_count` is cumulative.

use std::ffi::OsString;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::RunnerConfig;
use crate::interfaces::{LoadError, ReportSink, SourceLoader, TestLoader, WriterSink};
use crate::registry::Registry;
use crate::report::render_report;
use crate::testing::{AssertionFailure, Assertions};

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Aggregate outcome of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Assertion call-sites in the last scanned file
    pub assertion_count: usize,
    /// Tests invoked across all files
    pub test_count: usize,
    pub elapsed: Duration,
    /// Failed assertions in encounter order
    pub failures: Vec<AssertionFailure>,
}

impl RunResult {
    /// A run succeeds iff no assertion failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ordered list of candidate test files.
///
/// Converts from a single path or from any sequence of paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestFiles(Vec<PathBuf>);

impl TestFiles {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TestFiles {
    fn from(path: &str) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<String> for TestFiles {
    fn from(path: String) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl From<&Path> for TestFiles {
    fn from(path: &Path) -> Self {
        Self(vec![path.to_path_buf()])
    }
}

impl From<PathBuf> for TestFiles {
    fn from(path: PathBuf) -> Self {
        Self(vec![path])
    }
}

impl From<OsString> for TestFiles {
    fn from(path: OsString) -> Self {
        Self(vec![PathBuf::from(path)])
    }
}

impl<T: Into<PathBuf>> From<Vec<T>> for TestFiles {
    fn from(paths: Vec<T>) -> Self {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PathBuf>, const N: usize> From<[T; N]> for TestFiles {
    fn from(paths: [T; N]) -> Self {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

impl<T: AsRef<Path>> From<&[T]> for TestFiles {
    fn from(paths: &[T]) -> Self {
        Self(paths.iter().map(|p| p.as_ref().to_path_buf()).collect())
    }
}

impl<T: Into<PathBuf>> FromIterator<T> for TestFiles {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Discovers, runs and reports tests for one batch of files per call.
pub struct Runner<L: TestLoader, S: ReportSink> {
    loader: L,
    sink: S,
}

impl Runner<SourceLoader, WriterSink<Stdout>> {
    /// Runner over every test registered in this binary, reporting to stdout.
    pub fn new(config: &RunnerConfig) -> Result<Self, RunnerError> {
        let loader = SourceLoader::new(Registry::global(), config)?;
        Ok(Self::with_parts(loader, WriterSink::stdout(config.output)))
    }
}

impl<L: TestLoader, S: ReportSink> Runner<L, S> {
    pub fn with_parts(loader: L, sink: S) -> Self {
        Self { loader, sink }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run the tests in `files`, write the report, and return whether every assertion passed.
    pub fn run(&mut self, files: impl Into<TestFiles>) -> Result<bool, RunnerError> {
        let result = self.execute(files)?;
        let report = render_report(&result);
        self.sink.emit(&report)?;
        Ok(result.is_success())
    }

    /// Run the tests in `files` without reporting.
    #[tracing::instrument(skip_all)]
    pub fn execute(&mut self, files: impl Into<TestFiles>) -> Result<RunResult, RunnerError> {
        let files = files.into();
        let mut assertions = Assertions::new();
        let mut assertion_count = 0;
        let mut test_count = 0;

        let start = Instant::now();
        for path in files.iter() {
            if path.to_str().is_none() {
                tracing::debug!(path = %path.display(), "skipping non UTF-8 path");
                continue;
            }
            let Some(loaded) = self.loader.load(path)? else {
                continue;
            };

            assertion_count = loaded.assertion_sites;
            for case in &loaded.tests {
                tracing::trace!(test = case.name, file = %path.display(), "running test");
                test_count += 1;
                case.invoke(&mut assertions);
            }
        }
        let elapsed = start.elapsed();

        let failures = assertions.into_failures();
        tracing::debug!(
            files = files.len(),
            tests = test_count,
            failures = failures.len(),
            "run complete"
        );

        Ok(RunResult {
            assertion_count,
            test_count,
            elapsed,
            failures,
        })
    }
}

/// Run `files` against every test registered in this binary, with default configuration, reporting to stdout.
pub fn run(files: impl Into<TestFiles>) -> Result<bool, RunnerError> {
    Runner::new(&RunnerConfig::default())?.run(files)
}
