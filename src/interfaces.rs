//! Runner I/O boundary interfaces
//!
//! This module defines trait-based abstractions for the two places the runner touches the outside world:
//! - Loading (read a file, count assertion call-sites, resolve discovered `test_*` names to callables)
//! - Reporting (write the rendered report to a terminal, an HTTP body, a buffer)
//!
//! The runner only ever sees a [`LoadedFile`] and a [`ReportSink`]; it never reads raw source text or probes its
//! execution environment.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

use crate::config::{OutputMode, RunnerConfig};
use crate::registry::{Registry, TestCase};

/// Errors that abort loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("test pattern `{pattern}` has no capture group for the test name")]
    MissingNameGroup { pattern: String },

    /// Raised by custom [`TestLoader`]s that cannot turn a readable file into tests.
    #[error("failed to load {}: {message}", .path.display())]
    Failed { path: PathBuf, message: String },
}

/// What a loader extracted from one file.
#[derive(Debug, Clone, Default)]
pub struct LoadedFile {
    /// Assertion call-sites found in the file's source text
    pub assertion_sites: usize,
    /// Resolved test functions, in discovery order
    pub tests: Vec<TestCase>,
}

// ============================================================================
// Test Loader Interface
// ============================================================================

/// Turn a candidate path into runnable tests.
pub trait TestLoader {
    /// Load the file at `path`.
    ///
    /// Returns `Ok(None)` when the path should be skipped (unreadable). Errors are fatal to the run.
    fn load(&mut self, path: &Path) -> Result<Option<LoadedFile>, LoadError>;
}

/// Source-scanning loader backed by a [`Registry`].
///
/// The scan is textual: a `fn test_*(` inside a comment or string literal is discovered like a real definition.
/// Such a name only runs if something with that name was also registered for the file.
#[derive(Debug)]
pub struct SourceLoader {
    registry: Registry,
    assertion_re: Regex,
    test_re: Regex,
    loaded: HashSet<PathBuf>,
}

impl SourceLoader {
    pub fn new(registry: Registry, config: &RunnerConfig) -> Result<Self, LoadError> {
        let test_re = compile(&config.test_pattern)?;
        // Group 0 is the whole match; the name is group 1
        if test_re.captures_len() < 2 {
            return Err(LoadError::MissingNameGroup {
                pattern: config.test_pattern.clone(),
            });
        }
        Ok(Self {
            registry,
            assertion_re: compile(&config.assertion_pattern)?,
            test_re,
            loaded: HashSet::new(),
        })
    }

    /// Count assertion call-sites in `source`.
    pub fn count_assertions(&self, source: &str) -> usize {
        self.assertion_re.find_iter(source).count()
    }

    /// Names of `test_*` definitions in `source`, in order of appearance.
    pub fn discover_tests(&self, source: &str) -> Vec<String> {
        self.test_re
            .captures_iter(source)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Whether `path` has been loaded by this loader.
    pub fn is_loaded(&self, path: &Path) -> bool {
        self.loaded.contains(path)
    }
}

impl TestLoader for SourceLoader {
    fn load(&mut self, path: &Path) -> Result<Option<LoadedFile>, LoadError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable file");
                return Ok(None);
            }
        };
        let source = String::from_utf8_lossy(&bytes);

        let assertion_sites = self.count_assertions(&source);
        let names = self.discover_tests(&source);
        if names.is_empty() {
            return Ok(Some(LoadedFile {
                assertion_sites,
                tests: Vec::new(),
            }));
        }

        if self.loaded.insert(path.to_path_buf()) {
            tracing::debug!(path = %path.display(), discovered = names.len(), "loaded test file");
        } else {
            tracing::debug!(path = %path.display(), "file already loaded");
        }

        let tests = names
            .iter()
            .filter_map(|name| {
                let case = self.registry.resolve(path, name);
                if case.is_none() {
                    tracing::debug!(path = %path.display(), name = %name, "no registered test for name");
                }
                case
            })
            .collect();

        Ok(Some(LoadedFile { assertion_sites, tests }))
    }
}

fn compile(pattern: &str) -> Result<Regex, LoadError> {
    Regex::new(pattern).map_err(|source| LoadError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

// ============================================================================
// Report Sink Interface
// ============================================================================

/// Destination for the rendered report.
pub trait ReportSink {
    fn emit(&mut self, report: &str) -> io::Result<()>;
}

/// Writes the report to any `Write`, optionally wrapped in a `<pre>` block.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    mode: OutputMode,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, mode: OutputMode) -> Self {
        Self { writer, mode }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, report: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Plain => self.writer.write_all(report.as_bytes())?,
            OutputMode::Preformatted => {
                self.writer.write_all(b"<pre>\n")?;
                self.writer.write_all(report.as_bytes())?;
                self.writer.write_all(b"</pre>\n")?;
            }
        }
        self.writer.flush()
    }
}

/// Lets a caller keep ownership of its sink: `Runner::with_parts(loader, &mut sink)`.
impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, report: &str) -> io::Result<()> {
        (**self).emit(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Assertions;

    fn test_one(t: &mut Assertions) {
        t.assert(true);
    }

    fn loader(cases: impl IntoIterator<Item = TestCase>) -> SourceLoader {
        SourceLoader::new(Registry::from_cases(cases), &RunnerConfig::default()).unwrap()
    }

    #[test]
    fn test_scan_counts_and_discovers() {
        let loader = loader([]);
        let source = "fn helper() {}\nfn test_one(t: &mut Assertions) {\n    t.assert(true);\n    check!(t, 1 == 1);\n}\n";
        assert_eq!(loader.count_assertions(source), 2);
        assert_eq!(loader.discover_tests(source), ["test_one"]);
    }

    #[test]
    fn test_scan_treats_comments_as_definitions() {
        let loader = loader([]);
        let source = "// fn test_ghost() is not real\n";
        assert_eq!(loader.discover_tests(source), ["test_ghost"]);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let config = RunnerConfig::default().with_assertion_pattern("assert(");
        let err = SourceLoader::new(Registry::default(), &config).unwrap_err();
        assert!(matches!(err, LoadError::Pattern { .. }));
    }

    #[test]
    fn test_test_pattern_without_name_group_is_an_error() {
        let config = RunnerConfig::default().with_test_pattern(r"fn\s+test_\w+\(");
        let err = SourceLoader::new(Registry::default(), &config).unwrap_err();
        assert!(matches!(err, LoadError::MissingNameGroup { .. }));

        // A non-capturing group does not count either
        let config = RunnerConfig::default().with_test_pattern(r"fn\s+(?:test_\w+)\(");
        assert!(SourceLoader::new(Registry::default(), &config).is_err());
    }

    #[test]
    fn test_unreadable_path_is_skipped() {
        let mut loader = loader([]);
        assert!(loader.load(Path::new("/no/such/file.ext")).unwrap().is_none());
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rein_{}_{}.rs", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_resolves_registered_names_only() {
        let path = write_temp(
            "resolve",
            "fn test_one(t: &mut Assertions) {\n    t.assert(true);\n}\n// fn test_ghost()\n",
        );
        let file: &'static str = Box::leak(path.to_string_lossy().into_owned().into_boxed_str());
        let mut loader = loader([TestCase::new(file, "test_one", test_one)]);

        let loaded = loader.load(&path).unwrap().unwrap();
        let names: Vec<_> = loaded.tests.iter().map(|c| c.name).collect();
        assert_eq!(loaded.assertion_sites, 1);
        assert_eq!(names, ["test_one"]);
        assert!(loader.is_loaded(&path));

        // A second load is a no-op at the file level but still resolves the tests.
        let again = loader.load(&path).unwrap().unwrap();
        assert_eq!(again.tests.len(), 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_without_tests_still_reports_assertion_sites() {
        let path = write_temp("no_tests", "fn helper(t: &mut Assertions) { t.assert(true); }\n");
        let mut loader = loader([]);

        let loaded = loader.load(&path).unwrap().unwrap();
        assert_eq!(loaded.assertion_sites, 1);
        assert!(loaded.tests.is_empty());
        assert!(!loader.is_loaded(&path));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_plain_sink_writes_report_as_is() {
        let mut sink = WriterSink::new(Vec::new(), OutputMode::Plain);
        sink.emit("Passed 0 assert(s)\n").unwrap();
        assert_eq!(sink.into_inner(), b"Passed 0 assert(s)\n");
    }

    #[test]
    fn test_preformatted_sink_wraps_report() {
        let mut sink = WriterSink::new(Vec::new(), OutputMode::Preformatted);
        sink.emit("Passed 0 assert(s)\n").unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "<pre>\nPassed 0 assert(s)\n</pre>\n");
    }
}
