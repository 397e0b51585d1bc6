//! Runner configuration

/// Case-insensitive assertion call-site pattern counted in each scanned file.
pub const DEFAULT_ASSERTION_PATTERN: &str = r"(?i)\b(?:assert|assert_with|check!)\(";

/// Test definition pattern; capture group 1 is the function name.
pub const DEFAULT_TEST_PATTERN: &str = r"(?i)\bfn\s+(test_[a-z_][a-z0-9_]*)\s*\(";

/// How the report is written to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report text as-is (terminal)
    #[default]
    Plain,
    /// Report wrapped in `<pre>` ... `</pre>` (embedded in an HTML response)
    Preformatted,
}

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Regex counted against each file's source text
    pub assertion_pattern: String,
    /// Regex locating `test_*` definitions in each file's source text
    pub test_pattern: String,
    /// Output channel wrapping
    pub output: OutputMode,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            assertion_pattern: DEFAULT_ASSERTION_PATTERN.to_string(),
            test_pattern: DEFAULT_TEST_PATTERN.to_string(),
            output: OutputMode::Plain,
        }
    }
}

impl RunnerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assertion call-site pattern
    pub fn with_assertion_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.assertion_pattern = pattern.into();
        self
    }

    /// Set the test definition pattern
    pub fn with_test_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.test_pattern = pattern.into();
        self
    }

    /// Set the output mode
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }
}
