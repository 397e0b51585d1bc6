//! Report rendering
//!
//! Rendering is pure: the same [`RunResult`] always yields byte-identical text.

use std::fmt::Write;
use std::time::Duration;

use crate::runner::RunResult;

/// Separator written after the header and after every failure entry.
pub const SEPARATOR: &str = "-------------------------------------------------------------------------------";

/// Render the textual report for one run.
pub fn render_report(result: &RunResult) -> String {
    let mut out = String::new();
    let seconds = format_seconds(result.elapsed);

    // Writing into a String cannot fail.
    if result.failures.is_empty() {
        let _ = writeln!(
            out,
            "Passed {} assert(s) in {} test(s) - completed in {} seconds.",
            result.assertion_count, result.test_count, seconds
        );
        return out;
    }

    let _ = writeln!(
        out,
        "Failed {} of {} assert(s) in {} test(s) - completed in {} seconds.",
        result.failures.len(),
        result.assertion_count,
        result.test_count,
        seconds
    );
    let _ = writeln!(out, "{SEPARATOR}");
    for (i, failure) in result.failures.iter().enumerate() {
        let _ = writeln!(out, "{}. {}:{}", i + 1, failure.file, failure.line);
        if !failure.expression.is_empty() {
            let _ = writeln!(out, "\t{}", failure.expression);
        }
        let _ = writeln!(out, "{SEPARATOR}");
    }
    out
}

/// Elapsed seconds rounded to milliseconds, shortest form (`0`, `0.25`, `1.003`).
pub fn format_seconds(elapsed: Duration) -> String {
    let rounded = (elapsed.as_secs_f64() * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}
