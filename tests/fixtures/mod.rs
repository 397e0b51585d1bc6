//! Test files scanned by the runner in `tests/runner_tests.rs`.
//!
//! Each file registers its tests with `register_test!`; the runner finds them by scanning the file's text.
//! Assertion call-site counts in these files are pinned by the tests, so edit with care.

pub mod all_pass;
pub mod helpers;
pub mod mixed;
pub mod one_assert;
pub mod panics;
pub mod three_asserts;
