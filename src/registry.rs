//! Test registration
//!
//! Test functions register themselves at build time with [`register_test!`](crate::register_test), keyed by the
//! source file that defines them (`file!()`). The runner never binds names late: after scanning a file it resolves
//! each discovered `test_*` name against a [`Registry`].
//!
//! ## Path matching
//!
//! `file!()` yields a path relative to the crate root (for example `tests/fixtures/mixed.rs`), while callers may pass
//! `./tests/fixtures/mixed.rs` or an absolute path. Both sides are normalized lexically (`.` dropped, `..` folded)
//! and a registered file matches when either path is a component-wise suffix of the other. The second direction covers
//! workspace members, where `file!()` is `crates/suite/tests/a.rs` but the caller runs from `crates/suite` and passes
//! `tests/a.rs`. A relative candidate may therefore resolve against several members; the first registered case wins.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::testing::Assertions;

/// Signature every registered test function has.
pub type TestFn = fn(&mut Assertions);

/// A registered test function.
#[derive(Clone, Copy)]
pub struct TestCase {
    /// Source file that defines the test (as given by `file!()`)
    pub file: &'static str,
    /// Function name, `test_` prefixed
    pub name: &'static str,
    /// The test function itself
    pub func: TestFn,
}

impl TestCase {
    pub const fn new(file: &'static str, name: &'static str, func: TestFn) -> Self {
        Self { file, name, func }
    }

    /// Invoke the test against the given assertion context.
    pub fn invoke(&self, assertions: &mut Assertions) {
        (self.func)(assertions)
    }

    fn defined_in(&self, candidate: &Path) -> bool {
        let registered = normalize(Path::new(self.file));
        let candidate = normalize(candidate);
        if registered.as_os_str().is_empty() || candidate.as_os_str().is_empty() {
            return false;
        }
        // In a workspace member, file!() is relative to the workspace root while callers pass member-relative paths.
        candidate.ends_with(&registered) || (candidate.is_relative() && registered.ends_with(&candidate))
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("file", &self.file)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

inventory::collect!(TestCase);

/// Register one or more test functions defined in the current file.
///
/// ```ignore
/// fn test_one(t: &mut rein::Assertions) { t.assert(true); }
/// fn test_two(t: &mut rein::Assertions) { t.assert(true); }
///
/// rein::register_test!(test_one, test_two);
/// ```
#[macro_export]
macro_rules! register_test {
    ($($name:ident),+ $(,)?) => {
        $(
            $crate::inventory::submit! {
                $crate::registry::TestCase::new(file!(), stringify!($name), $name)
            }
        )+
    };
}

/// A lookup table of test cases.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    /// Every test registered in this binary through `register_test!`.
    pub fn global() -> Self {
        Self::from_cases(inventory::iter::<TestCase>.into_iter().copied())
    }

    /// Build a registry from explicit cases (embedding, unit tests).
    pub fn from_cases(cases: impl IntoIterator<Item = TestCase>) -> Self {
        Self {
            cases: cases.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Find the test called `name` registered for the file at `path`.
    pub fn resolve(&self, path: &Path, name: &str) -> Option<TestCase> {
        self.cases
            .iter()
            .find(|case| case.name == name && case.defined_in(path))
            .copied()
    }

    /// All tests registered for the file at `path`, in registration order.
    pub fn cases_in<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a TestCase> + 'a {
        self.cases.iter().filter(move |case| case.defined_in(path))
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into the preceding component.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut Assertions) {}

    fn failing(t: &mut Assertions) {
        t.assert(false);
    }

    #[test]
    fn test_normalize_folds_dots() {
        assert_eq!(normalize(Path::new("./src/../demos/math.rs")), PathBuf::from("demos/math.rs"));
        assert_eq!(normalize(Path::new("../x.rs")), PathBuf::from("../x.rs"));
    }

    #[test]
    fn test_resolve_matches_path_suffix() {
        let registry = Registry::from_cases([TestCase::new("tests/fixtures/a.rs", "test_one", noop)]);

        assert!(registry.resolve(Path::new("tests/fixtures/a.rs"), "test_one").is_some());
        assert!(registry.resolve(Path::new("./tests/fixtures/a.rs"), "test_one").is_some());
        assert!(registry.resolve(Path::new("/work/crate/tests/fixtures/a.rs"), "test_one").is_some());
    }

    #[test]
    fn test_resolve_member_relative_path() {
        let registry = Registry::from_cases([TestCase::new("crates/suite/tests/fixtures/a.rs", "test_one", noop)]);

        assert!(registry.resolve(Path::new("tests/fixtures/a.rs"), "test_one").is_some());
        assert!(registry.resolve(Path::new("./tests/fixtures/a.rs"), "test_one").is_some());
        assert!(registry.resolve(Path::new("crates/suite/tests/fixtures/a.rs"), "test_one").is_some());
        // Absolute candidates must contain the whole registered path
        if cfg!(unix) {
            assert!(registry.resolve(Path::new("/tests/fixtures/a.rs"), "test_one").is_none());
        }
        assert!(registry.resolve(Path::new("other/tests/fixtures/a.rs"), "test_one").is_none());
        assert!(registry.resolve(Path::new("."), "test_one").is_none());
    }

    #[test]
    fn test_resolve_requires_matching_file_and_name() {
        let registry = Registry::from_cases([TestCase::new("tests/fixtures/a.rs", "test_one", noop)]);

        assert!(registry.resolve(Path::new("tests/fixtures/b.rs"), "test_one").is_none());
        assert!(registry.resolve(Path::new("tests/fixtures/a.rs"), "test_two").is_none());
        // Suffix matching is by component, not by string
        assert!(registry.resolve(Path::new("tests/fixtures/xa.rs"), "test_one").is_none());
    }

    #[test]
    fn test_invoke_runs_against_context() {
        let case = TestCase::new("a.rs", "test_failing", failing);
        let mut t = Assertions::new();
        case.invoke(&mut t);
        assert_eq!(t.failures().len(), 1);
    }

    #[test]
    fn test_cases_in_keeps_registration_order() {
        let registry = Registry::from_cases([
            TestCase::new("a.rs", "test_z", noop),
            TestCase::new("b.rs", "test_y", noop),
            TestCase::new("a.rs", "test_x", noop),
        ]);
        let names: Vec<_> = registry.cases_in(Path::new("a.rs")).map(|c| c.name).collect();
        assert_eq!(names, ["test_z", "test_x"]);
    }
}
