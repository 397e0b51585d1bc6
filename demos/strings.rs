//! String demo suite. `test_title_case` fails on purpose to show the failure report.

use rein::check;
use rein::testing::Assertions;

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn test_trim(t: &mut Assertions) {
    check!(t, "  rein  ".trim() == "rein");
}

fn test_title_case(t: &mut Assertions) {
    check!(t, title_case("rein") == "Rein");
    check!(t, title_case("hello world") == "Hello World", "every word is capitalized");
}

fn test_empty(t: &mut Assertions) {
    t.assert(title_case("").is_empty());
}

rein::register_test!(test_trim, test_title_case, test_empty);
