//! Arithmetic demo suite; every assertion passes.

use rein::check;
use rein::testing::Assertions;

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn test_addition(t: &mut Assertions) {
    check!(t, 1 + 1 == 2);
    check!(t, 40 + 2 == 42);
}

fn test_checked_overflow(t: &mut Assertions) {
    check!(t, u8::MAX.checked_add(1).is_none(), "u8 addition must overflow");
    t.assert(200u8.checked_add(55) == Some(255));
}

fn test_gcd(t: &mut Assertions) {
    t.assert_with(gcd(12, 18) == 6, "gcd(12, 18) is 6");
    check!(t, gcd(17, 5) == 1);
}

rein::register_test!(test_addition, test_checked_overflow, test_gcd);
