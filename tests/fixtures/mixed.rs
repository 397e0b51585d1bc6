use rein::check;
use rein::testing::Assertions;

fn test_a(t: &mut Assertions) {
    check!(t, 1 + 1 == 2);
}

fn test_b(t: &mut Assertions) {
    let (x, y) = (1, 2);
    check!(t, x == y, "x must equal y");
}

rein::register_test!(test_a, test_b);
