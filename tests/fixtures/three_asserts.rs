use rein::check;
use rein::testing::Assertions;

fn test_three(t: &mut Assertions) {
    check!(t, true);
    check!(t, 3 > 2);
    t.assert(u32::MAX > 0);
}

rein::register_test!(test_three);
