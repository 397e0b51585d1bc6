use rein::check;
use rein::testing::Assertions;

fn test_one(t: &mut Assertions) {
    check!(t, 2 + 2 == 4);
    t.assert(!"rein".is_empty());
}

rein::register_test!(test_one);
