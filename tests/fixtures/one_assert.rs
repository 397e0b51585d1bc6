use rein::testing::Assertions;

fn test_single(t: &mut Assertions) {
    t.assert(usize::BITS >= 32);
}

rein::register_test!(test_single);
