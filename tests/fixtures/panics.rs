use rein::testing::Assertions;

fn test_records_then_panics(t: &mut Assertions) {
    t.assert(false);
    panic!("fixture panic");
}

rein::register_test!(test_records_then_panics);
