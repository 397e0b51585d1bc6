use rein::testing::Assertions;

// Mentioned only in this comment: fn test_ghost() is discovered but never registered.

fn helper() -> usize {
    3
}

fn test_real(t: &mut Assertions) {
    t.assert_with(helper() == 3, "helper returns three");
}

rein::register_test!(test_real);
