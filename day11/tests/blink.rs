use day11::stone_count_after_blinks;

#[test]
fn example_stones_after_6_blinks() {
    assert_eq!(stone_count_after_blinks(&[125, 17], 6), 22);
}

#[test]
fn example_stones_after_25_blinks() {
    assert_eq!(stone_count_after_blinks(&[125, 17], 25), 55312);
}

#[test]
fn zero_stone_becomes_one() {
    assert_eq!(stone_count_after_blinks(&[0], 1), 1);
}

#[test]
fn even_digit_stone_splits() {
    // 1000 -> 10, 0 -> 1, 0, 1 -> 2024, 1, 2024
    assert_eq!(stone_count_after_blinks(&[1000], 3), 3);
}
