use day15::{parse_moves, Position, Warehouse, WideWarehouse};

#[test]
fn box_chain_pushes_until_wall() {
    let mut warehouse = Warehouse::try_from("######\n#@OO.#\n######").unwrap();
    let moves = parse_moves(">>>").unwrap();

    warehouse.apply_moves(&moves);

    // One push fills the free cell behind the chain, then the wall blocks.
    assert_eq!(warehouse.robot(), Position::new(1, 2));
    assert_eq!(warehouse.gps_sum(), 103 + 104);
}

#[test]
fn wide_boxes_stack_and_stop_at_wall() {
    let mut warehouse =
        WideWarehouse::try_from("#####\n#...#\n#.O.#\n#.O.#\n#.@.#\n#####").unwrap();
    let moves = parse_moves("^^").unwrap();

    warehouse.apply_moves(&moves);

    assert_eq!(warehouse.robot(), Position::new(3, 4));
    assert_eq!(warehouse.gps_sum(), 104 + 204);
}

#[test]
fn wide_push_drags_overlapping_box() {
    let mut warehouse =
        WideWarehouse::try_from("######\n#....#\n#.OO.#\n#..O.#\n#..@.#\n######").unwrap();
    let moves = parse_moves("^").unwrap();

    warehouse.apply_moves(&moves);

    // The pushed box carries the box resting on it; the one beside stays.
    assert_eq!(warehouse.gps_sum(), 106 + 206 + 204);
}
