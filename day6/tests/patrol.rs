use day6::{Laboratory, Position};

const EXAMPLE_LAB: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

#[test]
fn guard_facing_boundary_visits_only_start() {
    let lab = Laboratory::try_from("^").unwrap();

    let path = lab.patrol_path();
    assert_eq!(path.len(), 1);
    assert!(path.contains(&Position::new(0, 0)));
}

#[test]
fn guard_in_corridor_turns_exactly_once() {
    let lab = Laboratory::try_from("#.\n^.").unwrap();

    let path = lab.patrol_path();
    assert_eq!(path.len(), 2);
    assert!(path.contains(&Position::new(1, 0)));
    assert!(path.contains(&Position::new(1, 1)));
}

#[test]
fn example_patrol_visits_41_positions() {
    let lab = Laboratory::try_from(EXAMPLE_LAB).unwrap();

    assert_eq!(lab.patrol_path().len(), 41);
}

#[test]
fn patrol_path_is_idempotent() {
    let lab = Laboratory::try_from(EXAMPLE_LAB).unwrap();

    assert_eq!(lab.patrol_path(), lab.patrol_path());
}

#[test]
fn obstacle_ring_traps_guard() {
    let lab = Laboratory::try_from(EXAMPLE_LAB).unwrap();

    assert!(lab.loops_with_obstacle(&Position::new(6, 3)));
    assert!(lab.loops_with_obstacle(&Position::new(8, 3)));
}

#[test]
fn escaping_patrol_is_never_flagged_as_loop() {
    let lab = Laboratory::try_from(EXAMPLE_LAB).unwrap();

    assert!(!lab.loops_with_obstacle(&Position::new(0, 0)));
    assert!(!lab.loops_with_obstacle(&Position::new(9, 9)));
}

#[test]
fn example_has_6_loop_obstacle_positions() {
    let lab = Laboratory::try_from(EXAMPLE_LAB).unwrap();

    assert_eq!(lab.loop_obstacle_count(), 6);
}

#[test]
fn malformed_lab_is_rejected() {
    assert!(Laboratory::try_from("..\n...").is_err());
    assert!(Laboratory::try_from("..\n..").is_err());
    assert!(Laboratory::try_from("^.\n.^").is_err());
    assert!(Laboratory::try_from(".x\n^.").is_err());
}
