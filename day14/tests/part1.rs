use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day14_part1").unwrap();
    cmd.arg("11").arg("7").arg("tests/example.txt");

    cmd.assert().success().stdout(str::contains("12"));
}
