use assert_cmd::Command;
use predicates::prelude::*;

fn tictactoe() -> Command {
    let mut cmd = Command::cargo_bin("tictactoe").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_rejects_bad_moves_and_exits_at_eof() {
    tictactoe()
        .write_stdin("9 9\nmiddle\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your move as X (row col): "))
        .stdout(predicate::str::contains("Cell 9 9 is not available."))
        .stdout(predicate::str::contains("Invalid move syntax"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_ai_moves_first_when_human_plays_o() {
    tictactoe()
        .args(["--play", "o"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI plays"))
        .stdout(predicate::str::contains("Your move as O (row col): "));
}

#[test]
fn test_unknown_side_is_a_usage_error() {
    tictactoe()
        .args(["--play", "z"])
        .assert()
        .code(2);
}
