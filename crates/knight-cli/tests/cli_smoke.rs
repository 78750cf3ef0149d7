use assert_cmd::Command;
use predicates::prelude::*;

fn knight_path() -> Command {
    Command::cargo_bin("knight-path").expect("binary available")
}

#[test]
fn prints_comma_joined_path() {
    knight_path()
        .args(["a8", "h2"])
        .assert()
        .success()
        .stdout("a8, c7, e8, f6, g4, h2\n");
}

#[test]
fn same_square_prints_single_label() {
    knight_path().args(["a1", "a1"]).assert().success().stdout("a1\n");
}

#[test]
fn json_output_shape() {
    let output =
        knight_path().args(["b1", "f8", "--json"]).assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");

    assert_eq!(value["start"], "b1");
    assert_eq!(value["end"], "f8");
    assert_eq!(value["moves"], 5);
    assert_eq!(value["path"], serde_json::json!(["b1", "d2", "f3", "h4", "g6", "f8"]));
}

#[test]
fn invalid_label_exits_with_status_2() {
    knight_path()
        .env_remove("RUST_LOG")
        .args(["z9", "a1"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[ERROR]"))
        .stderr(predicate::str::contains("invalid square label 'z9'"));

    knight_path().args(["a1", "a0"]).assert().code(2);
}

#[test]
fn walled_in_start_exits_with_status_1() {
    knight_path()
        .env_remove("RUST_LOG")
        .args(["a8", "h2", "--blocked", "c7,b6"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no knight path from a8 to h2"));
}

#[test]
fn error_is_reported_once() {
    let output = knight_path()
        .env_remove("RUST_LOG")
        .args(["a8", "h2", "--blocked", "c7,b6"])
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert_eq!(text.matches("no knight path from a8 to h2").count(), 1, "stderr: {text}");
    assert_eq!(text.lines().count(), 1, "stderr: {text}");
}

#[test]
fn blocked_squares_change_the_route() {
    let output = knight_path()
        .args(["a8", "h2", "--blocked", "c7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.starts_with("a8, b6"), "unexpected path: {text}");
    assert!(!text.contains("c7"), "path crosses blocked square: {text}");
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    knight_path()
        .env_remove("RUST_LOG")
        .args(["c5", "c8", "--debug"])
        .assert()
        .success()
        .stdout("c5, e4, d6, c8\n")
        .stderr(predicate::str::contains("[INFO]").and(predicate::str::contains("[DEBUG]")));
}
