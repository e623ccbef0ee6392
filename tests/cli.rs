//! End-to-end tests for the serein binary.
//!
//! Each test runs against a fresh HOME so the data directory is isolated.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn serein(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("serein").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn help_mentions_the_main_commands() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mood"))
        .stdout(predicate::str::contains("pomodoro"))
        .stdout(predicate::str::contains("diary"));
}

#[test]
fn task_add_and_list_round_trip() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args([
            "task",
            "add",
            "Morning meditation",
            "--category",
            "wellness",
            "--priority",
            "high",
            "--time",
            "08:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning meditation"));

    serein(&home)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning meditation"))
        .stdout(predicate::str::contains("08:00"))
        .stdout(predicate::str::contains("0/1 done"));
}

#[test]
fn task_done_updates_progress() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args(["task", "add", "Stretch"])
        .assert()
        .success();

    serein(&home)
        .args(["task", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: Stretch"));

    serein(&home)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 done, 100%"));
}

#[test]
fn task_rejects_unknown_category() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args(["task", "add", "Chores", "--category", "chores"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn diary_rejects_empty_title_before_saving() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args(["diary", "add", "--title", "  ", "--content", "Something"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title must not be empty"));

    // Nothing was persisted.
    serein(&home)
        .args(["diary", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 entries"));
}

#[test]
fn diary_add_list_and_show() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args([
            "diary",
            "add",
            "--title",
            "A quiet evening",
            "--content",
            "Tea and a book.",
            "--mood",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A quiet evening"));

    serein(&home)
        .args(["diary", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A quiet evening"));

    serein(&home)
        .args(["diary", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea and a book."))
        .stdout(predicate::str::contains("good"));
}

#[test]
fn mood_rejects_out_of_range_level() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args(["mood", "add", "--level", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn mood_add_feeds_stats() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args([
            "mood",
            "add",
            "--level",
            "4",
            "--emotions",
            "calm,grateful",
            "--domains",
            "health",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood logged"));

    serein(&home)
        .args(["stats", "--period", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries:       1"))
        .stdout(predicate::str::contains("calm"))
        .stdout(predicate::str::contains("health"));
}

#[test]
fn stats_supports_json_output() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args(["mood", "add", "--level", "5"])
        .assert()
        .success();

    let output = serein(&home)
        .args(["stats", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["entries"], 1);
    assert_eq!(value["streak_days"], 1);
}

#[test]
fn today_summarizes_empty_state() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks"))
        .stdout(predicate::str::contains("Streak: 0 days"));
}

#[test]
fn completions_generate() {
    let home = TempDir::new().unwrap();

    serein(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("serein"));
}
