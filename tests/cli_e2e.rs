use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn todoz(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.env("TODOZ_DATA", data.path().as_os_str());
    cmd
}

#[test]
fn add_then_list_shows_the_todo_and_stats() {
    let data = TempDir::new().unwrap();

    todoz(&data)
        .args(["add", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added (1): buy milk"))
        .stdout(predicate::str::contains("[ ] 1. buy milk"))
        .stdout(predicate::str::contains("1 total · 1 active · 0 done"));

    // State survives into the next invocation.
    todoz(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] 1. buy milk"));
}

#[test]
fn newest_todos_render_first() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "a"]).assert().success();
    todoz(&data).args(["add", "b"]).assert().success();

    todoz(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.find("2. b") < out.find("1. a")
        }));
}

#[test]
fn toggle_marks_done_and_filter_partitions() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "a"]).assert().success();
    todoz(&data).args(["add", "b"]).assert().success();

    todoz(&data)
        .args(["done", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done (2): b"))
        .stdout(predicate::str::contains("2 total · 1 active · 1 done"));

    todoz(&data)
        .args(["list", "--filter", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 2. b"))
        .stdout(predicate::str::contains("1. a").not());

    todoz(&data)
        .args(["list", "--filter", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] 1. a"))
        .stdout(predicate::str::contains("2. b").not());
}

#[test]
fn toggling_twice_reopens_the_todo() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "a"]).assert().success();
    todoz(&data).args(["done", "1"]).assert().success();

    todoz(&data)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened (1): a"))
        .stdout(predicate::str::contains("[ ] 1. a"));
}

#[test]
fn delete_removes_the_todo() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "a"]).assert().success();
    todoz(&data).args(["add", "b"]).assert().success();

    todoz(&data)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted (1): a"))
        .stdout(predicate::str::contains("1. a").not())
        .stdout(predicate::str::contains("1 total · 1 active · 0 done"));
}

#[test]
fn blank_add_is_a_silent_noop() {
    let data = TempDir::new().unwrap();

    todoz(&data)
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added").not())
        .stdout(predicate::str::contains("No todos yet."))
        .stdout(predicate::str::contains("0 total · 0 active · 0 done"));
}

#[test]
fn unknown_id_is_a_silent_noop() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "a"]).assert().success();

    todoz(&data)
        .args(["done", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done").not())
        .stdout(predicate::str::contains("[ ] 1. a"));

    todoz(&data)
        .args(["rm", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted").not())
        .stdout(predicate::str::contains("[ ] 1. a"));
}

#[test]
fn edit_replaces_text_with_the_trimmed_value() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "old"]).assert().success();

    todoz(&data)
        .args(["edit", "1", "  new  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated (1): new"))
        .stdout(predicate::str::contains("[ ] 1. new"));
}

#[test]
fn blank_edit_keeps_the_old_text() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "old"]).assert().success();

    todoz(&data)
        .args(["edit", "1", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated").not())
        .stdout(predicate::str::contains("[ ] 1. old"));
}

#[test]
fn interactive_edit_commits_changed_text() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "old"]).assert().success();

    todoz(&data)
        .args(["edit", "1"])
        .write_stdin("new text\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated (1): new text"));
}

#[test]
fn interactive_edit_discards_unchanged_text() {
    let data = TempDir::new().unwrap();
    todoz(&data).args(["add", "old"]).assert().success();

    todoz(&data)
        .args(["edit", "1"])
        .write_stdin("old\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated").not())
        .stdout(predicate::str::contains("[ ] 1. old"));
}

#[test]
fn corrupt_data_file_degrades_to_an_empty_list() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("todos.json"), "{not json").unwrap();

    todoz(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet."));
}

#[test]
fn invalid_filter_is_an_error() {
    let data = TempDir::new().unwrap();

    todoz(&data)
        .args(["list", "--filter", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter"));
}

#[test]
fn config_data_file_redirects_storage() {
    let data = TempDir::new().unwrap();

    todoz(&data)
        .args(["config", "data-file", "work.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = work.json"));

    todoz(&data).args(["add", "a"]).assert().success();
    assert!(data.path().join("work.json").exists());
    assert!(!data.path().join("todos.json").exists());
}
