#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("todo").unwrap();
    c.env("SIMPLE_TODO_DIR", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("VISUAL")
        .env_remove("SIMPLE_TODO_LOG");
    c
}

fn read_data(dir: &Path) -> String {
    fs::read_to_string(dir.join("data.txt")).expect("data file")
}

fn write_data(dir: &Path, lines: &[&str]) {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(dir.join("data.txt"), content).unwrap();
}

/// Stand-in editor that overwrites the file it is given with `text`.
#[cfg(unix)]
fn scripted_editor(dir: &Path, text: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("fake-editor.sh");
    fs::write(&path, format!("#!/bin/sh\nprintf '%s\\n' '{text}' > \"$1\"\n"))
        .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn empty_list_shows_hint() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("No items yet"));
    assert!(!temp.path().join("data.txt").exists());
}

#[test]
fn add_appends_and_lists_in_order() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["add", "Buy", "Milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo item! 1. Buy Milk"));
    cmd(&temp)
        .args(["add", "Gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo item! 2. Gym"));

    assert_eq!(read_data(temp.path()), "Buy Milk\nGym\n");
    cmd(&temp)
        .args(["list", "--width", "80"])
        .assert()
        .success()
        .stdout("1. Buy Milk\n2. Gym\n");
}

#[test]
fn add_without_text_fails() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provide the item text"));
    cmd(&temp).args(["add", "   "]).assert().failure();
    assert!(!temp.path().join("data.txt").exists());
}

#[test]
fn edit_with_text_replaces_item() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["Buy Milk", "Gym", "Eat food"]);
    cmd(&temp)
        .args(["edit", "2", "Gym", "at", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item updated! 2. Gym at 6"));
    assert_eq!(read_data(temp.path()), "Buy Milk\nGym at 6\nEat food\n");
}

#[cfg(unix)]
#[test]
fn edit_through_editor() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["Buy Milk", "Gym"]);
    let editor = scripted_editor(temp.path(), "Buy oat milk");
    cmd(&temp)
        .env("EDITOR", &editor)
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item updated!"));
    assert_eq!(read_data(temp.path()), "Buy oat milk\nGym\n");
}

#[cfg(unix)]
#[test]
fn edit_unchanged_or_failed_editor_keeps_file() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["Buy Milk"]);
    cmd(&temp)
        .env("EDITOR", "true")
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes."));
    cmd(&temp)
        .env("EDITOR", "false")
        .args(["edit", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-zero status"));
    assert_eq!(read_data(temp.path()), "Buy Milk\n");
}

#[cfg(unix)]
#[test]
fn edit_unchanged_padded_item_keeps_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.txt"), "  Gym  \nBuy Milk\n").unwrap();
    cmd(&temp)
        .env("EDITOR", "true")
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout("No changes.\n");
    assert_eq!(read_data(temp.path()), "  Gym  \nBuy Milk\n");
}

#[test]
fn missing_home_without_override_fails() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .env_remove("HOME")
        .env_remove("SIMPLE_TODO_DIR")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SIMPLE_TODO_DIR"));
}

#[test]
fn add_folds_carriage_returns() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["add", "a\rb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo item! 1. a b"));
    assert_eq!(read_data(temp.path()), "a b\n");
}

#[test]
fn edit_missing_item_fails() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["only"]);
    cmd(&temp)
        .args(["edit", "3", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item 3 not found"));
}

#[test]
fn delete_removes_by_number() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["a", "b", "c", "d"]);
    cmd(&temp)
        .args(["delete", "4", "2"])
        .assert()
        .success()
        .stdout("Item removed! 2. b\nItem removed! 4. d\n");
    assert_eq!(read_data(temp.path()), "a\nc\n");

    cmd(&temp).args(["rm", "1"]).assert().success();
    assert_eq!(read_data(temp.path()), "c\n");
}

#[test]
fn delete_out_of_range_removes_nothing() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["a", "b"]);
    cmd(&temp)
        .args(["delete", "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item 5 not found"));
    cmd(&temp)
        .args(["delete", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid item number: 0"));
    assert_eq!(read_data(temp.path()), "a\nb\n");
}

#[test]
fn deleting_last_item_leaves_empty_file() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["solo"]);
    cmd(&temp).args(["delete", "1"]).assert().success();
    assert_eq!(read_data(temp.path()), "");
    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items yet"));
}

#[test]
fn list_truncates_long_items() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &["a fairly long to-do item"]);
    cmd(&temp)
        .args(["list", "--width", "12"])
        .assert()
        .success()
        .stdout("1. a fairly…\n");
}

#[test]
fn unreadable_data_file_lists_empty_and_logs() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("data.txt")).unwrap();
    cmd(&temp)
        .env("SIMPLE_TODO_LOG", "error")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items yet"))
        .stderr(predicate::str::contains("Error reading items"));
}

#[test]
fn path_points_at_data_file() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("data.txt"));
}

#[test]
fn unknown_command_fails_with_help() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("frobnicate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Commands:"))
        .stderr(predicate::str::contains("Unknown command: frobnicate"));
}

#[test]
fn help_topic() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["help", "edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usage: todo edit <n> [text...]"));
}
