use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn noteport() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("noteport"))
}

#[test]
fn converts_single_note() {
    let tmp = TempDir::new().unwrap();
    let note = tmp.path().join("Guide.md");
    fs::write(&note, "[[Other Note|Link text]]\n").unwrap();

    noteport()
        .arg(&note)
        .assert()
        .success()
        .stderr(predicate::str::contains("Guide_converted.md"));

    let written = fs::read_to_string(tmp.path().join("Guide_converted.md")).unwrap();
    assert!(written.starts_with("---\ntitle: Guide\n"));
    assert!(written.contains("<style>"));
    assert!(written.ends_with("[Link text](Other Note.md)\n"));
}

#[test]
fn flags_drop_header_parts() {
    let tmp = TempDir::new().unwrap();
    let note = tmp.path().join("n.md");
    fs::write(&note, "[[#Top]]").unwrap();

    noteport()
        .arg(&note)
        .arg("--no-style")
        .arg("--no-front-matter")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("n_converted.md")).unwrap(),
        "[Top](#top)"
    );
}

#[test]
fn converts_folder_and_reports_summary() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.md"), "a").unwrap();
    fs::write(tmp.path().join("b.md"), "b").unwrap();
    fs::write(tmp.path().join("b_converted.md"), "stale").unwrap();

    noteport()
        .arg(tmp.path())
        .args(["--jobs", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("2/2"));

    assert!(tmp.path().join("a_converted.md").is_file());
    let b = fs::read_to_string(tmp.path().join("b_converted.md")).unwrap();
    assert!(b.ends_with("\n\nb"));
}

#[test]
fn missing_path_fails() {
    let tmp = TempDir::new().unwrap();

    noteport()
        .arg(tmp.path().join("absent.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn non_markdown_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("notes.txt");
    fs::write(&file, "x").unwrap();

    noteport()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a markdown note"));

    assert!(!tmp.path().join("notes_converted.md").exists());
}
