//! End-to-end tests for the graft binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn graft() -> Command {
    Command::cargo_bin("graft").unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn read(path: &str) -> String {
    fs::read_to_string(Path::new(path)).unwrap()
}

const HOST: &str = "\
# Title
<!-- graft: intro / begin from: ./other.md#1~2 -->
stale line
<!-- graft: intro / end -->
";

const TARGET: &str = "alpha\nbeta\ngamma\n";

#[test]
fn preview_shows_all_three_views() {
    let dir = TempDir::new().unwrap();
    write(&dir, "other.md", TARGET);
    let host = write(&dir, "doc.md", HOST);

    graft()
        .args(["preview", &host])
        .assert()
        .success()
        .stdout(predicate::str::contains("original"))
        .stdout(predicate::str::contains("purged"))
        .stdout(predicate::str::contains("updated"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta"));
}

#[test]
fn preview_purge_only_drops_stale_payload() {
    let dir = TempDir::new().unwrap();
    write(&dir, "other.md", TARGET);
    let host = write(&dir, "doc.md", HOST);

    graft()
        .args(["preview", "--purge", &host])
        .assert()
        .success()
        .stdout(predicate::str::contains("stale line").not())
        .stdout(predicate::str::contains("<!-- graft: intro / begin"));
}

#[test]
fn preview_diff_shows_the_pending_change() {
    let dir = TempDir::new().unwrap();
    write(&dir, "other.md", TARGET);
    let host = write(&dir, "doc.md", HOST);

    graft()
        .args(["preview", "--diff", &host])
        .assert()
        .success()
        .stdout(predicate::str::contains("-stale line"))
        .stdout(predicate::str::contains("+alpha"));
}

#[test]
fn update_rewrites_the_file_in_place() {
    let dir = TempDir::new().unwrap();
    write(&dir, "other.md", TARGET);
    let host = write(&dir, "doc.md", HOST);

    graft().args(["update", &host]).assert().success();

    let updated = read(&host);
    assert!(updated.contains("alpha\nbeta"), "got: {updated}");
    assert!(!updated.contains("stale line"), "got: {updated}");
}

#[test]
fn update_honors_the_skip_sentinel() {
    let dir = TempDir::new().unwrap();
    write(&dir, "other.md", TARGET);
    let content = format!("<!-- graft: skip-update -->\n{HOST}");
    let host = write(&dir, "doc.md", &content);

    graft()
        .args(["update", &host])
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIP"));

    assert_eq!(read(&host), content);
}

#[test]
fn purge_removes_imported_payload() {
    let dir = TempDir::new().unwrap();
    let host = write(&dir, "doc.md", HOST);

    graft().args(["purge", &host]).assert().success();

    let purged = read(&host);
    assert!(!purged.contains("stale line"), "got: {purged}");
    assert!(purged.contains("<!-- graft: intro / begin"), "got: {purged}");
    assert!(purged.contains("<!-- graft: intro / end"), "got: {purged}");
}

#[test]
fn broken_marker_fails_with_a_readable_error() {
    let dir = TempDir::new().unwrap();
    let host = write(
        &dir,
        "doc.md",
        "<!-- graft: lonely / begin from: ./other.md#1 -->\n",
    );

    graft()
        .args(["preview", &host])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("lonely"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let host = write(&dir, "doc.txt", "plain text\n");

    graft()
        .args(["preview", &host])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"));
}
