//! Integration tests for the `sl` CLI.
//!
//! Each test creates a temp data directory, runs `sl` as a subprocess,
//! and verifies stdout and/or snapshot file contents.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `sl` binary.
fn sl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("sl");
    path
}

/// Run `sl` with the given args against a data directory, asserting success.
fn sl(data_dir: &Path, args: &[&str]) -> String {
    let output = Command::new(sl_bin())
        .arg("-C")
        .arg(data_dir)
        .args(args)
        .output()
        .expect("failed to run sl");
    assert!(
        output.status.success(),
        "sl {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Create a project and return its id, scraped from the creation message.
fn create_project(data_dir: &Path, name: &str) -> String {
    let out = sl(data_dir, &["project", "add", name]);
    let start = out.rfind('(').unwrap() + 1;
    let end = out.rfind(')').unwrap();
    out[start..end].to_string()
}

/// Create a task and return its id.
fn create_task(data_dir: &Path, project_id: &str, title: &str) -> String {
    let out = sl(data_dir, &["add", project_id, title]);
    let start = out.rfind('(').unwrap() + 1;
    let end = out.rfind(')').unwrap();
    out[start..end].to_string()
}

#[test]
fn project_add_and_list() {
    let tmp = TempDir::new().unwrap();
    create_project(tmp.path(), "Acme");

    let out = sl(tmp.path(), &["project", "list"]);
    assert!(out.contains("Acme"));

    let json = sl(tmp.path(), &["project", "list", "--json"]);
    let projects: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(projects.as_array().unwrap().len(), 1);
    assert_eq!(projects[0]["name"], "Acme");
    assert!(projects[0]["createdAt"].is_string());
}

#[test]
fn board_reflects_task_moves() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Board");
    let task_id = create_task(tmp.path(), &project_id, "Ship it");

    let json = sl(tmp.path(), &["board", &project_id, "--json"]);
    let board: serde_json::Value = serde_json::from_str(&json).unwrap();
    let columns = board["columns"].as_array().unwrap();
    assert_eq!(columns[0]["status"], "todo");
    assert_eq!(columns[0]["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(columns[2]["tasks"].as_array().unwrap().len(), 0);

    sl(tmp.path(), &["mv", &task_id, "done"]);

    let json = sl(tmp.path(), &["board", &project_id, "--json"]);
    let board: serde_json::Value = serde_json::from_str(&json).unwrap();
    let columns = board["columns"].as_array().unwrap();
    assert_eq!(columns[0]["tasks"].as_array().unwrap().len(), 0);
    assert_eq!(columns[2]["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(columns[2]["tasks"][0]["status"], "done");
}

#[test]
fn agenda_defaults_and_plan() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Planner");
    let task_id = create_task(tmp.path(), &project_id, "Someday");

    // No section set: the task lands in Today
    let json = sl(tmp.path(), &["agenda", &project_id, "--json"]);
    let agenda: serde_json::Value = serde_json::from_str(&json).unwrap();
    let sections = agenda["sections"].as_array().unwrap();
    assert_eq!(sections[0]["section"], "today");
    assert_eq!(sections[0]["tasks"].as_array().unwrap().len(), 1);

    sl(tmp.path(), &["plan", &task_id, "later"]);

    let json = sl(tmp.path(), &["agenda", &project_id, "--json"]);
    let agenda: serde_json::Value = serde_json::from_str(&json).unwrap();
    let sections = agenda["sections"].as_array().unwrap();
    assert_eq!(sections[0]["tasks"].as_array().unwrap().len(), 0);
    assert_eq!(sections[2]["tasks"].as_array().unwrap().len(), 1);
}

#[test]
fn agenda_hide_done_filters_rendering_only() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Filter");
    let task_id = create_task(tmp.path(), &project_id, "Finished");
    sl(tmp.path(), &["toggle", &task_id]);

    let json = sl(tmp.path(), &["agenda", &project_id, "--hide-done", "--json"]);
    let agenda: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(agenda["sections"][0]["tasks"].as_array().unwrap().len(), 0);

    // Without the flag the task is still there; hiding never deleted it
    let json = sl(tmp.path(), &["agenda", &project_id, "--json"]);
    let agenda: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(agenda["sections"][0]["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(agenda["sections"][0]["tasks"][0]["completed"], true);
}

#[test]
fn toggle_round_trip_output() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Toggles");
    let task_id = create_task(tmp.path(), &project_id, "Flip me");

    let out = sl(tmp.path(), &["toggle", &task_id]);
    assert!(out.contains("done"));
    let out = sl(tmp.path(), &["toggle", &task_id]);
    assert!(out.contains("reopened"));
}

#[test]
fn rm_task_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Cleanup");
    let task_id = create_task(tmp.path(), &project_id, "Short lived");

    sl(tmp.path(), &["rm", &task_id]);
    // Second delete of the same id still succeeds
    sl(tmp.path(), &["rm", &task_id]);

    let json = sl(tmp.path(), &["board", &project_id, "--json"]);
    let board: serde_json::Value = serde_json::from_str(&json).unwrap();
    for column in board["columns"].as_array().unwrap() {
        assert!(column["tasks"].as_array().unwrap().is_empty());
    }
}

#[test]
fn project_rm_reports_orphans() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Doomed");
    create_task(tmp.path(), &project_id, "Left behind");

    let out = sl(tmp.path(), &["project", "rm", &project_id]);
    assert!(out.contains("1 tasks left in place"));

    // Tasks snapshot still holds the orphan
    let tasks = std::fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    let tasks: serde_json::Value = serde_json::from_str(&tasks).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);
}

#[test]
fn snapshots_written_per_collection() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Files");
    create_task(tmp.path(), &project_id, "On disk");

    assert!(tmp.path().join("projects.json").exists());
    assert!(tmp.path().join("tasks.json").exists());

    let tasks = std::fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    let tasks: serde_json::Value = serde_json::from_str(&tasks).unwrap();
    assert_eq!(tasks[0]["projectId"], project_id);
    assert_eq!(tasks[0]["status"], "todo");
}

#[test]
fn unknown_status_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let project_id = create_project(tmp.path(), "Errors");
    let task_id = create_task(tmp.path(), &project_id, "Stuck");

    let output = Command::new(sl_bin())
        .arg("-C")
        .arg(tmp.path())
        .args(["mv", &task_id, "blocked"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown status"));
}
