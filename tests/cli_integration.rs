//! Integration tests for the `tick` CLI.
//!
//! Each test pipes a script into `tick run` as a subprocess and checks
//! stdout, stderr and the exit status.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `tick` binary.
fn tick_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tick");
    path
}

/// Run `tick` with the given args, feeding `stdin` to it.
/// Config and logging are isolated from the host environment.
fn run_tick(args: &[&str], stdin: &str) -> Output {
    let tmp = TempDir::new().unwrap();
    let mut child = Command::new(tick_bin())
        .args(args)
        .env("TICKLIST_CONFIG", tmp.path().join("missing.toml"))
        .env_remove("TICKLIST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tick");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// tick run

#[test]
fn test_run_full_scenario() {
    let script = "\
add Buy milk
add Buy milk
toggle 1
edit 1 Buy oat milk
add Walk dog
remove 1 no
remove 2 yes
";
    let out = run_tick(&["run"], script);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[x] 1 Buy oat milk\n");
    assert!(stderr(&out).contains("line 2: a task titled \"Buy milk\" already exists"));
}

#[test]
fn test_run_empty_script() {
    let out = run_tick(&["run"], "# nothing here\n\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "(no tasks)\n");
}

#[test]
fn test_run_list_prints_intermediate_state() {
    let out = run_tick(&["run"], "add Buy milk\nlist\nadd Walk dog\n");
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "[ ] 1 Buy milk\n[ ] 1 Buy milk\n[ ] 2 Walk dog\n"
    );
}

#[test]
fn test_run_unknown_id_is_not_an_error() {
    let out = run_tick(&["run"], "add Buy milk\ntoggle 9\nedit 9 x\nremove 9\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[ ] 1 Buy milk\n");
}

#[test]
fn test_run_json() {
    let out = run_tick(&["run", "--json"], "add Buy milk\nadd Walk dog\ntoggle 2\n");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["done"], 1);
    assert_eq!(value["tasks"][0]["id"], 1);
    assert_eq!(value["tasks"][0]["title"], "Buy milk");
    assert_eq!(value["tasks"][0]["done"], false);
    assert_eq!(value["tasks"][1]["done"], true);
}

#[test]
fn test_run_parse_error_exits_nonzero() {
    let out = run_tick(&["run"], "add Buy milk\nfrobnicate 1\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("line 2: unknown command 'frobnicate'"));
}

#[test]
fn test_run_bad_id() {
    let out = run_tick(&["run"], "toggle one\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid task id 'one'"));
}

#[test]
fn test_run_reads_file_argument() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tasks.tick");
    fs::write(&path, "add Water plants\ntoggle 1\n").unwrap();
    let out = run_tick(&["run", path.to_str().unwrap()], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[x] 1 Water plants\n");
}

#[test]
fn test_run_missing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope.tick");
    let out = run_tick(&["run", path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("could not read script"));
}

// ---------------------------------------------------------------------------
// config

#[test]
fn test_explicit_config_must_exist() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.toml");
    let out = run_tick(&["run", "--config", path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("error:"));
}

#[test]
fn test_bad_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
    let out = run_tick(&["run", "--config", path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("config.toml"));
}

#[test]
fn test_valid_config_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        "[ui]\nshow_key_hints = false\n\n[behavior]\ntoggle_while_editing = false\n",
    )
    .unwrap();
    let out = run_tick(&["run", "--config", path.to_str().unwrap()], "add Buy milk\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "[ ] 1 Buy milk\n");
}

#[test]
fn test_json_without_run_is_rejected() {
    let out = run_tick(&["--json"], "");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("--json only applies to `tick run`"));
}

#[test]
fn test_version_flag() {
    let out = run_tick(&["--version"], "");
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("tick "));
}
