#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch directory so a real user
/// config never leaks into a test.
pub fn rwo() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rworkouts_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rworkouts");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkouts.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A fixed local instant: `day` April 2026 at `hour`:`minute`.
pub fn april(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 4, day, hour, minute, 0)
        .earliest()
        .expect("valid local time")
}

/// Initialize the DB and add one run and one ride via the CLI.
pub fn init_db_with_data(db_path: &str) {
    rwo()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rwo()
        .args([
            "--db", db_path, "add", "running", "5.2", "24", "178", "--at", "40.7,-74.0",
        ])
        .assert()
        .success();

    rwo()
        .args([
            "--db", db_path, "add", "cycling", "25", "95", "523", "--at", "40.71,-74.01",
        ])
        .assert()
        .success();
}

/// Pull the id out of the `add` confirmation line: "... recorded (id 1234567890)".
pub fn id_from_add_output(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let start = text.find("(id ").expect("id in add output") + 4;
    let end = text[start..].find(')').expect("closing paren") + start;
    text[start..end].to_string()
}
