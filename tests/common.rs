#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpl() -> Command {
    cargo_bin_cmd!("rpaylogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpaylogger.sqlite", name));
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

/// Initialize a test DB (no config file is written)
pub fn init_db(db_path: &str) {
    rpl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a clock-mode work entry at the given rate
pub fn add_clock(db_path: &str, date: &str, start: &str, end: &str, brk: &str, rate: &str) {
    rpl()
        .args([
            "--db", db_path, "add", date, "--in", start, "--out", end, "--break", brk, "--rate",
            rate,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small February 2024 dataset (two shifts, 1400 + 700)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_clock(db_path, "2024-02-05", "09:00", "17:00", "60", "200");
    add_clock(db_path, "2024-02-06", "09:00", "12:30", "0", "200");
}

/// Captured stdout of a successful run
pub fn stdout_of(args: &[&str]) -> String {
    let out = rpl().args(args).output().expect("run rpaylogger");
    assert!(out.status.success(), "command failed: {:?}", args);
    String::from_utf8_lossy(&out.stdout).to_string()
}
