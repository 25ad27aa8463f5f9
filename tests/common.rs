#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtotracker::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtotracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtotracker.sqlite", name));
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

/// Write `content` to a temp file and return its path.
pub fn temp_json(name: &str, content: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, content).expect("write temp json");
    p
}

/// `--test init` on a fresh database file.
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

pub fn memory_pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}
