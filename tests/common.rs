#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rtracker::db::initialize::init_db;
use rtracker::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh DB path with the schema already created through the CLI
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rti().args(["--db", &db_path, "init"]).assert().success();
    db_path
}

/// Fresh DB opened through the library API, schema included
pub fn open_test_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::create(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// 2025-03-10 at the given wall-clock time
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid timestamp")
}

/// Run a CLI command and return its stdout
pub fn stdout_of(db_path: &str, args: &[&str]) -> String {
    let out = rti()
        .args(["--db", db_path])
        .args(args)
        .output()
        .expect("failed to run rtracker");
    assert!(out.status.success(), "command {:?} failed", args);
    String::from_utf8_lossy(&out.stdout).to_string()
}
