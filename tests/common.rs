#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ojt() -> Command {
    cargo_bin_cmd!("ojtlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ojtlogger.sqlite", name));
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

/// Fresh, empty directory under the temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("{}_ojtlogger_dir", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

pub fn add(db_path: &str, name: &str, date: &str, time_in: &str, time_out: Option<&str>) {
    let mut args = vec!["--db", db_path, "add", name, "--in", time_in, "--date", date];
    if let Some(out) = time_out {
        args.extend(["--out", out]);
    }
    ojt().args(&args).assert().success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    ojt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add(db_path, "Ana", "1/1/2024", "09:10", Some("18:05"));
    add(db_path, "Ben", "1/1/2024", "08:45", Some("19:30"));
    add(db_path, "Ana", "1/2/2024", "09:20", Some("17:30"));
    add(db_path, "Ana", "1/3/2024", "08:50", None);
}

/// Overwrite the persisted record blob directly, bypassing the CLI
pub fn write_raw_blob(db_path: &str, value: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO storage (key, value) VALUES ('ojtList', ?1)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        [value],
    )
    .expect("write blob");
}

pub fn read_raw_blob(db_path: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT value FROM storage WHERE key = 'ojtList'", [], |r| {
        r.get(0)
    })
    .ok()
}
