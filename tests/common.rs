#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use tipcalc::TipCalcDb;

/// Binary under test, pointed at a throwaway config directory so the
/// user's real `~/.tipcalc` is never read or written.
pub fn tc() -> Command {
    let mut cmd = cargo_bin_cmd!("tipcalc");
    cmd.env(tipcalc::config::CONFIG_DIR_ENV, test_config_dir())
        .env_remove(tipcalc::ui::messages::DEBUG_ENV);
    cmd
}

pub fn test_config_dir() -> PathBuf {
    env::temp_dir().join("tipcalc_test_config")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tipcalc.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tipcalc_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh database file wrapped in the DAO (schema created on first use).
pub fn fresh_db(name: &str) -> (TipCalcDb, String) {
    let path = setup_test_db(name);
    (TipCalcDb::new(&path), path)
}

/// Initialize a DB through the CLI and add a couple of tips
pub fn init_db_with_data(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tc().args(["--db", db_path, "add", "40.00", "20", "--date", "2025-09-01 20:15"])
        .assert()
        .success();

    tc().args(["--db", db_path, "add", "18.50", "0.18", "--date", "2025-09-15 13:00"])
        .assert()
        .success();
}
