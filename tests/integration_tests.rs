use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, tc};
use tipcalc::{DbHelper, TipCalcDb};

#[test]
fn test_init_seeds_default_tips() {
    let db_path = setup_test_db("cli_init");

    tc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("schema v1, 2 tip(s) stored"));

    tc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Saved tips (2)"))
        .stdout(contains("$12.76"))
        .stdout(contains("$33.57"))
        .stdout(contains("22%"));
}

#[test]
fn test_add_then_get() {
    let db_path = setup_test_db("cli_add_get");
    init_db_with_data(&db_path);

    tc().args(["--db", &db_path, "get", "3"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 20:15"))
        .stdout(contains("$40.00"))
        .stdout(contains("20%"))
        .stdout(contains("$8.00"))
        .stdout(contains("$48.00"));
}

#[test]
fn test_add_with_explicit_id_and_conflict() {
    let db_path = setup_test_db("cli_add_id");

    tc().args(["--db", &db_path, "add", "10", "15%", "--id", "100"])
        .assert()
        .success()
        .stdout(contains("Tip #100 saved"));

    tc().args(["--db", &db_path, "add", "11", "15%", "--id", "100"])
        .assert()
        .failure()
        .stderr(contains("could not be saved"));
}

#[test]
fn test_add_rejects_bad_input() {
    let db_path = setup_test_db("cli_add_bad");

    tc().args(["--db", &db_path, "add", "abc", "15"])
        .assert()
        .failure()
        .stderr(contains("Invalid bill amount"));

    tc().args(["--db", &db_path, "add", "10", "15", "--date", "yesterday-ish"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_get_missing_tip_fails() {
    let db_path = setup_test_db("cli_get_missing");

    tc().args(["--db", &db_path, "get", "999"])
        .assert()
        .failure()
        .stderr(contains("Tip not found: #999"));
}

#[test]
fn test_update_tip() {
    let db_path = setup_test_db("cli_update");

    tc().args(["--db", &db_path, "update", "1", "--bill", "20", "--percent", "25"])
        .assert()
        .success()
        .stdout(contains("Tip #1 updated"));

    tc().args(["--db", &db_path, "get", "1"])
        .assert()
        .success()
        .stdout(contains("$20.00"))
        .stdout(contains("25%"))
        .stdout(contains("$5.00"));
}

#[test]
fn test_update_missing_tip_fails() {
    let db_path = setup_test_db("cli_update_missing");

    tc().args(["--db", &db_path, "update", "404", "--bill", "20"])
        .assert()
        .failure()
        .stderr(contains("Tip not found: #404"));
}

#[test]
fn test_delete_with_and_without_confirmation() {
    let db_path = setup_test_db("cli_delete");

    tc().args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    tc().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Tip #1 has been deleted."));

    tc().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Tip not found: #1"));

    tc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Saved tips (1)"))
        .stdout(contains("$12.76").not());
}

#[test]
fn test_calc_prints_amounts() {
    tc().args(["calc", "42.50", "15"])
        .assert()
        .success()
        .stdout(contains("$42.50"))
        .stdout(contains("$6.38").or(contains("$6.37")))
        .stdout(contains("15%"));

    tc().args(["calc", "42.50", "15", "--round", "total"])
        .assert()
        .success()
        .stdout(contains("$49.00"))
        .stdout(contains("Rounding:"));
}

#[test]
fn test_calc_save_stores_the_tip() {
    let db_path = setup_test_db("cli_calc_save");

    tc().args(["--db", &db_path, "calc", "30", "20%", "--save"])
        .assert()
        .success()
        .stdout(contains("$6.00"))
        .stdout(contains("Tip saved as #3"));

    tc().args(["--db", &db_path, "get", "3"])
        .assert()
        .success()
        .stdout(contains("$36.00"));
}

#[test]
fn test_stats() {
    let db_path = setup_test_db("cli_stats");
    init_db_with_data(&db_path);

    tc().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(is_match(r"Tips saved:\s+4\n").unwrap())
        .stdout(is_match(r"Last saved:\s+2025-09-15 13:00").unwrap());
}

#[test]
fn test_list_json() {
    let db_path = setup_test_db("cli_list_json");

    let out = tc()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tips: Vec<tipcalc::Tip> = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0].bill_amount, 12.76);
}

#[test]
fn test_list_json_stays_parseable_across_upgrade() {
    let db_path = setup_test_db("cli_list_json_upgrade");
    init_db_with_data(&db_path);

    // stamp the file with another version so the next open upgrades it
    TipCalcDb::with_helper(DbHelper::with_version(&db_path, 2).expect("helper"))
        .count_tips()
        .expect("stamp v2");

    let assert = tc()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stderr(contains("Upgrading db from version 2 to 1"));

    let tips: Vec<tipcalc::Tip> =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json");
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[1].bill_amount, 33.57);
}

#[test]
#[cfg(unix)]
fn test_config_edit_runs_editor() {
    let config_dir = std::env::temp_dir().join("tipcalc_test_config_edit");
    fs::create_dir_all(&config_dir).expect("config dir");
    let config_file = config_dir.join("tipcalc.conf");
    fs::write(&config_file, "default_tip_percent: 0.2\n").expect("config file");

    tc().env(tipcalc::config::CONFIG_DIR_ENV, &config_dir)
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("edited using 'true'"));

    fs::remove_file(&config_file).ok();

    tc().env(tipcalc::config::CONFIG_DIR_ENV, &config_dir)
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .failure()
        .stderr(contains("configuration file not found"));
}

#[test]
fn test_db_reset() {
    let db_path = setup_test_db("cli_db_reset");
    init_db_with_data(&db_path);

    tc().args(["--db", &db_path, "db", "--reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("default rows"));

    tc().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Saved tips (2)"))
        .stdout(contains("$40.00").not());
}
