mod common;
use common::{fresh_db, setup_test_db};

use rusqlite::Connection;
use tipcalc::db::initialize::{schema_version, set_schema_version};
use tipcalc::db::schema::{
    DB_VERSION, DEFAULT_TIPS, MAX_DB_VERSION, TIP_BILL_AMOUNT, TIP_BILL_AMOUNT_COL, TIP_COLUMNS,
    TIP_DATE, TIP_DATE_COL, TIP_ID, TIP_ID_COL, TIP_PERCENT, TIP_PERCENT_COL, TIP_TABLE,
};
use tipcalc::{DbHelper, Tip, TipCalcDb, db::INSERT_FAILED};

fn default_tips() -> Vec<Tip> {
    DEFAULT_TIPS
        .iter()
        .map(|&(id, date, bill, pct)| Tip::new(id, date, bill, pct))
        .collect()
}

#[test]
fn test_new_database_is_seeded_with_defaults() {
    let (db, path) = fresh_db("seeded");

    let tips = db.get_tips().expect("list tips");
    assert_eq!(tips, default_tips());

    let conn = Connection::open(&path).expect("open db");
    assert_eq!(schema_version(&conn).expect("version"), DB_VERSION);
}

#[test]
fn test_insert_then_get_round_trip() {
    let (db, _) = fresh_db("round_trip");

    let mut tip = Tip::new(0, 1_700_000_000_123, 48.35, 0.18);
    let id = db.insert_tip(&tip).expect("insert");
    assert_eq!(id, 3, "ids continue after the seeded rows");

    tip.id = id;
    let loaded = db.get_tip(id).expect("get").expect("tip present");
    assert_eq!(loaded, tip);
}

#[test]
fn test_insert_with_explicit_id() {
    let (db, _) = fresh_db("explicit_id");

    let tip = Tip::new(42, 1_600_000_000_000, 10.0, 0.2);
    assert_eq!(db.insert_tip(&tip).expect("insert"), 42);
    assert_eq!(db.get_tip(42).expect("get"), Some(tip));

    // autoincrement carries on from the highest key
    let next = db.insert_tip(&Tip::new(0, 1, 1.0, 0.1)).expect("insert");
    assert_eq!(next, 43);
}

#[test]
fn test_insert_duplicate_id_returns_sentinel() {
    let (db, _) = fresh_db("duplicate_id");

    let dup = Tip::new(1, 1_000, 99.99, 0.3);
    assert_eq!(db.insert_tip(&dup).expect("insert"), INSERT_FAILED);

    // the seeded row is untouched
    assert_eq!(db.get_tips().expect("list"), default_tips());
}

#[test]
fn test_list_returns_inserted_plus_defaults_in_order() {
    let (db, _) = fresh_db("list_order");

    let n = 5;
    for i in 0..n {
        let id = db
            .insert_tip(&Tip::new(0, 1_000 * i, 10.0 + i as f64, 0.15))
            .expect("insert");
        assert!(id > 0);
    }

    let tips = db.get_tips().expect("list");
    assert_eq!(tips.len(), n as usize + DEFAULT_TIPS.len());

    let ids: Vec<i64> = tips.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tips[6].bill_amount, 14.0);
}

#[test]
fn test_list_empty_table() {
    let (db, _) = fresh_db("list_empty");

    for (id, ..) in DEFAULT_TIPS {
        assert_eq!(db.delete_tip(id).expect("delete"), 1);
    }
    assert!(db.get_tips().expect("list").is_empty());
}

#[test]
fn test_update_existing_tip() {
    let (db, _) = fresh_db("update_existing");

    let changed = Tip::new(2, 1_526_256_000_000, 40.00, 0.25);
    assert_eq!(db.update_tip(&changed).expect("update"), 1);
    assert_eq!(db.get_tip(2).expect("get"), Some(changed));
}

#[test]
fn test_update_missing_tip_changes_nothing() {
    let (db, _) = fresh_db("update_missing");

    let ghost = Tip::new(999, 0, 1.0, 0.5);
    assert_eq!(db.update_tip(&ghost).expect("update"), 0);
    assert_eq!(db.get_tips().expect("list"), default_tips());
}

#[test]
fn test_delete_existing_and_missing() {
    let (db, _) = fresh_db("delete");

    assert_eq!(db.delete_tip(1).expect("delete"), 1);
    assert_eq!(db.get_tip(1).expect("get"), None);
    assert_eq!(db.delete_tip(1).expect("delete again"), 0);
    assert_eq!(db.delete_tip(12345).expect("delete missing"), 0);
    assert_eq!(db.get_tips().expect("list").len(), 1);
}

#[test]
fn test_get_missing_tip_is_none() {
    let (db, _) = fresh_db("get_missing");
    assert_eq!(db.get_tip(77).expect("get"), None);
    assert_eq!(db.get_tip(-1).expect("get"), None);
}

#[test]
fn test_get_unreadable_row_is_none() {
    let (db, path) = fresh_db("unreadable_row");
    // make sure the schema exists before writing behind the DAO's back
    db.get_tips().expect("init");

    let conn = Connection::open(&path).expect("open");
    conn.execute(
        "INSERT INTO tip (_id, tip_date, bill_amount, tip_percent) VALUES (50, 1, 'not a number', 0.1)",
        [],
    )
    .expect("raw insert");
    drop(conn);

    assert_eq!(db.get_tip(50).expect("get"), None);
    assert!(db.get_tip(1).expect("get").is_some());
}

#[test]
fn test_version_bump_drops_and_reseeds() {
    let (db, path) = fresh_db("version_bump");

    db.insert_tip(&Tip::new(0, 5, 5.0, 0.05)).expect("insert");
    db.delete_tip(1).expect("delete");
    assert_eq!(db.get_tips().expect("list").len(), 2);

    let v2 = TipCalcDb::with_helper(DbHelper::with_version(&path, 2).expect("helper"));
    assert_eq!(v2.get_tips().expect("list v2"), default_tips());

    let conn = Connection::open(&path).expect("open");
    assert_eq!(schema_version(&conn).expect("version"), 2);
    drop(conn);

    // going back is destructive too
    v2.insert_tip(&Tip::new(0, 6, 6.0, 0.06)).expect("insert v2");
    assert_eq!(db.get_tips().expect("list v1"), default_tips());
}

#[test]
fn test_zero_version_is_rejected() {
    assert!(DbHelper::with_version("/tmp/never_opened.sqlite", 0).is_err());
}

#[test]
fn test_version_outside_user_version_range_is_rejected() {
    let path = setup_test_db("version_range");

    assert!(DbHelper::with_version(&path, MAX_DB_VERSION + 1).is_err());
    assert!(DbHelper::with_version(&path, 3_000_000_000).is_err());
    assert!(DbHelper::with_version(&path, u32::MAX).is_err());
    // nothing was opened, so nothing was created
    assert!(!std::path::Path::new(&path).exists());

    let helper = DbHelper::with_version(&path, MAX_DB_VERSION).expect("max version");
    assert_eq!(helper.version(), MAX_DB_VERSION);
    assert_eq!(helper.path(), std::path::Path::new(&path));

    let db = TipCalcDb::with_helper(helper);
    assert_eq!(db.get_tips().expect("list"), default_tips());

    let conn = Connection::open(&path).expect("open");
    assert_eq!(schema_version(&conn).expect("version"), MAX_DB_VERSION);
}

#[test]
fn test_oversized_stamp_is_refused() {
    let (db, path) = fresh_db("oversized_stamp");
    db.count_tips().expect("init");

    let conn = Connection::open(&path).expect("open");
    assert!(set_schema_version(&conn, MAX_DB_VERSION + 1).is_err());
    assert_eq!(schema_version(&conn).expect("version"), DB_VERSION);
}

#[test]
fn test_negative_stamp_is_treated_as_fresh() {
    let (db, path) = fresh_db("negative_stamp");
    db.insert_tip(&Tip::new(0, 9, 9.0, 0.09)).expect("insert");

    let conn = Connection::open(&path).expect("open");
    conn.execute_batch("PRAGMA user_version = -5;").expect("stamp");
    assert_eq!(schema_version(&conn).expect("version"), 0);
    drop(conn);

    assert_eq!(db.get_tips().expect("list"), default_tips());
}

#[test]
fn test_table_columns_follow_name_constants() {
    let (db, path) = fresh_db("table_columns");
    db.count_tips().expect("init");

    let conn = Connection::open(&path).expect("open");
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({TIP_TABLE})"))
        .expect("prepare");
    let columns: Vec<(usize, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect();

    assert_eq!(
        columns,
        vec![
            (TIP_ID_COL, TIP_ID.to_string()),
            (TIP_DATE_COL, TIP_DATE.to_string()),
            (TIP_BILL_AMOUNT_COL, TIP_BILL_AMOUNT.to_string()),
            (TIP_PERCENT_COL, TIP_PERCENT.to_string()),
        ]
    );
    assert_eq!(
        TIP_COLUMNS,
        format!("{TIP_ID}, {TIP_DATE}, {TIP_BILL_AMOUNT}, {TIP_PERCENT}")
    );
}

#[test]
fn test_readable_handle_is_read_only_when_up_to_date() {
    let (db, _) = fresh_db("readable_read_only");
    db.count_tips().expect("init");

    let conn = db.helper().readable().expect("readable");
    assert!(conn.execute(&format!("DELETE FROM {TIP_TABLE}"), []).is_err());
    drop(conn);

    assert_eq!(db.count_tips().expect("count"), 2);
}

#[test]
fn test_reset_restores_defaults() {
    let (db, _) = fresh_db("reset");

    db.insert_tip(&Tip::new(0, 7, 70.0, 0.1)).expect("insert");
    db.update_tip(&Tip::new(1, 0, 0.0, 0.0)).expect("update");

    db.helper().reset().expect("reset");
    assert_eq!(db.get_tips().expect("list"), default_tips());
}

#[test]
fn test_readable_creates_missing_file() {
    let (db, path) = fresh_db("readable_creates");
    assert!(!std::path::Path::new(&path).exists());

    assert_eq!(db.count_tips().expect("count"), 2);
    assert!(std::path::Path::new(&path).exists());
}

#[test]
fn test_last_tip_and_average() {
    let (db, _) = fresh_db("stats");

    let avg = db.average_tip_percent().expect("avg").expect("some avg");
    assert!((avg - (0.15 + 0.22) / 2.0).abs() < 1e-9);

    let last = db.get_last_tip().expect("last").expect("some last");
    assert_eq!(last.id, 2);

    let newest = Tip::new(0, 1_800_000_000_000, 20.0, 0.20);
    let id = db.insert_tip(&newest).expect("insert");
    assert_eq!(db.get_last_tip().expect("last").map(|t| t.id), Some(id));
    assert_eq!(db.count_tips().expect("count"), 3);
}

#[test]
fn test_stats_on_empty_table() {
    let (db, _) = fresh_db("stats_empty");
    db.delete_tip(1).expect("delete");
    db.delete_tip(2).expect("delete");

    assert_eq!(db.count_tips().expect("count"), 0);
    assert_eq!(db.get_last_tip().expect("last"), None);
    assert_eq!(db.average_tip_percent().expect("avg"), None);
}
