//! Static description of the tip store: names, column ordinals and the
//! literal SQL used to create, drop and seed the `tip` table.
//!
//! The names live in small literal macros so the SQL constants below can be
//! assembled with `concat!` from the same text the name constants expose.

macro_rules! tip_table {
    () => {
        "tip"
    };
}
macro_rules! tip_id {
    () => {
        "_id"
    };
}
macro_rules! tip_date {
    () => {
        "tip_date"
    };
}
macro_rules! tip_bill_amount {
    () => {
        "bill_amount"
    };
}
macro_rules! tip_percent {
    () => {
        "tip_percent"
    };
}

// database
pub const DB_NAME: &str = "tipcalc.db";
pub const DB_VERSION: u32 = 1;

/// `PRAGMA user_version` is a signed 32-bit value.
pub const MAX_DB_VERSION: u32 = i32::MAX as u32;

// tip table
pub const TIP_TABLE: &str = tip_table!();

pub const TIP_ID: &str = tip_id!();
pub const TIP_ID_COL: usize = 0;

pub const TIP_DATE: &str = tip_date!();
pub const TIP_DATE_COL: usize = 1;

pub const TIP_BILL_AMOUNT: &str = tip_bill_amount!();
pub const TIP_BILL_AMOUNT_COL: usize = 2;

pub const TIP_PERCENT: &str = tip_percent!();
pub const TIP_PERCENT_COL: usize = 3;

pub const CREATE_TIP_TABLE: &str = concat!(
    "CREATE TABLE ",
    tip_table!(),
    " (",
    tip_id!(),
    " INTEGER PRIMARY KEY AUTOINCREMENT, ",
    tip_date!(),
    " INTEGER NOT NULL, ",
    tip_bill_amount!(),
    " FLOAT NOT NULL, ",
    tip_percent!(),
    " FLOAT NOT NULL);"
);

pub const DROP_TIP_TABLE: &str = concat!("DROP TABLE IF EXISTS ", tip_table!());

/// Column list in ordinal order, used by every SELECT so that the
/// `*_COL` constants stay valid.
pub const TIP_COLUMNS: &str = concat!(
    tip_id!(),
    ", ",
    tip_date!(),
    ", ",
    tip_bill_amount!(),
    ", ",
    tip_percent!()
);

/// Rows written every time the table is (re)created:
/// `(id, date_millis, bill_amount, tip_percent)`.
pub const DEFAULT_TIPS: [(i64, i64, f64, f64); 2] = [
    (1, 1_526_083_200_000, 12.76, 0.15),
    (2, 1_526_256_000_000, 33.57, 0.22),
];
