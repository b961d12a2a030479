//! Data-access object for the `tip` table.
//!
//! Every public method opens its own connection through [`DbHelper`],
//! runs a single statement and lets the connection drop before returning.

use crate::db::helper::DbHelper;
use crate::db::schema::{
    TIP_BILL_AMOUNT, TIP_BILL_AMOUNT_COL, TIP_COLUMNS, TIP_DATE, TIP_DATE_COL, TIP_ID, TIP_ID_COL,
    TIP_PERCENT, TIP_PERCENT_COL, TIP_TABLE,
};
use crate::errors::AppResult;
use crate::models::tip::Tip;
use crate::ui::messages::{debug, warning};
use rusqlite::{OptionalExtension, Result, Row, params};
use std::path::Path;

/// Returned by [`TipCalcDb::insert_tip`] when the row could not be written.
pub const INSERT_FAILED: i64 = -1;

pub fn map_row(row: &Row) -> Result<Tip> {
    Ok(Tip {
        id: row.get(TIP_ID_COL)?,
        date_millis: row.get(TIP_DATE_COL)?,
        bill_amount: row.get(TIP_BILL_AMOUNT_COL)?,
        tip_percent: row.get(TIP_PERCENT_COL)?,
    })
}

#[derive(Debug, Clone)]
pub struct TipCalcDb {
    helper: DbHelper,
}

impl TipCalcDb {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            helper: DbHelper::new(path),
        }
    }

    pub fn with_helper(helper: DbHelper) -> Self {
        Self { helper }
    }

    pub fn helper(&self) -> &DbHelper {
        &self.helper
    }

    /// All tips in store order (insertion order for this table).
    pub fn get_tips(&self) -> AppResult<Vec<Tip>> {
        let conn = self.helper.readable()?;
        let mut stmt = conn.prepare(&format!("SELECT {TIP_COLUMNS} FROM {TIP_TABLE}"))?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// The tip with `id`.
    ///
    /// `Ok(None)` covers both a missing row and a row whose values cannot be
    /// converted into a [`Tip`]. Only connection-level failures are errors.
    pub fn get_tip(&self, id: i64) -> AppResult<Option<Tip>> {
        let conn = self.helper.readable()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {TIP_COLUMNS} FROM {TIP_TABLE} WHERE {TIP_ID} = ?1"
        ))?;

        let mut rows = stmt.query([id])?;
        let row = match rows.next()? {
            Some(row) => row,
            None => return Ok(None),
        };

        match map_row(row) {
            Ok(tip) => Ok(Some(tip)),
            Err(e) => {
                debug(format!("Unreadable tip row #{}: {}", id, e));
                Ok(None)
            }
        }
    }

    /// Write `tip` as a new row and return its row id.
    ///
    /// A non-positive `tip.id` lets SQLite assign the key; a positive one is
    /// written as given. Statement failures (e.g. an id that already exists)
    /// return [`INSERT_FAILED`].
    pub fn insert_tip(&self, tip: &Tip) -> AppResult<i64> {
        let conn = self.helper.writable()?;

        let res = if tip.is_saved() {
            conn.execute(
                &format!("INSERT INTO {TIP_TABLE} ({TIP_COLUMNS}) VALUES (?1, ?2, ?3, ?4)"),
                params![tip.id, tip.date_millis, tip.bill_amount, tip.tip_percent],
            )
        } else {
            conn.execute(
                &format!(
                    "INSERT INTO {TIP_TABLE} ({TIP_DATE}, {TIP_BILL_AMOUNT}, {TIP_PERCENT})
                     VALUES (?1, ?2, ?3)"
                ),
                params![tip.date_millis, tip.bill_amount, tip.tip_percent],
            )
        };

        match res {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(e) => {
                warning(format!("Failed to insert tip: {}", e));
                Ok(INSERT_FAILED)
            }
        }
    }

    /// Overwrite date, amount and percent of the row with `tip.id`.
    /// Returns the number of rows changed (0 when the id is unknown).
    pub fn update_tip(&self, tip: &Tip) -> AppResult<usize> {
        let conn = self.helper.writable()?;
        let n = conn.execute(
            &format!(
                "UPDATE {TIP_TABLE}
                 SET {TIP_DATE} = ?1, {TIP_BILL_AMOUNT} = ?2, {TIP_PERCENT} = ?3
                 WHERE {TIP_ID} = ?4"
            ),
            params![tip.date_millis, tip.bill_amount, tip.tip_percent, tip.id],
        )?;
        Ok(n)
    }

    /// Returns the number of rows removed (0 when the id is unknown).
    pub fn delete_tip(&self, id: i64) -> AppResult<usize> {
        let conn = self.helper.writable()?;
        let n = conn.execute(&format!("DELETE FROM {TIP_TABLE} WHERE {TIP_ID} = ?1"), [id])?;
        Ok(n)
    }

    /// Most recent tip by date; ties go to the highest id.
    pub fn get_last_tip(&self) -> AppResult<Option<Tip>> {
        let conn = self.helper.readable()?;
        let tip = conn
            .query_row(
                &format!(
                    "SELECT {TIP_COLUMNS} FROM {TIP_TABLE}
                     ORDER BY {TIP_DATE} DESC, {TIP_ID} DESC
                     LIMIT 1"
                ),
                [],
                map_row,
            )
            .optional()?;
        Ok(tip)
    }

    pub fn average_tip_percent(&self) -> AppResult<Option<f64>> {
        let conn = self.helper.readable()?;
        let avg: Option<f64> = conn.query_row(
            &format!("SELECT AVG({TIP_PERCENT}) FROM {TIP_TABLE}"),
            [],
            |row| row.get(0),
        )?;
        Ok(avg)
    }

    pub fn count_tips(&self) -> AppResult<i64> {
        let conn = self.helper.readable()?;
        let n: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {TIP_TABLE}"),
            [],
            |row| row.get(0),
        )?;
        Ok(n)
    }
}
