use crate::db::schema::{
    CREATE_TIP_TABLE, DEFAULT_TIPS, DROP_TIP_TABLE, MAX_DB_VERSION, TIP_COLUMNS, TIP_TABLE,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{debug, warning};
use rusqlite::{Connection, params};

/// Schema version stamped into the database file (`PRAGMA user_version`).
/// A fresh file reports 0; so does a negative stamp written by another tool.
pub fn schema_version(conn: &Connection) -> AppResult<u32> {
    let v: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(u32::try_from(v).unwrap_or(0))
}

pub fn set_schema_version(conn: &Connection, version: u32) -> AppResult<()> {
    if version > MAX_DB_VERSION {
        return Err(AppError::Config(format!(
            "schema version {} does not fit in user_version (max {})",
            version, MAX_DB_VERSION
        )));
    }
    // PRAGMA does not accept bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    Ok(())
}

/// Create the `tip` table and write the default rows.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(CREATE_TIP_TABLE)?;

    let mut stmt = conn.prepare(&format!(
        "INSERT INTO {TIP_TABLE} ({TIP_COLUMNS}) VALUES (?1, ?2, ?3, ?4)"
    ))?;
    for (id, date, bill, percent) in DEFAULT_TIPS {
        stmt.execute(params![id, date, bill, percent])?;
    }

    debug(format!("Created tip table with {} default rows", DEFAULT_TIPS.len()));
    Ok(())
}

/// Destructive upgrade: existing rows are discarded and the defaults re-seeded.
pub fn upgrade_tables(conn: &Connection, old_version: u32, new_version: u32) -> AppResult<()> {
    warning(format!(
        "Upgrading db from version {} to {}",
        old_version, new_version
    ));

    conn.execute_batch(DROP_TIP_TABLE)?;
    create_tables(conn)
}

/// Bring the database to `version`.
///
/// - version 0 (new file) → create + seed
/// - any other mismatch   → drop + create + seed
/// - same version         → nothing
///
/// The whole step runs in one transaction so a half-created schema is
/// never stamped.
pub fn init_db(conn: &mut Connection, version: u32) -> AppResult<()> {
    let current = schema_version(conn)?;
    if current == version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    if current == 0 {
        // a file without a version stamp may still carry a stray table
        tx.execute_batch(DROP_TIP_TABLE)?;
        create_tables(&tx)?;
    } else {
        upgrade_tables(&tx, current, version)?;
    }
    set_schema_version(&tx, version)?;
    tx.commit()?;

    Ok(())
}
