//! Per-call connection opener for the tip store.
//!
//! Nothing is pooled: every handle returned here is owned by the caller and
//! closed when it is dropped.

use crate::db::initialize::{init_db, schema_version, set_schema_version, upgrade_tables};
use crate::db::schema::{DB_VERSION, MAX_DB_VERSION};
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DbHelper {
    path: PathBuf,
    version: u32,
}

impl DbHelper {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            version: DB_VERSION,
        }
    }

    /// Target a specific schema version. Opening a file stamped with a
    /// different version drops and recreates the table.
    ///
    /// The version must be in `1..=MAX_DB_VERSION`: 0 marks a fresh file and
    /// `user_version` cannot hold anything above `i32::MAX`.
    pub fn with_version(path: impl AsRef<Path>, version: u32) -> AppResult<Self> {
        if version == 0 {
            return Err(AppError::Config(
                "schema version must be greater than 0".to_string(),
            ));
        }
        if version > MAX_DB_VERSION {
            return Err(AppError::Config(format!(
                "schema version must not exceed {}",
                MAX_DB_VERSION
            )));
        }
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            version,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Open for writing, creating or upgrading the schema first if needed.
    pub fn writable(&self) -> AppResult<Connection> {
        let mut conn = Connection::open(&self.path)?;
        init_db(&mut conn, self.version)?;
        Ok(conn)
    }

    /// Open read-only when the file is already at the target version,
    /// otherwise fall back to [`DbHelper::writable`] so the schema can be
    /// brought up to date.
    pub fn readable(&self) -> AppResult<Connection> {
        if self.path.exists() {
            let conn = Connection::open_with_flags(
                &self.path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            if schema_version(&conn)? == self.version {
                return Ok(conn);
            }
        }

        self.writable()
    }

    /// Drop and recreate the table regardless of the stamped version.
    pub fn reset(&self) -> AppResult<()> {
        let mut conn = Connection::open(&self.path)?;
        let current = schema_version(&conn)?;

        let tx = conn.transaction()?;
        upgrade_tables(&tx, current, self.version)?;
        set_schema_version(&tx, self.version)?;
        tx.commit()?;
        Ok(())
    }
}
