//! Database connection manager.
//!
//! Owns the r2d2 connection pool over the snapshot database file and runs
//! the (single-table) migration at startup. All repositories borrow
//! connections from this manager.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use warpline_domain::{Result, WarplineError};

use crate::errors::map_pool_error;

const CREATE_SNAPSHOT_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS store_snapshots (
        key TEXT PRIMARY KEY,
        payload TEXT NOT NULL,
        saved_at INTEGER NOT NULL
    )";

/// Shared connection pool over the snapshot database.
pub struct DbManager {
    pool: Pool<SqliteConnectionManager>,
}

impl DbManager {
    /// Open (or create) the database at `path` with a pool of `pool_size`
    /// connections. WAL journaling and foreign keys are enabled on every
    /// connection.
    pub fn new(path: &Path, pool_size: u32) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(|e| WarplineError::Database(format!("failed to build pool: {e}")))?;

        Ok(Self { pool })
    }

    /// Borrow a pooled connection.
    pub fn get_connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(map_pool_error)
    }

    /// Create the snapshot table if it does not exist yet.
    ///
    /// There is no schema versioning; the table layout is fixed.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(CREATE_SNAPSHOT_TABLE_SQL)
            .map_err(|e| WarplineError::Database(format!("migration failed: {e}")))?;
        tracing::debug!("snapshot table ready");
        Ok(())
    }
}
