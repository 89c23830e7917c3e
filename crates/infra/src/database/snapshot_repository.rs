//! SQLite-backed snapshot repository.
//!
//! Implements the `SnapshotRepository` port used by the opportunity store.
//! The whole store state is one JSON payload in a keyed row; saving
//! replaces the previous snapshot for that key.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::OptionalExtension;
use warpline_core::SnapshotRepository;
use warpline_domain::Result;

use super::manager::DbManager;
use crate::errors::map_sql_error;

const UPSERT_SNAPSHOT_SQL: &str =
    "INSERT OR REPLACE INTO store_snapshots (key, payload, saved_at) VALUES (?1, ?2, ?3)";

const SELECT_SNAPSHOT_SQL: &str = "SELECT payload FROM store_snapshots WHERE key = ?1";

/// Keyed JSON snapshot storage backed by the shared database manager.
pub struct SqliteSnapshotRepository {
    db: Arc<DbManager>,
}

impl SqliteSnapshotRepository {
    /// Construct a repository backed by the shared database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn save_snapshot(&self, key: &str, payload: &str) -> Result<()> {
        let conn = self.db.get_connection()?;
        conn.execute(UPSERT_SNAPSHOT_SQL, (key, payload, Utc::now().timestamp()))
            .map_err(map_sql_error)?;
        Ok(())
    }

    fn load_snapshot(&self, key: &str) -> Result<Option<String>> {
        let conn = self.db.get_connection()?;
        conn.query_row(SELECT_SNAPSHOT_SQL, (key,), |row| row.get(0))
            .optional()
            .map_err(map_sql_error)
    }
}
