//! Mock repository implementations for testing
//!
//! Provides an in-memory snapshot repository so store tests run without a
//! database dependency.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use warpline_core::SnapshotRepository;
use warpline_domain::{Result as DomainResult, WarplineError};

/// In-memory mock for `SnapshotRepository`.
///
/// Stores payloads in a map keyed exactly like the real repository and can
/// be switched into a failing mode to exercise the store's best-effort
/// persistence path.
#[derive(Default, Clone)]
pub struct MockSnapshotRepository {
    snapshots: Arc<Mutex<HashMap<String, String>>>,
    fail_saves: Arc<Mutex<bool>>,
    save_calls: Arc<Mutex<usize>>,
}

impl MockSnapshotRepository {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save_snapshot` call fail.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock() = fail;
    }

    /// Number of stored snapshots.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.lock().len()
    }

    /// Number of `save_snapshot` calls seen, including failed ones.
    pub fn save_calls(&self) -> usize {
        *self.save_calls.lock()
    }
}

impl SnapshotRepository for MockSnapshotRepository {
    fn save_snapshot(&self, key: &str, payload: &str) -> DomainResult<()> {
        *self.save_calls.lock() += 1;
        if *self.fail_saves.lock() {
            return Err(WarplineError::Database("mock save failure".to_string()));
        }
        self.snapshots.lock().insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn load_snapshot(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.snapshots.lock().get(key).cloned())
    }
}
