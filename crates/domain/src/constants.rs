//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Key under which the opportunity store snapshot is persisted.
pub const SNAPSHOT_KEY: &str = "opportunities-store";

/// Default PO-vs-quote tolerance threshold, in percent.
pub const DEFAULT_TOLERANCE_PCT: f64 = 2.0;

/// Default connection pool size for the snapshot database.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
