//! Configuration structures.
//!
//! Loaded by `warpline-infra`'s config loader from environment variables or
//! a `config.{json,toml}` file.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_POOL_SIZE, DEFAULT_TOLERANCE_PCT, SNAPSHOT_KEY};

/// Snapshot database settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

/// Opportunity store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Key the store snapshot is persisted under.
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,
    /// Write a snapshot after every mutation.
    #[serde(default = "default_true")]
    pub autosave: bool,
}

/// PO-vs-quote comparison settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonConfig {
    /// Tolerance threshold in percent; differences above it are violations.
    #[serde(default = "default_tolerance")]
    pub tolerance_pct: f64,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub comparison: ComparisonConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { snapshot_key: default_snapshot_key(), autosave: true }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self { tolerance_pct: DEFAULT_TOLERANCE_PCT }
    }
}

fn default_pool_size() -> u32 {
    DEFAULT_DB_POOL_SIZE
}

fn default_snapshot_key() -> String {
    SNAPSHOT_KEY.to_string()
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE_PCT
}

fn default_true() -> bool {
    true
}
