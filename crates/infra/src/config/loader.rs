//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `WARPLINE_DB_PATH`: Snapshot database file path (required)
//! - `WARPLINE_DB_POOL_SIZE`: Connection pool size
//! - `WARPLINE_SNAPSHOT_KEY`: Key the store snapshot is persisted under
//! - `WARPLINE_AUTOSAVE`: Write a snapshot after every mutation (true/false)
//! - `WARPLINE_TOLERANCE_PCT`: PO-vs-quote tolerance threshold in percent
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./warpline.json` or `./warpline.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)

use std::path::{Path, PathBuf};

use warpline_domain::{
    ComparisonConfig, Config, DatabaseConfig, Result, StoreConfig, WarplineError,
    DEFAULT_DB_POOL_SIZE, DEFAULT_TOLERANCE_PCT, SNAPSHOT_KEY,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `WarplineError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `WARPLINE_DB_PATH` is required; every other variable falls back to its
/// domain default when unset.
///
/// # Errors
/// Returns `WarplineError::Config` if `WARPLINE_DB_PATH` is missing or any
/// set variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("WARPLINE_DB_PATH")?;
    let db_pool_size = match std::env::var("WARPLINE_DB_POOL_SIZE") {
        Ok(s) => s
            .parse::<u32>()
            .map_err(|e| WarplineError::Config(format!("Invalid pool size: {e}")))?,
        Err(_) => DEFAULT_DB_POOL_SIZE,
    };

    let snapshot_key =
        std::env::var("WARPLINE_SNAPSHOT_KEY").unwrap_or_else(|_| SNAPSHOT_KEY.to_string());
    let autosave = env_bool("WARPLINE_AUTOSAVE", true);

    let tolerance_pct = match std::env::var("WARPLINE_TOLERANCE_PCT") {
        Ok(s) => s
            .parse::<f64>()
            .map_err(|e| WarplineError::Config(format!("Invalid tolerance: {e}")))?,
        Err(_) => DEFAULT_TOLERANCE_PCT,
    };

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        store: StoreConfig { snapshot_key, autosave },
        comparison: ComparisonConfig { tolerance_pct },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `WarplineError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WarplineError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WarplineError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WarplineError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WarplineError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WarplineError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(WarplineError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("warpline.json"),
            cwd.join("warpline.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WarplineError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
