//! # Warpline Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite snapshot storage)
//! - Configuration loading (environment variables, config files)
//! - Document extraction adapters
//!
//! ## Architecture
//! - Implements traits defined in `warpline-core`
//! - Depends on `warpline-domain` and `warpline-core`
//! - Contains all "impure" code (I/O)

pub mod config;
pub mod database;
pub mod errors;
pub mod extraction;

// Re-export commonly used items
pub use database::{DbManager, SqliteSnapshotRepository};
pub use extraction::JsonDocumentExtractor;
