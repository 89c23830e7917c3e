//! SQLite-backed persistence for the opportunity store.

pub mod manager;
pub mod snapshot_repository;

pub use manager::DbManager;
pub use snapshot_repository::SqliteSnapshotRepository;
