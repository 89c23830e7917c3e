//! Port interfaces for opportunity persistence.
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use warpline_domain::Result;

/// Trait for persisting the keyed store snapshot.
///
/// The store serializes its whole state (opportunity list + filters) into a
/// JSON payload and writes it under a fixed key after every mutation; at
/// startup the payload is restored wholesale. There is no schema versioning
/// or migration.
pub trait SnapshotRepository: Send + Sync {
    /// Write the payload under `key`, replacing any previous snapshot.
    fn save_snapshot(&self, key: &str, payload: &str) -> Result<()>;

    /// Read the payload stored under `key`, if any.
    fn load_snapshot(&self, key: &str) -> Result<Option<String>>;
}
