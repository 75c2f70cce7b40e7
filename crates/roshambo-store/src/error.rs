//! Error types for the durable ledger store.
//!
//! All failures are propagated via [`StoreError`], which wraps the
//! underlying I/O and serialization errors. A failed operation never
//! leaves a partially mutated ledger: the previously committed snapshot
//! stays intact on disk and in memory.

use std::time::Duration;

/// Errors that can occur in the durable store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The ledger lock was not acquired within the bounded wait.
    #[error("ledger busy: lock not acquired within {waited:?}")]
    Timeout {
        /// How long the caller waited before giving up.
        waited: Duration,
    },

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
