//! Durable persistence for the Roshambo score ledger.
//!
//! The store owns the single shared mutable resource of the system: the
//! ledger mapping player ids to score records, persisted as one atomic
//! JSON snapshot at a deployment-configured location.
//!
//! # Architecture
//!
//! ```text
//! Command layer (external)
//!     |
//!     +-- apply_round / ensure --> exclusive writer section
//!     |       clone committed state, update one record,
//!     |       commit snapshot (temp file + fsync + rename),
//!     |       then publish the new state
//!     |
//!     +-- balance / export ------> shared reader section
//!             last fully committed state only
//! ```
//!
//! Mutations serialize through one write-preferring lock, so the
//! load-mutate-persist cycle is atomic with respect to other mutations
//! and no concurrent update is ever lost. Readers never observe a torn
//! write: on disk because commits replace the snapshot atomically, in
//! memory because the new state is published only after it is durable.
//!
//! # Modules
//!
//! - [`store`] -- the [`LedgerStore`] and its operations
//! - [`config`] -- deployment configuration (`StoreConfig`)
//! - [`error`] -- shared error type (`StoreError`)

pub mod config;
pub mod error;
pub mod store;

mod snapshot;

// Re-export primary types for convenience.
pub use config::StoreConfig;
pub use error::StoreError;
pub use store::LedgerStore;
