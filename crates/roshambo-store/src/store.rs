//! The durable, mutation-serialized ledger store.
//!
//! [`LedgerStore`] keeps the last fully committed ledger behind a
//! write-preferring, FIFO-fair `RwLock`. Every mutation runs its whole
//! load-mutate-persist cycle inside the exclusive section, so two
//! concurrent updates can never interleave and silently drop a round:
//! each player's history is complete and applied in the real-time order
//! the calls were admitted.
//!
//! Mutations commit copy-on-write. The committed state is cloned, the
//! one affected record is updated, the new snapshot is made durable,
//! and only then is it published as the committed state. A failed write
//! therefore leaves both the in-memory ledger and the on-disk snapshot
//! at the previous committed version, and readers only ever observe
//! fully committed state.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::time::timeout;

use roshambo_ledger::Ledger;
use roshambo_types::{Outcome, PlayerId, PlayerRecord};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::snapshot;

/// Durable, mutation-serialized store of player score records.
#[derive(Debug)]
pub struct LedgerStore {
    /// The last fully committed ledger state.
    state: RwLock<Ledger>,
    /// Snapshot file location.
    path: PathBuf,
    /// Bounded wait for lock acquisition.
    lock_timeout: Duration,
}

impl LedgerStore {
    /// Open the store at the configured snapshot location.
    ///
    /// Loads the existing snapshot, or initializes and persists an
    /// empty mapping if none exists yet (creating parent directories
    /// as needed). An unreadable or unparseable snapshot is an error.
    pub async fn open(config: StoreConfig) -> Result<Self, StoreError> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let ledger = match snapshot::load(&config.path).await? {
            Some(ledger) => ledger,
            None => {
                let empty = Ledger::new();
                snapshot::commit(&config.path, &empty).await?;
                empty
            }
        };

        tracing::info!(
            players = ledger.len(),
            path = %config.path.display(),
            "Opened ledger store"
        );

        Ok(Self {
            state: RwLock::new(ledger),
            path: config.path,
            lock_timeout: config.lock_timeout,
        })
    }

    /// Record one completed round for `id` and return the updated
    /// record.
    ///
    /// Materializes the record on first sight, overwrites the display
    /// name with the most recently seen value, and applies the
    /// outcome's counter and point delta. The update is durable before
    /// this returns.
    pub async fn apply_round(
        &self,
        id: &PlayerId,
        display_name: &str,
        outcome: Outcome,
    ) -> Result<PlayerRecord, StoreError> {
        let mut committed = self.write_guard().await?;

        // Copy-on-write: mutate a clone, publish only after the commit
        // is durable.
        let mut next = committed.clone();
        let record = next.record_round(id, display_name, outcome).clone();
        snapshot::commit(&self.path, &next).await?;
        *committed = next;

        tracing::debug!(
            player = %id,
            outcome = %outcome,
            points = record.points,
            "Recorded round"
        );
        Ok(record)
    }

    /// Ensure a record exists for `id` and return it.
    ///
    /// Materializes and persists a zeroed, default-named record on
    /// first sight; an existing record is returned unchanged without
    /// touching the snapshot.
    pub async fn ensure(&self, id: &PlayerId) -> Result<PlayerRecord, StoreError> {
        let mut committed = self.write_guard().await?;

        if let Some(record) = committed.lookup(id) {
            return Ok(record.clone());
        }

        let mut next = committed.clone();
        let record = next.materialize(id).clone();
        snapshot::commit(&self.path, &next).await?;
        *committed = next;

        tracing::debug!(player = %id, "Materialized player record");
        Ok(record)
    }

    /// Side-effect-free read of `id`'s record.
    ///
    /// An unknown id yields a transient zeroed default; nothing is
    /// materialized or persisted. Never an error for unknown ids.
    pub async fn balance(&self, id: &PlayerId) -> Result<PlayerRecord, StoreError> {
        let committed = self.read_guard().await?;
        Ok(committed.lookup(id).cloned().unwrap_or_default())
    }

    /// Clone the last fully committed ledger state.
    ///
    /// This is the consistent snapshot read used by derived views such
    /// as the leaderboard; it can never observe an in-flight mutation.
    pub async fn export(&self) -> Result<Ledger, StoreError> {
        let committed = self.read_guard().await?;
        Ok(committed.clone())
    }

    /// Acquire the exclusive writer section within the bounded wait.
    async fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Ledger>, StoreError> {
        timeout(self.lock_timeout, self.state.write())
            .await
            .map_err(|_elapsed| StoreError::Timeout {
                waited: self.lock_timeout,
            })
    }

    /// Acquire a shared reader section within the bounded wait.
    async fn read_guard(&self) -> Result<RwLockReadGuard<'_, Ledger>, StoreError> {
        timeout(self.lock_timeout, self.state.read())
            .await
            .map_err(|_elapsed| StoreError::Timeout {
                waited: self.lock_timeout,
            })
    }
}
