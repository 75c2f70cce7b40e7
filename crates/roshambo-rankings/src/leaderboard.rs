//! The read-only ranking service.

use std::sync::Arc;

use roshambo_ledger::Standing;
use roshambo_store::{LedgerStore, StoreError};

/// Default number of leaderboard entries served.
pub const DEFAULT_TOP_N: usize = 10;

/// Read-only ranked view over the ledger store.
///
/// Each query reads one consistent, fully committed ledger snapshot, so
/// the sort can never interleave with an in-flight mutation or observe
/// an entry mid-update.
#[derive(Debug, Clone)]
pub struct RankingService {
    store: Arc<LedgerStore>,
}

impl RankingService {
    /// Create a ranking service over the given store.
    pub const fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// The top `limit` standings.
    ///
    /// Ordered by points descending with ascending player id as the
    /// deterministic tie-break, truncated to at most `limit` entries.
    pub async fn top(&self, limit: usize) -> Result<Vec<Standing>, StoreError> {
        let ledger = self.store.export().await?;
        let mut standings = ledger.standings();
        standings.truncate(limit);
        Ok(standings)
    }

    /// The top [`DEFAULT_TOP_N`] standings.
    pub async fn top_default(&self) -> Result<Vec<Standing>, StoreError> {
        self.top(DEFAULT_TOP_N).await
    }
}
