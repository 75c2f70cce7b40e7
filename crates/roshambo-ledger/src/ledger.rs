//! The in-memory ledger: a mapping from player id to score record.
//!
//! Records are materialized lazily the first time an id is referenced
//! and are never deleted. Insertion order is irrelevant; the map is
//! ordered by id so the serialized snapshot is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use roshambo_types::{Outcome, PlayerId, PlayerRecord};

use crate::scoring;

// ---------------------------------------------------------------------------
// Standing
// ---------------------------------------------------------------------------

/// One leaderboard position: a player id with a copy of its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player's external id (also the standings tie-break key).
    pub id: PlayerId,
    /// The player's record at the time the standings were computed.
    pub record: PlayerRecord,
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

/// The full ledger state: one record per player ever seen.
///
/// Serde-transparent: serializing a ledger produces exactly the snapshot
/// document, a JSON object keyed by player id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    players: BTreeMap<PlayerId, PlayerRecord>,
}

impl Ledger {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self {
            players: BTreeMap::new(),
        }
    }

    /// Number of players with a materialized record.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no player has a record yet.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Side-effect-free lookup of a player's record.
    pub fn lookup(&self, id: &PlayerId) -> Option<&PlayerRecord> {
        self.players.get(id)
    }

    /// Materialize a zeroed, default-named record for `id` if none
    /// exists yet, and return the record.
    pub fn materialize(&mut self, id: &PlayerId) -> &PlayerRecord {
        self.players.entry(id.clone()).or_default()
    }

    /// Record one completed round for `id` and return the updated
    /// record.
    ///
    /// Creates the record lazily, overwrites the display name with the
    /// most recently seen value, bumps the outcome's counter, and
    /// applies its point delta.
    pub fn record_round(
        &mut self,
        id: &PlayerId,
        display_name: &str,
        outcome: Outcome,
    ) -> &PlayerRecord {
        let record = self.players.entry(id.clone()).or_default();
        display_name.clone_into(&mut record.display_name);
        scoring::apply_outcome(record, outcome);
        record
    }

    /// All records in leaderboard order: points descending, ascending
    /// player id on equal points.
    pub fn standings(&self) -> Vec<Standing> {
        let mut all: Vec<Standing> = self
            .players
            .iter()
            .map(|(id, record)| Standing {
                id: id.clone(),
                record: record.clone(),
            })
            .collect();

        all.sort_by(|a, b| {
            b.record
                .points
                .cmp(&a.record.points)
                .then_with(|| a.id.cmp(&b.id))
        });

        all
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
