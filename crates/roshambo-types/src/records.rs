//! The persistent per-player score record.
//!
//! One record exists per player id ever seen by the ledger. Records are
//! created lazily with all counters zero, never deleted, and mutated
//! only through the ledger's recording operations.

use serde::{Deserialize, Serialize};

/// Display name given to a record before the player's real name has
/// been seen.
pub const DEFAULT_DISPLAY_NAME: &str = "Unknown";

/// Persistent score record for a single player.
///
/// The player id is not part of the record; it is the key under which
/// the record is stored in the ledger mapping. Field names follow the
/// snapshot's wire format (`display_name` serializes as `displayName`).
///
/// Invariant: `wins + losses + ties` equals the number of completed
/// rounds recorded for the player, and `points` equals the sum of
/// per-round deltas applied in the order the rounds were committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Most recently seen display name; overwritten on every update.
    pub display_name: String,
    /// Net score. Signed and unbounded in either direction; arithmetic
    /// saturates at the representation limits instead of wrapping.
    pub points: i64,
    /// Rounds won.
    pub wins: u64,
    /// Rounds lost.
    pub losses: u64,
    /// Rounds tied.
    pub ties: u64,
}

impl PlayerRecord {
    /// Create a zeroed record carrying the given display name.
    pub fn with_name(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            points: 0,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Total completed rounds recorded for this player.
    pub const fn rounds_played(&self) -> u64 {
        self.wins.saturating_add(self.losses).saturating_add(self.ties)
    }
}

impl Default for PlayerRecord {
    /// A zeroed record with the [`DEFAULT_DISPLAY_NAME`].
    fn default() -> Self {
        Self::with_name(DEFAULT_DISPLAY_NAME)
    }
}
