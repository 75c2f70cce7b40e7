//! Ranked leaderboard views over the Roshambo score ledger.
//!
//! A thin, read-only layer: it derives a bounded, deterministically
//! ordered leaderboard from consistent ledger snapshots and never
//! mutates anything. An empty ledger yields an empty leaderboard --
//! "no data yet", not an error.
//!
//! # Modules
//!
//! - [`leaderboard`] -- the [`RankingService`] and its top-N queries

pub mod leaderboard;

pub use leaderboard::{DEFAULT_TOP_N, RankingService};
