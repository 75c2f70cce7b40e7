//! Pure in-memory score ledger for the Roshambo mini-game.
//!
//! The ledger is the sole state of the system: one [`PlayerRecord`] per
//! player id ever seen, created lazily and never deleted. This crate
//! holds the pure semantics -- scoring deltas, record application, and
//! the deterministic standings order. Durability and mutation
//! serialization live one layer up, in `roshambo-store`.
//!
//! # Scoring
//!
//! Every completed round applies exactly one delta and bumps exactly
//! one counter:
//!
//! | Outcome | Points | Counter |
//! |---------|--------|---------|
//! | Win | +50 | `wins` |
//! | Tie | +10 | `ties` |
//! | Loss | -10 | `losses` |
//!
//! So for any player, `wins + losses + ties` equals the rounds recorded
//! for them and `points` equals the ordered sum of their deltas.
//!
//! # Usage
//!
//! ```
//! use roshambo_ledger::Ledger;
//! use roshambo_types::{Outcome, PlayerId};
//!
//! let mut ledger = Ledger::new();
//! let alice = PlayerId::from("alice");
//!
//! let record = ledger.record_round(&alice, "Alice", Outcome::Win);
//! assert_eq!(record.points, 50);
//! assert_eq!(record.wins, 1);
//! ```

pub mod ledger;
pub mod scoring;

// Re-export primary types at crate root.
pub use ledger::{Ledger, Standing};
pub use scoring::{LOSS_POINTS, TIE_POINTS, WIN_POINTS};

pub use roshambo_types::{Outcome, PlayerId, PlayerRecord};
