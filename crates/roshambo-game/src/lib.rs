//! Round resolution for the Roshambo mini-game.
//!
//! This crate is the game engine: it resolves a player's move against a
//! counter-move drawn uniformly at random from an injected, seedable
//! random source. Resolution is pure and side-effect-free; the only
//! effect of playing a round is consuming one draw from the source.
//!
//! # Rules
//!
//! The fixed beat-table, with the outcome always from the player's
//! perspective:
//!
//! | Player | Counter-move | Outcome |
//! |--------|--------------|---------|
//! | rock | scissors | win |
//! | scissors | paper | win |
//! | paper | rock | win |
//! | any | same move | tie |
//! | anything else | | loss |
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use roshambo_game::{Choice, Outcome, resolve};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let result = resolve(Choice::Rock, &mut rng);
//! assert_eq!(result.player_choice, Choice::Rock);
//! if result.player_choice == result.bot_choice {
//!     assert_eq!(result.outcome, Outcome::Tie);
//! }
//! ```

pub mod round;

// Re-export the round surface and the shared types it speaks in.
pub use round::{RoundResult, draw, resolve, resolve_against};
pub use roshambo_types::{Choice, InvalidChoice, Outcome};
