//! Single-round resolution against a randomly drawn counter-move.
//!
//! The random source is injected (`rand::Rng`), so callers seed a
//! [`SmallRng`](rand::rngs::SmallRng) for reproducible rounds in tests
//! and use a thread rng in production. One call to [`resolve`] consumes
//! exactly one draw.

use rand::Rng;
use roshambo_types::{Choice, Outcome};

// ---------------------------------------------------------------------------
// RoundResult
// ---------------------------------------------------------------------------

/// The resolved result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The move the player submitted.
    pub player_choice: Choice,
    /// The counter-move drawn for the bot.
    pub bot_choice: Choice,
    /// The outcome, from the player's perspective.
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Draw a counter-move uniformly at random from the injected source.
pub fn draw(rng: &mut impl Rng) -> Choice {
    match rng.random_range(0..3_u8) {
        0 => Choice::Rock,
        1 => Choice::Paper,
        _ => Choice::Scissors,
    }
}

/// The fixed beat-table: rock beats scissors, scissors beats paper,
/// paper beats rock.
const fn beats(attacker: Choice, defender: Choice) -> bool {
    matches!(
        (attacker, defender),
        (Choice::Rock, Choice::Scissors)
            | (Choice::Scissors, Choice::Paper)
            | (Choice::Paper, Choice::Rock)
    )
}

/// Resolve a player's move against an explicit counter-move.
///
/// Pure: total over all nine move pairs, tie iff the moves are equal,
/// win iff the pair is in the beat-table, loss otherwise.
pub fn resolve_against(player: Choice, bot: Choice) -> RoundResult {
    let outcome = if player == bot {
        Outcome::Tie
    } else if beats(player, bot) {
        Outcome::Win
    } else {
        Outcome::Loss
    };

    RoundResult {
        player_choice: player,
        bot_choice: bot,
        outcome,
    }
}

/// Resolve a player's move against a freshly drawn counter-move.
pub fn resolve(player: Choice, rng: &mut impl Rng) -> RoundResult {
    resolve_against(player, draw(rng))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
