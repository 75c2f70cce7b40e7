//! Move and outcome enumerations for the mini-game.
//!
//! Both enums serialize as the lowercase strings the command layer and
//! the snapshot format use on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Choice
// ---------------------------------------------------------------------------

/// A move in the mini-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// Rock. Beats scissors.
    Rock,
    /// Paper. Beats rock.
    Paper,
    /// Scissors. Beats paper.
    Scissors,
}

impl Choice {
    /// All three moves, in declaration order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The lowercase wire name of the move.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = InvalidChoice;

    /// Parse a move string. Case-insensitive, surrounding whitespace
    /// tolerated; anything else fails with [`InvalidChoice`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| normalized.eq_ignore_ascii_case(choice.as_str()))
            .ok_or_else(|| InvalidChoice {
                input: s.to_owned(),
            })
    }
}

/// An unrecognized move string was supplied.
///
/// Surfaced to the caller as a user-correctable input error; no ledger
/// mutation occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized move {input:?}: expected rock, paper, or scissors")]
pub struct InvalidChoice {
    /// The rejected input, verbatim.
    pub input: String,
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The result of one round, always from the human player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The player's move beat the counter-move.
    Win,
    /// The counter-move beat the player's move.
    Loss,
    /// Both sides made the same move.
    Tie,
}

impl Outcome {
    /// The lowercase wire name of the outcome.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Tie => "tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
