//! Scoring rules applied when a round is recorded.

use roshambo_types::{Outcome, PlayerRecord};

/// Points awarded for a won round.
pub const WIN_POINTS: i64 = 50;

/// Points awarded for a tied round.
pub const TIE_POINTS: i64 = 10;

/// Points applied for a lost round (a deduction).
pub const LOSS_POINTS: i64 = -10;

/// The signed point delta for an outcome.
pub const fn delta(outcome: Outcome) -> i64 {
    match outcome {
        Outcome::Win => WIN_POINTS,
        Outcome::Tie => TIE_POINTS,
        Outcome::Loss => LOSS_POINTS,
    }
}

/// Apply one completed round to a record: bump the matching counter and
/// add the outcome's point delta. Saturates at the integer limits.
pub const fn apply_outcome(record: &mut PlayerRecord, outcome: Outcome) {
    match outcome {
        Outcome::Win => record.wins = record.wins.saturating_add(1),
        Outcome::Loss => record.losses = record.losses.saturating_add(1),
        Outcome::Tie => record.ties = record.ties.saturating_add(1),
    }
    record.points = record.points.saturating_add(delta(outcome));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_match_the_scoring_table() {
        assert_eq!(delta(Outcome::Win), 50);
        assert_eq!(delta(Outcome::Tie), 10);
        assert_eq!(delta(Outcome::Loss), -10);
    }

    #[test]
    fn each_outcome_bumps_exactly_one_counter() {
        let mut record = PlayerRecord::default();

        apply_outcome(&mut record, Outcome::Win);
        assert_eq!((record.wins, record.losses, record.ties), (1, 0, 0));

        apply_outcome(&mut record, Outcome::Loss);
        assert_eq!((record.wins, record.losses, record.ties), (1, 1, 0));

        apply_outcome(&mut record, Outcome::Tie);
        assert_eq!((record.wins, record.losses, record.ties), (1, 1, 1));

        assert_eq!(record.points, 50);
        assert_eq!(record.rounds_played(), 3);
    }

    #[test]
    fn points_can_go_negative() {
        let mut record = PlayerRecord::default();
        apply_outcome(&mut record, Outcome::Loss);
        assert_eq!(record.points, -10);
    }

    #[test]
    fn points_saturate_instead_of_wrapping() {
        let mut record = PlayerRecord {
            points: i64::MAX,
            ..PlayerRecord::default()
        };
        apply_outcome(&mut record, Outcome::Win);
        assert_eq!(record.points, i64::MAX);
    }
}
