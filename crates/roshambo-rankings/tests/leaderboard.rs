//! Integration tests for the ranking service, including the full
//! play-record-rank flow through engine, store, and leaderboard.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::items_after_statements,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::indexing_slicing
)]

use std::sync::Arc;

use tempfile::TempDir;

use roshambo_game::resolve_against;
use roshambo_rankings::{DEFAULT_TOP_N, RankingService};
use roshambo_store::{LedgerStore, StoreConfig};
use roshambo_types::{Choice, Outcome, PlayerId};

async fn service_in(dir: &TempDir) -> (Arc<LedgerStore>, RankingService) {
    let store = LedgerStore::open(StoreConfig::new(dir.path().join("ledger.json")))
        .await
        .expect("Failed to open ledger store");
    let store = Arc::new(store);
    let rankings = RankingService::new(Arc::clone(&store));
    (store, rankings)
}

#[tokio::test]
async fn invalid_move_never_touches_the_ledger() {
    let dir = TempDir::new().unwrap();
    let (store, rankings) = service_in(&dir).await;

    // The move string is rejected before any round exists to record.
    assert!("lizard".parse::<Choice>().is_err());

    assert!(store.export().await.unwrap().is_empty());
    assert!(rankings.top_default().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_ledger_yields_an_empty_leaderboard() {
    let dir = TempDir::new().unwrap();
    let (_store, rankings) = service_in(&dir).await;

    assert!(rankings.top_default().await.unwrap().is_empty());
}

#[tokio::test]
async fn new_player_win_then_loss_ends_at_forty_points() {
    let dir = TempDir::new().unwrap();
    let (store, rankings) = service_in(&dir).await;
    let alice = PlayerId::from("alice");

    // Alice plays rock, the engine draws scissors.
    let round = resolve_against(Choice::Rock, Choice::Scissors);
    assert_eq!(round.outcome, Outcome::Win);
    let record = store
        .apply_round(&alice, "alice", round.outcome)
        .await
        .unwrap();
    assert_eq!(record.points, 50);
    assert_eq!(record.wins, 1);

    // Alice plays paper, the engine draws scissors.
    let round = resolve_against(Choice::Paper, Choice::Scissors);
    assert_eq!(round.outcome, Outcome::Loss);
    let record = store
        .apply_round(&alice, "alice", round.outcome)
        .await
        .unwrap();
    assert_eq!(record.points, 40);
    assert_eq!(record.losses, 1);

    // Bob never plays; a balance query shows a zero record without
    // putting him on the board.
    let bob = store.balance(&PlayerId::from("bob")).await.unwrap();
    assert_eq!(bob.points, 0);
    assert_eq!(bob.rounds_played(), 0);

    let board = rankings.top_default().await.unwrap();
    let order: Vec<&str> = board.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, ["alice"]);
}

#[tokio::test]
async fn materialized_players_rank_below_scorers() {
    let dir = TempDir::new().unwrap();
    let (store, rankings) = service_in(&dir).await;

    // Alice ends at 40 points; Bob is materialized at zero.
    let alice = PlayerId::from("alice");
    store
        .apply_round(&alice, "alice", Outcome::Win)
        .await
        .unwrap();
    store
        .apply_round(&alice, "alice", Outcome::Loss)
        .await
        .unwrap();
    store.ensure(&PlayerId::from("bob")).await.unwrap();

    let board = rankings.top_default().await.unwrap();
    let order: Vec<(&str, i64)> = board
        .iter()
        .map(|s| (s.id.as_str(), s.record.points))
        .collect();
    assert_eq!(order, [("alice", 40), ("bob", 0)]);
}

#[tokio::test]
async fn leaderboard_is_bounded_and_sorted() {
    let dir = TempDir::new().unwrap();
    let (store, rankings) = service_in(&dir).await;

    // Twelve players with strictly increasing win counts.
    for (index, name) in [
        "ada", "bel", "cid", "dot", "eli", "fay", "gus", "hal", "ivy", "jan", "kit", "lee",
    ]
    .iter()
    .enumerate()
    {
        let id = PlayerId::from(*name);
        for _ in 0..=index {
            store.apply_round(&id, name, Outcome::Win).await.unwrap();
        }
    }

    let board = rankings.top_default().await.unwrap();
    assert_eq!(board.len(), DEFAULT_TOP_N);

    // Sorted non-increasing by points, best player first.
    assert_eq!(board.first().map(|s| s.id.as_str()), Some("lee"));
    for pair in board.windows(2) {
        assert!(pair[0].record.points >= pair[1].record.points);
    }

    // A tighter limit truncates further; a huge one returns everyone.
    assert_eq!(rankings.top(3).await.unwrap().len(), 3);
    assert_eq!(rankings.top(100).await.unwrap().len(), 12);
}

#[tokio::test]
async fn equal_points_rank_by_ascending_id() {
    let dir = TempDir::new().unwrap();
    let (store, rankings) = service_in(&dir).await;

    for name in ["zoe", "amir", "mira"] {
        store
            .apply_round(&PlayerId::from(name), name, Outcome::Win)
            .await
            .unwrap();
    }

    let board = rankings.top_default().await.unwrap();
    let order: Vec<&str> = board.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, ["amir", "mira", "zoe"]);
}

#[tokio::test]
async fn leaderboard_is_deterministic_for_a_fixed_ledger() {
    let dir = TempDir::new().unwrap();
    let (store, rankings) = service_in(&dir).await;

    for name in ["alice", "bob"] {
        store
            .apply_round(&PlayerId::from(name), name, Outcome::Tie)
            .await
            .unwrap();
    }

    let first = rankings.top_default().await.unwrap();
    let second = rankings.top_default().await.unwrap();
    assert_eq!(first, second);
}
