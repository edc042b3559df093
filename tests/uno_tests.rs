//! Uno session tests.
//!
//! Whole games are played out by handing every seat to the built-in policy.

use minigames::core::{GameResult, Identity, Seat, UnoConfig};
use minigames::games::uno::{Uno, UnoAction, UnoOutcome, UnoRejection};
use proptest::prelude::*;

fn table(n: u64) -> Vec<Identity> {
    (1..=n).map(|i| Identity::user(i, format!("p{i}"))).collect()
}

/// Let the built-in policy play every seat until the game ends.
fn play_out(game: &mut Uno, max_turns: usize) -> Option<GameResult> {
    for _ in 0..max_turns {
        if game.is_over() {
            break;
        }
        let action = game.ai_action();
        if let UnoOutcome::Rejected(r) = game.take_turn(action) {
            panic!("policy move rejected: {r:?}");
        }
    }
    game.outcome()
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_deal() {
    let game = Uno::new(table(3), UnoConfig::default(), 1).unwrap();
    for p in game.players() {
        assert_eq!(p.hand().len(), 7);
    }
    assert!(!game.top_card().is_wild());
    assert_eq!(game.current_player(), &table(3)[0]);
}

#[test]
fn test_against_ai_seats() {
    let game = Uno::against_ai(Identity::user(1, "solo"), UnoConfig::default(), 1).unwrap();
    let ais = game.players().filter(|p| p.identity().is_ai()).count();
    assert_eq!(ais, 4);
}

#[test]
fn test_too_few_players() {
    assert!(Uno::new(table(1), UnoConfig::default(), 1).is_err());
}

// =============================================================================
// Turns
// =============================================================================

/// Rejected plays leave the turn where it was.
#[test]
fn test_rejections_keep_turn() {
    let mut game = Uno::new(table(3), UnoConfig::default(), 2).unwrap();
    let mover = game.current_player().clone();
    assert_eq!(
        game.take_turn(UnoAction::Play { index: 99, color: None }),
        UnoOutcome::Rejected(UnoRejection::NoSuchCard)
    );
    assert_eq!(game.current_player(), &mover);
    assert_eq!(game.hand(&mover).map(<[_]>::len), Some(7));
}

/// Drawing adds one card and passes the turn.
#[test]
fn test_draw_passes() {
    let mut game = Uno::new(table(3), UnoConfig::default(), 2).unwrap();
    let mover = game.current_player().clone();
    match game.take_turn(UnoAction::Draw) {
        UnoOutcome::Drew { player, next } => {
            assert_eq!(player, mover);
            assert_ne!(next, mover);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(game.hand(&mover).map(<[_]>::len), Some(8));
}

#[test]
fn test_quit() {
    let mut game = Uno::new(table(3), UnoConfig::default(), 2).unwrap();
    match game.take_turn(UnoAction::Quit) {
        UnoOutcome::Left { next, .. } => assert!(next.is_some()),
        other => panic!("unexpected {other:?}"),
    }
    assert!(!game.is_over());

    match game.take_turn(UnoAction::Quit) {
        UnoOutcome::Left { next, .. } => assert!(next.is_none()),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(game.outcome(), Some(GameResult::Abandoned));
    assert_eq!(game.take_turn(UnoAction::Draw), UnoOutcome::Rejected(UnoRejection::GameOver));
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_ai_table_finishes() {
    let mut game = Uno::against_ai(Identity::user(1, "solo"), UnoConfig::default(), 77).unwrap();
    let Some(GameResult::Winner(winner)) = play_out(&mut game, 20_000) else {
        panic!("game did not finish");
    };
    assert_eq!(game.hand(&winner).map(<[_]>::len), Some(0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Every seeded table ends with exactly one player holding no cards.
    #[test]
    fn prop_games_end_with_empty_hand(seed in any::<u64>(), players in 2u64..6) {
        let mut game = Uno::new(table(players), UnoConfig::default(), seed).unwrap();
        let result = play_out(&mut game, 20_000);
        prop_assert!(matches!(result, Some(GameResult::Winner(_))));
        let empty = game.players().filter(|p| p.hand().is_empty()).count();
        prop_assert_eq!(empty, 1);
    }
}
