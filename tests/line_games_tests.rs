//! Connect Four and Tic-Tac-Toe end-to-end tests.
//!
//! These drive whole sessions through `make_move` and check the line
//! detection against a brute-force scan.

use minigames::board::{Grid, MoveResult, Piece, Rejection};
use minigames::core::{GameResult, Identity};
use minigames::games::{ConnectFour, Difficulty, TicTacToe};
use proptest::prelude::*;

fn alice() -> Identity {
    Identity::user(1, "alice")
}

fn bob() -> Identity {
    Identity::user(2, "bob")
}

/// Every line of `length` equal pieces, found the slow way.
fn brute_force_owners(grid: &Grid, length: usize) -> Vec<Piece> {
    let mut owners = Vec::new();
    let (h, w) = (grid.height() as isize, grid.width() as isize);
    for row in 0..h {
        for col in 0..w {
            for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                let cells: Option<Vec<_>> = (0..length as isize)
                    .map(|i| {
                        let (r, c) = (row + dr * i, col + dc * i);
                        (r >= 0 && r < h && c >= 0 && c < w).then(|| grid.get(r as usize, c as usize))
                    })
                    .collect();
                if let Some(cells) = cells {
                    if let Some(Some(first)) = cells.first() {
                        if cells.iter().all(|c| *c == Some(*first)) {
                            owners.push(*first);
                        }
                    }
                }
            }
        }
    }
    owners
}

// =============================================================================
// Connect Four
// =============================================================================

/// Two humans stacking one column each: whoever starts wins on their fourth drop.
#[test]
fn test_connect_four_vertical_win() {
    let mut game = ConnectFour::new(alice(), bob(), 9);
    let starter = game.current_player().clone();
    let starter_piece = if game.is_challenger_turn() { Piece::Challenger } else { Piece::Opponent };

    for _ in 0..3 {
        assert_eq!(game.make_move(0), MoveResult::Ongoing);
        assert_eq!(game.make_move(1), MoveResult::Ongoing);
    }
    assert_eq!(game.make_move(0), MoveResult::Win(starter_piece));
    assert_eq!(game.outcome(), Some(GameResult::Winner(starter)));
    assert_eq!(game.make_move(2), MoveResult::Rejected(Rejection::GameOver));
}

/// Against the AI, one call places the human piece and exactly one reply.
#[test]
fn test_connect_four_ai_opening() {
    let mut game = ConnectFour::against_ai(alice(), 21);
    assert_eq!(game.make_move(3), MoveResult::Ongoing);
    assert_eq!(game.board().get(5, 3), Some(Piece::Challenger));

    let pieces: Vec<Piece> = game.board().rows().flatten().flatten().copied().collect();
    assert_eq!(pieces.iter().filter(|p| **p == Piece::Opponent).count(), 1);
    assert_eq!(pieces.len(), 2);
}

/// A full column is refused and the turn does not pass.
#[test]
fn test_connect_four_full_column() {
    let mut game = ConnectFour::new(alice(), bob(), 3);
    // alternate pieces so nobody lines up vertically
    for _ in 0..6 {
        assert_eq!(game.make_move(6), MoveResult::Ongoing);
    }
    let mover = game.current_player().clone();
    assert_eq!(game.make_move(6), MoveResult::Rejected(Rejection::ColumnFull));
    assert_eq!(game.current_player(), &mover);
    assert_eq!(game.make_move(7), MoveResult::Rejected(Rejection::OutOfRange));
}

/// Stacking one column against the AI never wins: it always blocks the fourth.
#[test]
fn test_connect_four_ai_blocks_vertical() {
    for seed in 0..20 {
        let mut game = ConnectFour::against_ai(alice(), seed);
        loop {
            match game.make_move(3) {
                MoveResult::Ongoing => continue,
                MoveResult::Win(piece) => {
                    assert_eq!(piece, Piece::Opponent, "seed {seed}");
                    break;
                }
                MoveResult::Draw | MoveResult::Rejected(_) => break,
            }
        }
        assert_ne!(game.outcome(), Some(GameResult::Winner(alice())), "seed {seed}");
    }
}

/// Quitting hands a two-human game to the other player and abandons an AI game.
#[test]
fn test_connect_four_quit() {
    let mut game = ConnectFour::new(alice(), bob(), 1);
    assert_eq!(game.quit(&alice()), GameResult::Winner(bob()));
    assert_eq!(game.outcome(), Some(GameResult::Winner(bob())));

    let mut game = ConnectFour::against_ai(alice(), 1);
    assert_eq!(game.quit(&alice()), GameResult::Abandoned);
    assert_eq!(game.make_move(0), MoveResult::Rejected(Rejection::GameOver));
}

// =============================================================================
// Tic-Tac-Toe
// =============================================================================

/// Whatever the AI's opening reply, it blocks the human's first two-in-a-row.
#[test]
fn test_tic_tac_toe_ai_blocks() {
    const LINES_THROUGH_ZERO: [[usize; 3]; 3] = [[0, 1, 2], [0, 3, 6], [0, 4, 8]];

    for seed in 0..20 {
        let mut game = TicTacToe::against_ai(alice(), Difficulty::Hard, seed);
        assert_eq!(game.make_move(0), MoveResult::Ongoing);

        let line = LINES_THROUGH_ZERO
            .iter()
            .find(|line| line[1..].iter().all(|&s| game.board().get(s / 3, s % 3).is_none()))
            .unwrap();
        game.make_move(line[1]);
        assert_eq!(game.board().get(line[2] / 3, line[2] % 3), Some(Piece::Opponent), "seed {seed}");
    }
}

/// A cat's game fills the board with no winner.
#[test]
fn test_tic_tac_toe_draw() {
    let mut game = TicTacToe::new(alice(), bob(), 4);
    let first = game.current_player().clone();

    // X O X / X O O / O X X, with X moving first
    for spot in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert_eq!(game.make_move(spot), MoveResult::Ongoing);
    }
    assert_eq!(game.make_move(8), MoveResult::Draw);
    assert_eq!(game.outcome(), Some(GameResult::Draw));
    assert_eq!(game.spots_left(), 0);
    assert!(first == alice() || first == bob());
}

#[test]
fn test_tic_tac_toe_spot_taken() {
    let mut game = TicTacToe::new(alice(), bob(), 4);
    game.make_move(4);
    assert_eq!(game.make_move(4), MoveResult::Rejected(Rejection::SpotTaken));
    assert_eq!(game.make_move(9), MoveResult::Rejected(Rejection::OutOfRange));
}

// =============================================================================
// Line detection properties
// =============================================================================

proptest! {
    /// `find_line` reports a line exactly when one exists, and its owner
    /// really holds one.
    #[test]
    fn prop_find_line_matches_brute_force(drops in prop::collection::vec((0usize..7, any::<bool>()), 0..42)) {
        let mut grid = Grid::new(7, 6);
        for (col, challenger) in drops {
            let piece = if challenger { Piece::Challenger } else { Piece::Opponent };
            grid.add_piece(col, piece);
        }

        let owners = brute_force_owners(&grid, 4);
        match grid.find_line(4) {
            Some(owner) => prop_assert!(owners.contains(&owner)),
            None => prop_assert!(owners.is_empty()),
        }
    }

    /// Pieces always settle on the lowest empty row.
    #[test]
    fn prop_gravity(cols in prop::collection::vec(0usize..7, 0..60)) {
        let mut grid = Grid::new(7, 6);
        for col in cols {
            grid.add_piece(col, Piece::Challenger);
        }
        for col in 0..7 {
            for row in 1..6 {
                if grid.get(row - 1, col).is_some() {
                    prop_assert!(grid.get(row, col).is_some());
                }
            }
        }
    }
}
