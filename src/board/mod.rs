//! Grid primitives and move results for the line-up games
//! (Connect Four, Tic-Tac-Toe).
//!
//! ## Key Types
//!
//! - `Grid`: Fixed-size board with gravity drops and line detection
//! - `Piece`: Challenger or opponent
//! - `MoveResult`: What a move did
//! - `Rejection`: Why a move was refused (state untouched)

pub mod grid;

pub use grid::{count_pieces, line_owner, lines_equal, Cell, Grid, Piece};

use serde::{Deserialize, Serialize};

/// Why a move was refused. The board is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Connect Four column has no empty row.
    ColumnFull,
    /// Tic-Tac-Toe spot already occupied.
    SpotTaken,
    /// Column or spot outside the board.
    OutOfRange,
    /// The game is already over.
    GameOver,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::ColumnFull => "that column is full",
            Self::SpotTaken => "that spot is taken",
            Self::OutOfRange => "that is not on the board",
            Self::GameOver => "the game is over",
        };
        f.write_str(text)
    }
}

/// Result of one call to `make_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// Nobody has won and the board still has room.
    Ongoing,
    /// The board filled up with no winner.
    Draw,
    /// A line was completed.
    Win(Piece),
    /// The move was refused.
    Rejected(Rejection),
}

impl MoveResult {
    /// Did this move end the game?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Draw | Self::Win(_))
    }
}
