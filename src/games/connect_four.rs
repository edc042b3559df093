//! Connect Four on a 7x6 board.
//!
//! Two humans alternate turns, or one human plays the built-in AI. Against
//! the AI, the AI's reply is made inside the same `make_move` call as the
//! human's move.
//!
//! ## AI
//!
//! A two-ply heuristic rather than a full search:
//! 1. Scanning columns left to right, take the first column where the AI
//!    wins immediately or where the human would win next (block).
//! 2. Otherwise avoid "restricted" columns: columns where the AI's piece
//!    would let the human win by dropping on top of it.
//! 3. Pick uniformly among the remaining columns (any open column if all
//!    of them are restricted).

use crate::board::{Grid, MoveResult, Piece, Rejection};
use crate::core::{GameResult, GameRng, Identity};

/// Board width.
pub const WIDTH: usize = 7;

/// Board height.
pub const HEIGHT: usize = 6;

/// Pieces in a row needed to win.
pub const LINE: usize = 4;

const COLUMN_LABELS: [&str; WIDTH] = [":one:", ":two:", ":three:", ":four:", ":five:", ":six:", ":seven:"];

/// A Connect Four session.
#[derive(Clone, Debug)]
pub struct ConnectFour {
    challenger: Identity,
    opponent: Identity,
    board: Grid,
    challenger_turn: bool,
    forfeit: Option<Piece>,
    rng: GameRng,
}

impl ConnectFour {
    /// Start a game against the built-in AI. The challenger moves first.
    #[must_use]
    pub fn against_ai(challenger: Identity, seed: u64) -> Self {
        Self {
            challenger,
            opponent: Identity::ai(1),
            board: Grid::new(WIDTH, HEIGHT),
            challenger_turn: true,
            forfeit: None,
            rng: GameRng::new(seed),
        }
    }

    /// Start a game between two humans. A coin flip decides who starts.
    #[must_use]
    pub fn new(challenger: Identity, opponent: Identity, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let challenger_turn = rng.coin_flip();
        Self {
            challenger,
            opponent,
            board: Grid::new(WIDTH, HEIGHT),
            challenger_turn,
            forfeit: None,
            rng,
        }
    }

    #[must_use]
    pub fn challenger(&self) -> &Identity {
        &self.challenger
    }

    #[must_use]
    pub fn opponent(&self) -> &Identity {
        &self.opponent
    }

    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.board
    }

    #[must_use]
    pub fn is_against_ai(&self) -> bool {
        self.opponent.is_ai()
    }

    #[must_use]
    pub fn is_challenger_turn(&self) -> bool {
        self.challenger_turn
    }

    /// The player whose move it is.
    #[must_use]
    pub fn current_player(&self) -> &Identity {
        if self.challenger_turn {
            &self.challenger
        } else {
            &self.opponent
        }
    }

    /// Identity behind a piece colour.
    #[must_use]
    pub fn player_for(&self, piece: Piece) -> &Identity {
        match piece {
            Piece::Challenger => &self.challenger,
            Piece::Opponent => &self.opponent,
        }
    }

    /// Owner of a completed line of four, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Piece> {
        self.board.find_line(LINE)
    }

    fn status(&self) -> MoveResult {
        if let Some(piece) = self.winner() {
            MoveResult::Win(piece)
        } else if self.board.is_full() {
            MoveResult::Draw
        } else {
            MoveResult::Ongoing
        }
    }

    /// Drop the current player's piece into `column` (0-based).
    ///
    /// Against the AI, the AI answers before this returns unless the human
    /// already ended the game. A rejected move leaves the board untouched.
    pub fn make_move(&mut self, column: usize) -> MoveResult {
        if self.forfeit.is_some() || self.status().is_terminal() {
            return MoveResult::Rejected(Rejection::GameOver);
        }
        if column >= WIDTH {
            return MoveResult::Rejected(Rejection::OutOfRange);
        }
        if self.board.is_column_full(column) {
            return MoveResult::Rejected(Rejection::ColumnFull);
        }

        if self.is_against_ai() {
            self.board.add_piece(column, Piece::Challenger);
            if self.status() == MoveResult::Ongoing {
                if let Some(reply) = self.ai_column() {
                    log::debug!("connect four AI plays column {}", reply);
                    self.board.add_piece(reply, Piece::Opponent);
                }
            }
        } else {
            let piece = if self.challenger_turn { Piece::Challenger } else { Piece::Opponent };
            self.board.add_piece(column, piece);
            self.challenger_turn = !self.challenger_turn;
        }

        self.status()
    }

    /// Column the AI would play on the current board, `None` if the board
    /// is full.
    pub fn ai_column(&mut self) -> Option<usize> {
        let open = self.board.open_columns();
        if open.is_empty() {
            return None;
        }

        let mut restricted = Vec::new();
        for &column in &open {
            let mut ai_board = self.board.clone();
            ai_board.add_piece(column, Piece::Opponent);
            let mut human_board = self.board.clone();
            human_board.add_piece(column, Piece::Challenger);

            if ai_board.find_line(LINE) == Some(Piece::Opponent)
                || human_board.find_line(LINE) == Some(Piece::Challenger)
            {
                return Some(column);
            }

            if ai_board.add_piece(column, Piece::Challenger).is_some()
                && ai_board.find_line(LINE) == Some(Piece::Challenger)
            {
                restricted.push(column);
            }
        }

        let safe: Vec<usize> = open.iter().copied().filter(|c| !restricted.contains(c)).collect();
        let candidates = if safe.is_empty() { &open } else { &safe };
        self.rng.choose(candidates).copied()
    }

    /// Give up. In a two-human game the other player wins; against the AI
    /// the game just ends.
    pub fn quit(&mut self, who: &Identity) -> GameResult {
        let piece = if *who == self.challenger { Piece::Challenger } else { Piece::Opponent };
        self.forfeit = Some(piece);
        if self.is_against_ai() {
            GameResult::Abandoned
        } else {
            GameResult::Winner(self.player_for(piece.other()).clone())
        }
    }

    /// Terminal result, `None` while the game is still going.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if let Some(quitter) = self.forfeit {
            return Some(if self.is_against_ai() {
                GameResult::Abandoned
            } else {
                GameResult::Winner(self.player_for(quitter.other()).clone())
            });
        }
        match self.status() {
            MoveResult::Win(piece) => Some(GameResult::Winner(self.player_for(piece).clone())),
            MoveResult::Draw => Some(GameResult::Draw),
            _ => None,
        }
    }

    /// Emoji rendering: a numbered header, then one line per row.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for label in COLUMN_LABELS {
            out.push_str(label);
            out.push(' ');
        }
        out.push('\n');

        for row in self.board.rows() {
            for cell in row {
                out.push_str(match cell {
                    None => ":black_circle: ",
                    Some(Piece::Opponent) => ":red_circle: ",
                    Some(Piece::Challenger) => ":large_blue_circle: ",
                });
            }
            out.push('\n');
        }
        out
    }
}
