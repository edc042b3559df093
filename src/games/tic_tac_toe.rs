//! Tic-Tac-Toe on a 3x3 board.
//!
//! Spots are numbered 0..9 in reading order. Win detection is the same
//! grid line scan Connect Four uses, with a window of three.
//!
//! The AI only ever blocks: it looks for a line where the human holds two
//! spots and the third is empty. How many line families it checks depends
//! on the difficulty; without a block it picks a random empty spot.

use serde::{Deserialize, Serialize};

use crate::board::{count_pieces, Cell, Grid, MoveResult, Piece, Rejection};
use crate::core::{GameResult, GameRng, Identity};

/// Board side length.
pub const SIZE: usize = 3;

const SPOT_LABELS: [&str; SIZE * SIZE] = [
    ":one:", ":two:", ":three:", ":four:", ":five:", ":six:", ":seven:", ":eight:", ":nine:",
];

/// How hard the AI tries to block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Blocks rows.
    Easy,
    /// Blocks columns, then rows.
    #[default]
    Medium,
    /// Blocks diagonals, then columns, then rows.
    Hard,
}

type Line = [usize; SIZE];

const ROWS: [Line; SIZE] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
const COLUMNS: [Line; SIZE] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];
const DIAGONALS: [Line; 2] = [[0, 4, 8], [2, 4, 6]];

const EASY_LINES: &[&[Line]] = &[&ROWS];
const MEDIUM_LINES: &[&[Line]] = &[&COLUMNS, &ROWS];
const HARD_LINES: &[&[Line]] = &[&DIAGONALS, &COLUMNS, &ROWS];

impl Difficulty {
    /// Line families checked for a block, in priority order.
    fn families(self) -> &'static [&'static [Line]] {
        match self {
            Self::Easy => EASY_LINES,
            Self::Medium => MEDIUM_LINES,
            Self::Hard => HARD_LINES,
        }
    }
}

/// A Tic-Tac-Toe session.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    challenger: Identity,
    opponent: Identity,
    difficulty: Difficulty,
    board: Grid,
    challenger_turn: bool,
    forfeit: Option<Piece>,
    rng: GameRng,
}

impl TicTacToe {
    /// Start a game against the AI. The challenger moves first.
    #[must_use]
    pub fn against_ai(challenger: Identity, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            challenger,
            opponent: Identity::ai(1),
            difficulty,
            board: Grid::new(SIZE, SIZE),
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
            difficulty: Difficulty::default(),
            board: Grid::new(SIZE, SIZE),
            challenger_turn,
            forfeit: None,
            rng,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.board
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_against_ai(&self) -> bool {
        self.opponent.is_ai()
    }

    #[must_use]
    pub fn current_player(&self) -> &Identity {
        if self.challenger_turn {
            &self.challenger
        } else {
            &self.opponent
        }
    }

    #[must_use]
    pub fn player_for(&self, piece: Piece) -> &Identity {
        match piece {
            Piece::Challenger => &self.challenger,
            Piece::Opponent => &self.opponent,
        }
    }

    fn cell(&self, spot: usize) -> Cell {
        self.board.get(spot / SIZE, spot % SIZE)
    }

    fn status(&self) -> MoveResult {
        if let Some(piece) = self.board.find_line(SIZE) {
            MoveResult::Win(piece)
        } else if self.board.is_full() {
            MoveResult::Draw
        } else {
            MoveResult::Ongoing
        }
    }

    /// Number of empty spots.
    #[must_use]
    pub fn spots_left(&self) -> usize {
        self.board.empty_cells().len()
    }

    /// Claim `spot` (0..9) for the current player.
    ///
    /// Against the AI, the AI answers before this returns unless the human
    /// already ended the game.
    pub fn make_move(&mut self, spot: usize) -> MoveResult {
        if self.forfeit.is_some() || self.status().is_terminal() {
            return MoveResult::Rejected(Rejection::GameOver);
        }
        if spot >= SIZE * SIZE {
            return MoveResult::Rejected(Rejection::OutOfRange);
        }
        if self.cell(spot).is_some() {
            return MoveResult::Rejected(Rejection::SpotTaken);
        }

        if self.is_against_ai() {
            self.board.place(spot / SIZE, spot % SIZE, Piece::Challenger);
            if self.status() == MoveResult::Ongoing {
                if let Some(reply) = self.ai_spot() {
                    log::debug!("tic-tac-toe AI takes spot {}", reply);
                    self.board.place(reply / SIZE, reply % SIZE, Piece::Opponent);
                }
            }
        } else {
            let piece = if self.challenger_turn { Piece::Challenger } else { Piece::Opponent };
            self.board.place(spot / SIZE, spot % SIZE, piece);
            self.challenger_turn = !self.challenger_turn;
        }

        self.status()
    }

    /// Spot the AI would take, `None` on a full board.
    pub fn ai_spot(&mut self) -> Option<usize> {
        for family in self.difficulty.families() {
            for line in family.iter() {
                if let Some(spot) = self.blocking_spot(line) {
                    return Some(spot);
                }
            }
        }

        let empty: Vec<usize> = (0..SIZE * SIZE).filter(|&s| self.cell(s).is_none()).collect();
        self.rng.choose(&empty).copied()
    }

    /// Empty spot of a line where the human holds the other two.
    fn blocking_spot(&self, line: &Line) -> Option<usize> {
        let cells: Vec<Cell> = line.iter().map(|&s| self.cell(s)).collect();
        if count_pieces(&cells, Some(Piece::Challenger)) == SIZE - 1 && count_pieces(&cells, None) == 1 {
            line.iter().copied().find(|&s| self.cell(s).is_none())
        } else {
            None
        }
    }

    /// Give up; see `ConnectFour::quit`.
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

    /// Emoji rendering: numbers for open spots, `:x:` for the challenger,
    /// `:o:` for the opponent.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for spot in 0..SIZE * SIZE {
            out.push_str(match self.cell(spot) {
                None => SPOT_LABELS[spot],
                Some(Piece::Opponent) => ":o:",
                Some(Piece::Challenger) => ":x:",
            });
            out.push(' ');
            if (spot + 1) % SIZE == 0 {
                out.push('\n');
            }
        }
        out
    }
}
