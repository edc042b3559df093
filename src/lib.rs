//! # chat-minigames
//!
//! Turn-based game engines for a chat bot: Connect Four, Tic-Tac-Toe,
//! Hangman, Scramble, Cards Against Humanity, Uno and the Game of Life.
//!
//! ## Design Principles
//!
//! 1. **Engines, not bots**: Sessions take moves and return structured
//!    results. Rendering, prompting and timeouts belong to the host.
//!
//! 2. **Rejections are values**: An illegal move comes back as a
//!    `Rejected(..)` variant and leaves the session untouched. `Result`
//!    errors are reserved for sessions that cannot start at all.
//!
//! 3. **Seeded randomness**: Every session owns a `GameRng` built from a
//!    seed, so shuffles, spins and AI choices replay exactly.
//!
//! ## Modules
//!
//! - `core`: Identities, seating, RNG, per-game configuration, results
//! - `board`: Grid and line detection for the line-up games
//! - `cards`: Generic deck with draw and return
//! - `content`: Word and card sources supplied by the host
//! - `games`: The engines themselves
//! - `error`: Content and session construction errors

pub mod board;
pub mod cards;
pub mod content;
pub mod core;
pub mod error;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CahConfig, Direction, GameResult, GameRng, HangmanConfig, Identity, LifeConfig, PlayerId, PlayerResult,
    Roster, ScrambleConfig, Seat, Standing, UnoConfig,
};

pub use crate::board::{Grid, MoveResult, Piece, Rejection};

pub use crate::cards::{Deck, DeckPosition};

pub use crate::content::{CardSource, StaticContent, WordEntry, WordSource};

pub use crate::error::{ContentError, SessionError};

pub use crate::games::cah::CardsAgainstHumanity;
pub use crate::games::life::GameOfLife;
pub use crate::games::uno::Uno;
pub use crate::games::{ConnectFour, Hangman, Scramble, TicTacToe};
