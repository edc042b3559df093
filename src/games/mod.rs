//! Game engines.
//!
//! Each engine is a self-contained session value: construct it, feed it
//! moves, read back results. None of them render chat messages or block on
//! input.
//!
//! - `connect_four` / `tic_tac_toe`: Two-seat grid games, optional AI opponent
//! - `hangman` / `scramble`: Single-player word games
//! - `cah`: Cards Against Humanity
//! - `uno`: Uno against humans and AI seats
//! - `life`: The Game of Life

pub mod cah;
pub mod connect_four;
pub mod hangman;
pub mod life;
pub mod scramble;
pub mod tic_tac_toe;
pub mod uno;

pub use connect_four::ConnectFour;
pub use hangman::{Guess, GuessRejection, Hangman};
pub use scramble::{scramble_word, Scramble, ScrambleDifficulty, ScrambleGuess};
pub use tic_tac_toe::{Difficulty, TicTacToe};
