//! Core types shared by every engine: identities, seating, RNG,
//! configuration and terminal results.
//!
//! Engines never reach into each other; they only share what lives here.

pub mod player;
pub mod rng;
pub mod config;
pub mod outcome;

pub use player::{Direction, Identity, PlayerId, Roster, Seat, SeatKey};
pub use rng::GameRng;
pub use config::{CahConfig, HangmanConfig, LifeConfig, ScrambleConfig, UnoConfig};
pub use outcome::{GameResult, PlayerResult, Standing};
