//! Uno.
//!
//! ## Key Types
//!
//! - `UnoCard`: Color plus face; wilds pick their color when played
//! - `Uno`: Session holding hands, deck, top card and turn direction
//! - `UnoAction` / `UnoOutcome`: One turn in, its resolution out

pub mod card;
pub mod session;

pub use card::{standard_deck, Color, Face, UnoCard};
pub use session::{CardEffect, Uno, UnoAction, UnoOutcome, UnoPlayer, UnoRejection};
