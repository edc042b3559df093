//! Card piles shared by the card games.
//!
//! ## Key Types
//!
//! - `Deck`: Owned, ordered pile with draw/return/shuffle
//! - `DeckPosition`: Where a returned card goes

pub mod deck;

pub use deck::{Deck, DeckPosition};
