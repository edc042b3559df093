//! Cards Against Humanity.
//!
//! A rotating judge reads a black card; everyone else answers with one or
//! more white cards from their hand. The judge picks a favourite and its
//! owner scores a point.
//!
//! ## Key Types
//!
//! - `BlackCard` / `WhiteCard`: Prompt and answer cards
//! - `CahContent`: Both decks as delivered by a `CardSource`
//! - `CardsAgainstHumanity`: The round state machine
//! - `Phase`: Dealing, collecting, judging or finished

pub mod cards;
pub mod session;

pub use cards::{sanitize, BlackCard, CahContent, WhiteCard};
pub use session::{
    CahEnd, CahPlayer, CardPicks, CardsAgainstHumanity, Departure, JudgeRejection, Judgement, Phase,
    RoundStart, SelectRejection, Selection, Submission,
};
