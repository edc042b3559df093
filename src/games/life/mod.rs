//! The Game of Life.
//!
//! Players spin a 1-10 wheel and travel a branching board from college or
//! their first job to retirement, collecting salaries, houses, pets and
//! children along the way. The richest player after final scoring wins.
//!
//! ## Key Types
//!
//! - `Board`: Space graph with forks and stop spaces
//! - `LifeContent`: Career, house, pet and action decks plus the board
//! - `LifePlayer`: Cash, loans, career and everything else a player owns
//! - `LifeDecider`: Choices a human seat is asked for; `AiPolicy` answers for AI seats
//! - `GameOfLife`: The session; `setup` once, then `take_turn` until it ends
//! - `TurnLog`: Structured events of one turn, printable line by line

pub mod board;
pub mod cards;
pub mod content;
pub mod decide;
pub mod player;
pub mod session;
pub mod turn;

pub use board::{Board, BoardSpace, Landing, Next, SpaceId, SpaceKind};
pub use cards::{
    tier_payout, ActionCard, ActionEffect, CareerCard, HouseCard, PetAction, PetCard, SpinColor, SpinTier,
};
pub use content::LifeContent;
pub use decide::{AiPolicy, HouseAction, LifeDecider, StartChoice};
pub use player::LifePlayer;
pub use session::{GameOfLife, LifePhase, TurnAction, TurnOutcome, TurnReport};
pub use turn::{money, LifeEvent, TurnLog};
