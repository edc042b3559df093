//! Player identities and seating order.
//!
//! ## Identity
//!
//! An opaque handle for whoever occupies a seat: either a chat user
//! (stable `PlayerId` plus a display name) or a synthetic AI seat that
//! renders as `AI n`. Engines only ever compare identities and display them.
//!
//! ## Roster
//!
//! The ordered list of seats in a multi-player session, with a cursor on the
//! seat whose turn it is (or who judges) and a turn direction. Removing a
//! seat keeps the cursor on the seat that would have acted next.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Stable external key of a chat user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<@{}>", self.0)
    }
}

/// Whoever occupies a seat.
///
/// Equality and hashing go through [`Identity::key`], so a user who renames
/// themselves mid-game still owns their seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Identity {
    /// A real chat user.
    User { id: PlayerId, name: String },
    /// A built-in AI seat, numbered from 1.
    Ai(u8),
}

impl Identity {
    /// Create a user identity.
    pub fn user(id: u64, name: impl Into<String>) -> Self {
        Self::User {
            id: PlayerId(id),
            name: name.into(),
        }
    }

    /// Create an AI identity.
    #[must_use]
    pub const fn ai(number: u8) -> Self {
        Self::Ai(number)
    }

    /// Is this seat played by the built-in AI?
    #[must_use]
    pub const fn is_ai(&self) -> bool {
        matches!(self, Self::Ai(_))
    }

    /// External key, `None` for AI seats.
    #[must_use]
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            Self::User { id, .. } => Some(*id),
            Self::Ai(_) => None,
        }
    }

    /// The stable part of the identity, ignoring display names.
    #[must_use]
    pub fn key(&self) -> SeatKey {
        match self {
            Self::User { id, .. } => SeatKey::User(*id),
            Self::Ai(n) => SeatKey::Ai(*n),
        }
    }
}

/// Equality key of an [`Identity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeatKey {
    User(PlayerId),
    Ai(u8),
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Identity {}

impl std::hash::Hash for Identity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User { name, .. } => f.write_str(name),
            Self::Ai(n) => write!(f, "AI {}", n),
        }
    }
}

/// Anything that sits at a roster seat.
pub trait Seat {
    fn identity(&self) -> &Identity;
}

impl Seat for Identity {
    fn identity(&self) -> &Identity {
        self
    }
}

/// Turn direction around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Seat order (index + 1).
    Forward,
    /// Reverse seat order (index - 1).
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Ordered seats with a turn cursor.
///
/// ## Example
///
/// ```
/// use minigames::core::{Identity, Roster};
///
/// let mut roster = Roster::new(vec![Identity::ai(1), Identity::ai(2), Identity::ai(3)]);
/// assert_eq!(roster.current(), &Identity::ai(1));
///
/// roster.advance(1);
/// assert_eq!(roster.current(), &Identity::ai(2));
///
/// roster.reverse();
/// roster.advance(2);
/// assert_eq!(roster.current(), &Identity::ai(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster<P> {
    seats: Vec<P>,
    current: usize,
    direction: Direction,
}

impl<P> Roster<P> {
    /// Create a roster with the cursor on the first seat.
    pub fn new(seats: Vec<P>) -> Self {
        Self {
            seats,
            current: 0,
            direction: Direction::Forward,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Are all seats gone?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Index of the seat under the cursor.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Move the cursor to a seat.
    ///
    /// Out-of-range indices wrap around.
    pub fn set_current(&mut self, index: usize) {
        if !self.seats.is_empty() {
            self.current = index % self.seats.len();
        }
    }

    /// Seat under the cursor.
    ///
    /// Panics if the roster is empty.
    #[must_use]
    pub fn current(&self) -> &P {
        &self.seats[self.current]
    }

    /// Mutable seat under the cursor.
    pub fn current_mut(&mut self) -> &mut P {
        &mut self.seats[self.current]
    }

    /// Current turn direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flip the turn direction.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// Index of the seat `steps` seats away from the cursor in the
    /// current direction.
    #[must_use]
    pub fn peek(&self, steps: usize) -> usize {
        let len = self.seats.len();
        if len == 0 {
            return 0;
        }
        let steps = steps % len;
        match self.direction {
            Direction::Forward => (self.current + steps) % len,
            Direction::Backward => (self.current + len - steps) % len,
        }
    }

    /// Move the cursor `steps` seats in the current direction.
    pub fn advance(&mut self, steps: usize) {
        self.current = self.peek(steps);
    }

    /// Remove a seat.
    ///
    /// The cursor stays on the same player when someone else leaves. When the
    /// player under the cursor leaves, the cursor lands on the seat that would
    /// have acted next in the current direction.
    pub fn remove(&mut self, index: usize) -> P {
        let removed = self.seats.remove(index);
        let len = self.seats.len();
        if len == 0 {
            self.current = 0;
            return removed;
        }

        if index < self.current {
            self.current -= 1;
        } else if index == self.current && self.direction == Direction::Backward {
            self.current = (self.current + len - 1) % len;
        }
        if self.current >= len {
            self.current = 0;
        }
        removed
    }

    /// Get a seat by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&P> {
        self.seats.get(index)
    }

    /// Get a mutable seat by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        self.seats.get_mut(index)
    }

    /// Iterate over seats in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.seats.iter()
    }

    /// Iterate mutably over seats in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut P> {
        self.seats.iter_mut()
    }

    /// Seats as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[P] {
        &self.seats
    }
}

impl<P: Seat> Roster<P> {
    /// Seat index of an identity.
    #[must_use]
    pub fn position(&self, who: &Identity) -> Option<usize> {
        self.seats.iter().position(|p| p.identity() == who)
    }

    /// Find a seat by identity.
    #[must_use]
    pub fn find(&self, who: &Identity) -> Option<&P> {
        self.seats.iter().find(|p| p.identity() == who)
    }

    /// Find a mutable seat by identity.
    pub fn find_mut(&mut self, who: &Identity) -> Option<&mut P> {
        self.seats.iter_mut().find(|p| p.identity() == who)
    }

    /// Identity of the seat under the cursor.
    #[must_use]
    pub fn current_identity(&self) -> &Identity {
        self.current().identity()
    }
}

impl<P> Index<usize> for Roster<P> {
    type Output = P;

    fn index(&self, index: usize) -> &Self::Output {
        &self.seats[index]
    }
}

impl<P> IndexMut<usize> for Roster<P> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.seats[index]
    }
}

/// Reject rosters that seat the same identity twice.
pub(crate) fn first_duplicate(players: &[Identity]) -> Option<&Identity> {
    let mut seen = FxHashSet::default();
    players.iter().find(|p| !seen.insert(p.key()))
}
