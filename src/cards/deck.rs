//! Owned deck of cards.
//!
//! A `Deck` is held by exactly one session. Sub-handlers borrow the session,
//! never the raw card list, so every draw and every return goes through
//! `draw`/`put` and exhaustion is always visible as `None`.
//!
//! Ordering: index 0 is the bottom, the last element is the top.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

/// Position for returning a card to a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckPosition {
    /// Next card to be drawn.
    Top,
    /// Last card to be drawn.
    Bottom,
    /// Insert at specific index (0 = bottom).
    Index(usize),
}

/// An ordered pile of cards.
///
/// ## Usage
///
/// ```
/// use minigames::cards::{Deck, DeckPosition};
/// use minigames::core::GameRng;
///
/// let mut deck = Deck::new(vec!["a", "b", "c"]);
/// deck.shuffle(&mut GameRng::new(1));
///
/// let card = deck.draw().unwrap();
/// deck.put(card, DeckPosition::Bottom);
/// assert_eq!(deck.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<C> Deck<C> {
    /// Create a deck in the given order (last element on top).
    pub fn new(cards: Vec<C>) -> Self {
        Self { cards }
    }

    /// Create a deck and shuffle it.
    pub fn shuffled(cards: Vec<C>, rng: &mut GameRng) -> Self {
        let mut deck = Self::new(cards);
        deck.shuffle(rng);
        deck
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck exhausted?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<C> {
        self.cards.pop()
    }

    /// Draw up to `count` cards from the top.
    pub fn draw_many(&mut self, count: usize) -> Vec<C> {
        let keep = self.cards.len().saturating_sub(count);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }

    /// Draw the card closest to the top that satisfies `pred`.
    pub fn draw_where(&mut self, mut pred: impl FnMut(&C) -> bool) -> Option<C> {
        let idx = self.cards.iter().rposition(|c| pred(c))?;
        Some(self.cards.remove(idx))
    }

    /// Return a card to the deck.
    pub fn put(&mut self, card: C, position: DeckPosition) {
        match position {
            DeckPosition::Top => self.cards.push(card),
            DeckPosition::Bottom => self.cards.insert(0, card),
            DeckPosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
            }
        }
    }

    /// Shuffle the whole deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::new(vec![10, 11, 12]);

        assert_eq!(deck.draw(), Some(12));
        assert_eq!(deck.draw(), Some(11));
        assert_eq!(deck.draw(), Some(10));
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_put_positions() {
        let mut deck = Deck::new(vec![10]);

        deck.put(11, DeckPosition::Bottom);
        deck.put(12, DeckPosition::Top);
        deck.put(13, DeckPosition::Index(1));
        deck.put(14, DeckPosition::Index(99));

        let order: Vec<_> = deck.iter().copied().collect();
        assert_eq!(order, vec![11, 13, 10, 12, 14]);
    }

    #[test]
    fn test_draw_many() {
        let mut deck = Deck::new(vec![1, 2, 3, 4]);

        assert_eq!(deck.draw_many(2), vec![4, 3]);
        assert_eq!(deck.draw_many(5), vec![2, 1]);
        assert!(deck.draw_many(1).is_empty());
    }

    #[test]
    fn test_draw_where_prefers_top() {
        let mut deck = Deck::new(vec![2, 4, 5, 6]);

        assert_eq!(deck.draw_where(|c| c % 2 == 0), Some(6));
        assert_eq!(deck.draw_where(|c| *c > 10), None);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_shuffle() {
        let before: Vec<u32> = (0..20).collect();
        let deck = Deck::shuffled(before.clone(), &mut GameRng::new(42));

        let mut after: Vec<_> = deck.iter().copied().collect();
        assert_ne!(before, after);

        after.sort_unstable();
        assert_eq!(before, after);
    }
}
