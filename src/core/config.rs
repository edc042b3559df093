//! Game configuration types.
//!
//! Every rule constant an engine uses lives in one of these structs:
//! - `HangmanConfig`: failure limit
//! - `ScrambleConfig`: hint request phrases
//! - `CahConfig`: hand size, winning score, minimum table size
//! - `UnoConfig`: starting hand, minimum table size, AI seat count
//! - `LifeConfig`: every cash amount on the Game of Life board
//!
//! `Default` reproduces the house rules the bot has always played with.
//! All configs deserialize from JSON with missing fields falling back to
//! those defaults, so a host can override a single value.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Hangman rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HangmanConfig {
    /// Wrong guesses allowed before the game is lost.
    pub max_fails: u8,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self { max_fails: 8 }
    }
}

impl HangmanConfig {
    /// Set the failure limit.
    #[must_use]
    pub fn with_max_fails(mut self, max_fails: u8) -> Self {
        assert!(max_fails > 0, "Must allow at least 1 failure");
        self.max_fails = max_fails;
        self
    }
}

/// Scramble rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    /// Guesses that are treated as a request for a hint (lowercase).
    pub hint_phrases: Vec<String>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            hint_phrases: ["hint", "hint me", "i need a hint", "hint please"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl ScrambleConfig {
    /// Add another hint request phrase.
    #[must_use]
    pub fn with_hint_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.hint_phrases.push(phrase.into().to_lowercase());
        self
    }
}

/// Cards Against Humanity rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CahConfig {
    /// White cards a player holds between rounds.
    pub hand_size: usize,
    /// Round wins needed to take the game.
    pub winning_score: u32,
    /// Fewer players than this ends the game.
    pub min_players: usize,
}

impl Default for CahConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            winning_score: 7,
            min_players: 3,
        }
    }
}

impl CahConfig {
    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        assert!(hand_size > 0, "Hand must hold at least 1 card");
        self.hand_size = hand_size;
        self
    }

    /// Set the round wins needed to take the game.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        assert!(score > 0, "Winning score must be positive");
        self.winning_score = score;
        self
    }
}

/// Uno rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnoConfig {
    /// Cards dealt to each player.
    pub starting_hand: usize,
    /// Fewer players than this ends the game.
    pub min_players: usize,
    /// AI seats added by `Uno::against_ai`.
    pub ai_opponents: u8,
}

impl Default for UnoConfig {
    fn default() -> Self {
        Self {
            starting_hand: 7,
            min_players: 2,
            ai_opponents: 4,
        }
    }
}

impl UnoConfig {
    /// Set the number of cards dealt to each player.
    #[must_use]
    pub fn with_starting_hand(mut self, cards: usize) -> Self {
        assert!(cards > 0, "Must deal at least 1 card");
        self.starting_hand = cards;
        self
    }

    /// Set the number of AI seats for a solo game.
    #[must_use]
    pub fn with_ai_opponents(mut self, count: u8) -> Self {
        assert!(count > 0, "Must have at least 1 AI opponent");
        self.ai_opponents = count;
        self
    }
}

/// Game of Life rules. All amounts are in dollars.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub starting_cash: i64,
    pub college_tuition: i64,
    pub night_school_tuition: i64,
    /// Cash received per loan.
    pub loan_amount: i64,
    /// Deducted per outstanding loan at the end of the game.
    pub loan_payback: i64,
    /// Extra cash for landing exactly on a payday space.
    pub payday_bonus: i64,
    pub spin_to_win_prize: i64,
    /// Slots the spinning player claims in spin to win; everyone else claims one.
    pub spin_to_win_slots: usize,
    /// End-of-game cash per action card and per pet card.
    pub card_bonus: i64,
    /// End-of-game cash per child.
    pub child_bonus: i64,
    /// Retirement pays `retirement_base * (retirement_places - already_retired)`.
    pub retirement_base: i64,
    pub retirement_places: i64,
    /// Wedding gift from every other player on a black spin.
    pub wedding_gift_black: i64,
    /// Wedding gift from every other player on a red spin.
    pub wedding_gift_red: i64,
    /// Hitting another player's bonus number pays them `salary / bonus_divisor`.
    pub bonus_divisor: i64,
    pub starting_pets: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            starting_cash: 200_000,
            college_tuition: 100_000,
            night_school_tuition: 100_000,
            loan_amount: 50_000,
            loan_payback: 60_000,
            payday_bonus: 100_000,
            spin_to_win_prize: 200_000,
            spin_to_win_slots: 2,
            card_bonus: 100_000,
            child_bonus: 50_000,
            retirement_base: 100_000,
            retirement_places: 5,
            wedding_gift_black: 100_000,
            wedding_gift_red: 50_000,
            bonus_divisor: 10,
            starting_pets: 1,
        }
    }
}

impl LifeConfig {
    /// Set the starting cash.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the loan size and the end-of-game payback per loan.
    #[must_use]
    pub fn with_loans(mut self, amount: i64, payback: i64) -> Self {
        assert!(amount > 0, "Loan amount must be positive");
        self.loan_amount = amount;
        self.loan_payback = payback;
        self
    }

    /// Set the end-of-game card and child bonuses.
    #[must_use]
    pub fn with_end_bonuses(mut self, card_bonus: i64, child_bonus: i64) -> Self {
        self.card_bonus = card_bonus;
        self.child_bonus = child_bonus;
        self
    }

    /// Loans needed to cover `price` with `cash` on hand.
    #[must_use]
    pub fn loans_needed(&self, price: i64, cash: i64) -> u32 {
        if price <= cash {
            return 0;
        }
        let short = price - cash;
        let amount = self.loan_amount.max(1);
        u32::try_from((short + amount - 1) / amount).unwrap_or(u32::MAX)
    }

    /// Check the values `with_*` would have asserted, for configs read from JSON.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.loan_amount <= 0 {
            return Err(SessionError::InvalidConfig("loan amount must be positive"));
        }
        if self.bonus_divisor <= 0 {
            return Err(SessionError::InvalidConfig("bonus divisor must be positive"));
        }
        Ok(())
    }

    /// Retirement payout for the player who retires after `already_retired` others.
    #[must_use]
    pub fn retirement_payout(&self, already_retired: usize) -> i64 {
        let place = i64::try_from(already_retired).unwrap_or(i64::MAX);
        (self.retirement_base * (self.retirement_places - place)).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(HangmanConfig::default().max_fails, 8);
        assert_eq!(CahConfig::default().winning_score, 7);
        assert_eq!(CahConfig::default().min_players, 3);
        assert_eq!(UnoConfig::default().starting_hand, 7);
        assert_eq!(LifeConfig::default().starting_cash, 200_000);
        assert_eq!(ScrambleConfig::default().hint_phrases.len(), 4);
    }

    #[test]
    fn test_builders() {
        let cah = CahConfig::default().with_hand_size(10).with_winning_score(3);
        assert_eq!(cah.hand_size, 10);
        assert_eq!(cah.winning_score, 3);

        let scramble = ScrambleConfig::default().with_hint_phrase("HELP");
        assert!(scramble.hint_phrases.contains(&"help".to_string()));
    }

    #[test]
    #[should_panic(expected = "Must allow at least 1 failure")]
    fn test_hangman_zero_fails() {
        let _ = HangmanConfig::default().with_max_fails(0);
    }

    #[test]
    fn test_loans_needed_rounds_up() {
        let config = LifeConfig::default();
        assert_eq!(config.loans_needed(100_000, 200_000), 0);
        assert_eq!(config.loans_needed(250_000, 200_000), 1);
        assert_eq!(config.loans_needed(300_000, 200_000), 2);
        assert_eq!(config.loans_needed(300_001, 200_000), 3);
    }

    #[test]
    fn test_retirement_payout() {
        let config = LifeConfig::default();
        assert_eq!(config.retirement_payout(0), 500_000);
        assert_eq!(config.retirement_payout(4), 100_000);
        assert_eq!(config.retirement_payout(7), 0);
    }

    #[test]
    fn test_zero_loan_amount_from_json() {
        let config: LifeConfig = serde_json::from_str(r#"{"loan_amount": 0}"#).unwrap();
        assert_eq!(config.loans_needed(100, 10), 90);
        assert!(matches!(config.validate(), Err(SessionError::InvalidConfig(_))));
        assert!(LifeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LifeConfig = serde_json::from_str(r#"{"starting_cash": 10}"#).unwrap();
        assert_eq!(config.starting_cash, 10);
        assert_eq!(config.loan_amount, 50_000);
    }
}
