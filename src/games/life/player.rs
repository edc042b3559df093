//! A Game of Life player's ledger.

use serde::{Deserialize, Serialize};

use super::board::SpaceId;
use super::cards::{CareerCard, HouseCard};
use crate::core::{Identity, LifeConfig, Seat};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePlayer {
    identity: Identity,
    pub(crate) space: SpaceId,
    pub(crate) cash: i64,
    pub(crate) loans: u32,
    pub(crate) career: Option<CareerCard>,
    pub(crate) college: bool,
    pub(crate) married: bool,
    pub(crate) babies: u32,
    pub(crate) pets: u32,
    pub(crate) houses: Vec<HouseCard>,
    pub(crate) action_cards: u32,
    pub(crate) pet_cards: u32,
    pub(crate) retired: bool,
    /// Take the next fork's opt-in side.
    pub(crate) take_branch: bool,
}

impl LifePlayer {
    pub(crate) fn new(identity: Identity, config: &LifeConfig, start: SpaceId) -> Self {
        Self {
            identity,
            space: start,
            cash: config.starting_cash,
            loans: 0,
            career: None,
            college: false,
            married: false,
            babies: 0,
            pets: config.starting_pets,
            houses: Vec::new(),
            action_cards: 0,
            pet_cards: 0,
            retired: false,
            take_branch: false,
        }
    }

    #[must_use]
    pub fn space(&self) -> SpaceId {
        self.space
    }

    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    #[must_use]
    pub fn loans(&self) -> u32 {
        self.loans
    }

    #[must_use]
    pub fn career(&self) -> Option<&CareerCard> {
        self.career.as_ref()
    }

    /// Salary of the current career, zero without one.
    #[must_use]
    pub fn salary(&self) -> i64 {
        self.career.as_ref().map_or(0, |c| c.salary)
    }

    #[must_use]
    pub fn went_to_college(&self) -> bool {
        self.college
    }

    #[must_use]
    pub fn is_married(&self) -> bool {
        self.married
    }

    #[must_use]
    pub fn babies(&self) -> u32 {
        self.babies
    }

    #[must_use]
    pub fn pets(&self) -> u32 {
        self.pets
    }

    #[must_use]
    pub fn houses(&self) -> &[HouseCard] {
        &self.houses
    }

    #[must_use]
    pub fn action_cards(&self) -> u32 {
        self.action_cards
    }

    #[must_use]
    pub fn pet_cards(&self) -> u32 {
        self.pet_cards
    }

    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Borrow enough to cover `price` and pay it.
    pub(crate) fn buy(&mut self, price: i64, config: &LifeConfig) -> u32 {
        let loans = config.loans_needed(price, self.cash);
        self.loans += loans;
        self.cash += config.loan_amount * i64::from(loans) - price;
        loans
    }
}

impl Seat for LifePlayer {
    fn identity(&self) -> &Identity {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let config = LifeConfig::default();
        let player = LifePlayer::new(Identity::ai(1), &config, SpaceId(3));
        assert_eq!(player.cash(), 200_000);
        assert_eq!(player.pets(), 1);
        assert_eq!(player.salary(), 0);
        assert_eq!(player.space(), SpaceId(3));
    }

    #[test]
    fn test_buy_with_loans() {
        let config = LifeConfig::default();
        let mut player = LifePlayer::new(Identity::ai(1), &config, SpaceId(0));

        assert_eq!(player.buy(120_000, &config), 0);
        assert_eq!(player.cash(), 80_000);

        assert_eq!(player.buy(180_000, &config), 2);
        assert_eq!(player.loans(), 2);
        assert_eq!(player.cash(), 0);
    }
}
