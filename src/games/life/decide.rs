//! Decisions a Game of Life turn asks for.
//!
//! The session calls a `LifeDecider` whenever a human seat must choose. The
//! orchestrator implements it over chat prompts; AI seats always go to the
//! built-in `AiPolicy`. Index answers out of range are clamped by the
//! session, so a decider can never break the game.
//!
//! ## AI policy
//!
//! - Careers: higher salary, random tie-break
//! - Buying: best resale value (red price, then black price) it can afford
//!   outright; failing that the cheaper house, borrowing half the time
//! - Selling: best resale value, random tie-break
//! - Opponents: highest salary, random if nobody has a career
//! - Forks and college: coin flips

use serde::{Deserialize, Serialize};

use super::cards::{CareerCard, HouseCard};
use super::player::LifePlayer;
use crate::core::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartChoice {
    College,
    Career,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseAction {
    Buy,
    Sell,
    Nothing,
}

pub trait LifeDecider {
    fn start(&mut self, player: &LifePlayer) -> StartChoice;

    /// Index of the career to take.
    fn choose_career(&mut self, player: &LifePlayer, offered: &[CareerCard]) -> usize;

    /// Keep `current` (true) or switch to `offered` (false).
    fn keep_career(&mut self, player: &LifePlayer, current: &CareerCard, offered: &CareerCard) -> bool;

    fn house_action(&mut self, player: &LifePlayer) -> HouseAction;

    /// Index of the house to buy.
    fn choose_house(&mut self, player: &LifePlayer, offered: &[HouseCard]) -> usize;

    /// Borrow `loans` loans to buy `house`?
    fn take_loans(&mut self, player: &LifePlayer, house: &HouseCard, loans: u32) -> bool;

    /// Index into `player.houses()` of the house to sell.
    fn house_to_sell(&mut self, player: &LifePlayer) -> usize;

    /// Index into `opponents` of the player to sue or compete against.
    fn choose_opponent(&mut self, player: &LifePlayer, opponents: &[&LifePlayer]) -> usize;

    /// Spin to win slot, one of `free`.
    fn spin_to_win_slot(&mut self, player: &LifePlayer, free: &[u8]) -> u8;

    fn night_school(&mut self, player: &LifePlayer) -> bool;

    fn family_path(&mut self, player: &LifePlayer) -> bool;

    fn risky_road(&mut self, player: &LifePlayer) -> bool;
}

/// The built-in decision policy for AI seats.
#[derive(Clone, Debug)]
pub struct AiPolicy {
    rng: GameRng,
}

impl AiPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Index of a maximum of `key`, ties broken at random.
    fn best_by<T, K: Ord>(&mut self, items: &[T], key: impl Fn(&T) -> K) -> usize {
        let Some(best) = items.iter().map(&key).max() else {
            return 0;
        };
        let ties: Vec<usize> = (0..items.len()).filter(|&i| key(&items[i]) == best).collect();
        self.rng.choose(&ties).copied().unwrap_or(0)
    }
}

impl LifeDecider for AiPolicy {
    fn start(&mut self, _player: &LifePlayer) -> StartChoice {
        if self.rng.coin_flip() {
            StartChoice::College
        } else {
            StartChoice::Career
        }
    }

    fn choose_career(&mut self, _player: &LifePlayer, offered: &[CareerCard]) -> usize {
        self.best_by(offered, |c| c.salary)
    }

    fn keep_career(&mut self, _player: &LifePlayer, current: &CareerCard, offered: &CareerCard) -> bool {
        self.best_by(&[current, offered], |c| c.salary) == 0
    }

    fn house_action(&mut self, player: &LifePlayer) -> HouseAction {
        let actions: &[HouseAction] = if player.houses().is_empty() {
            &[HouseAction::Buy, HouseAction::Nothing]
        } else {
            &[HouseAction::Buy, HouseAction::Sell, HouseAction::Nothing]
        };
        self.rng.choose(actions).copied().unwrap_or(HouseAction::Nothing)
    }

    fn choose_house(&mut self, player: &LifePlayer, offered: &[HouseCard]) -> usize {
        let affordable: Vec<usize> = (0..offered.len())
            .filter(|&i| offered[i].purchase <= player.cash())
            .collect();
        if affordable.is_empty() {
            return self.best_by(offered, |h| std::cmp::Reverse(h.purchase));
        }
        let candidates: Vec<&HouseCard> = affordable.iter().map(|&i| &offered[i]).collect();
        affordable[self.best_by(&candidates, |h| h.resale_key())]
    }

    fn take_loans(&mut self, _player: &LifePlayer, _house: &HouseCard, _loans: u32) -> bool {
        self.rng.coin_flip()
    }

    fn house_to_sell(&mut self, player: &LifePlayer) -> usize {
        self.best_by(player.houses(), HouseCard::resale_key)
    }

    fn choose_opponent(&mut self, _player: &LifePlayer, opponents: &[&LifePlayer]) -> usize {
        if opponents.iter().all(|p| p.career().is_none()) {
            return self.rng.choose_index(opponents.len()).unwrap_or(0);
        }
        self.best_by(opponents, |p| p.salary())
    }

    fn spin_to_win_slot(&mut self, _player: &LifePlayer, free: &[u8]) -> u8 {
        self.rng.choose(free).copied().unwrap_or(1)
    }

    fn night_school(&mut self, _player: &LifePlayer) -> bool {
        self.rng.coin_flip()
    }

    fn family_path(&mut self, _player: &LifePlayer) -> bool {
        self.rng.coin_flip()
    }

    fn risky_road(&mut self, _player: &LifePlayer) -> bool {
        self.rng.coin_flip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Identity, LifeConfig};
    use crate::games::life::board::SpaceId;

    fn player(cash: i64) -> LifePlayer {
        let mut p = LifePlayer::new(Identity::ai(1), &LifeConfig::default(), SpaceId(0));
        p.cash = cash;
        p
    }

    fn ai() -> AiPolicy {
        AiPolicy::new(GameRng::new(11))
    }

    #[test]
    fn test_picks_higher_salary() {
        let offered = [CareerCard::new("Clerk", 50_000, 1), CareerCard::new("Doctor", 130_000, 2)];
        assert_eq!(ai().choose_career(&player(0), &offered), 1);
    }

    #[test]
    fn test_keep_career_by_salary() {
        let clerk = CareerCard::new("Clerk", 50_000, 1);
        let doctor = CareerCard::new("Doctor", 130_000, 2);
        assert!(ai().keep_career(&player(0), &doctor, &clerk));
        assert!(!ai().keep_career(&player(0), &clerk, &doctor));

        // equal salaries are a coin toss
        let teacher = CareerCard::new("Teacher", 50_000, 3);
        let mut policy = ai();
        let kept: Vec<bool> = (0..40).map(|_| policy.keep_career(&player(0), &clerk, &teacher)).collect();
        assert!(kept.contains(&true));
        assert!(kept.contains(&false));
    }

    #[test]
    fn test_house_by_resale_when_affordable() {
        let offered = [
            HouseCard::new("Shack", 100_000, 80_000, 120_000),
            HouseCard::new("Villa", 100_000, 90_000, 110_000),
        ];
        assert_eq!(ai().choose_house(&player(200_000), &offered), 1);
    }

    #[test]
    fn test_house_skips_unaffordable() {
        let offered = [
            HouseCard::new("Mansion", 900_000, 800_000, 1_200_000),
            HouseCard::new("Condo", 150_000, 100_000, 200_000),
        ];
        assert_eq!(ai().choose_house(&player(200_000), &offered), 1);
        // nothing affordable: the cheaper one
        assert_eq!(ai().choose_house(&player(0), &offered), 1);
    }

    #[test]
    fn test_sells_best_house() {
        let mut p = player(0);
        p.houses = vec![
            HouseCard::new("Shack", 50_000, 40_000, 60_000),
            HouseCard::new("Villa", 500_000, 450_000, 600_000),
        ];
        assert_eq!(ai().house_to_sell(&p), 1);
    }

    #[test]
    fn test_never_sells_without_houses() {
        let mut ai = ai();
        let p = player(0);
        for _ in 0..50 {
            assert_ne!(ai.house_action(&p), HouseAction::Sell);
        }
    }

    #[test]
    fn test_opponent_by_salary() {
        let mut rich = player(0);
        rich.career = Some(CareerCard::new("Doctor", 130_000, 2));
        let poor = player(0);
        assert_eq!(ai().choose_opponent(&player(0), &[&poor, &rich]), 1);
    }

    #[test]
    fn test_slot_is_free() {
        let mut ai = ai();
        for _ in 0..20 {
            assert!([3, 7].contains(&ai.spin_to_win_slot(&player(0), &[3, 7])));
        }
    }
}
