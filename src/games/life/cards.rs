//! Game of Life cards.
//!
//! Every card is plain data. What a pet or action card does is a closed enum
//! so the session's dispatch is an exhaustive `match`.

use serde::{Deserialize, Serialize};

use super::turn::money;

/// Color half of the spinner. Even numbers are black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinColor {
    Red,
    Black,
}

impl SpinColor {
    #[must_use]
    pub const fn from_spin(value: u8) -> Self {
        if value % 2 == 0 {
            SpinColor::Black
        } else {
            SpinColor::Red
        }
    }
}

impl std::fmt::Display for SpinColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpinColor::Red => f.write_str("red"),
            SpinColor::Black => f.write_str("black"),
        }
    }
}

/// A job. Whoever else spins `bonus` pays the holder `salary / bonus_divisor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerCard {
    pub name: String,
    pub salary: i64,
    pub bonus: u8,
}

impl CareerCard {
    pub fn new(name: impl Into<String>, salary: i64, bonus: u8) -> Self {
        Self {
            name: name.into(),
            salary,
            bonus,
        }
    }
}

impl std::fmt::Display for CareerCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (salary {}, bonus {})", self.name, money(self.salary), self.bonus)
    }
}

/// A house. Selling spins for color: red pays `spin_red`, black pays `spin_black`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseCard {
    pub name: String,
    pub purchase: i64,
    pub spin_red: i64,
    pub spin_black: i64,
}

impl HouseCard {
    pub fn new(name: impl Into<String>, purchase: i64, spin_red: i64, spin_black: i64) -> Self {
        Self {
            name: name.into(),
            purchase,
            spin_red,
            spin_black,
        }
    }

    /// Sale price for a spin of `color`.
    #[must_use]
    pub fn sale_price(&self, color: SpinColor) -> i64 {
        match color {
            SpinColor::Red => self.spin_red,
            SpinColor::Black => self.spin_black,
        }
    }

    /// Resale ranking: the red price first, then the black price.
    #[must_use]
    pub fn resale_key(&self) -> (i64, i64) {
        (self.spin_red, self.spin_black)
    }
}

impl std::fmt::Display for HouseCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (cost {}, sells for {} on red / {} on black)",
            self.name,
            money(self.purchase),
            money(self.spin_red),
            money(self.spin_black)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetAction {
    Collect,
    /// `amount` per pet owned.
    CollectForEach,
    /// `amount` from every other player.
    CollectFromEach,
    Pay,
    /// `amount` per pet owned.
    PayForEach,
    /// Spin off against a chosen opponent; the higher spin collects `amount`.
    Compete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetCard {
    pub name: String,
    pub text: String,
    pub action: PetAction,
    pub amount: i64,
    /// Pets gained from this card.
    #[serde(default)]
    pub adds: u32,
}

impl std::fmt::Display for PetCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.text)
    }
}

/// Payout for spins in `low..=high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTier {
    pub low: u8,
    pub high: u8,
    pub amount: i64,
}

impl SpinTier {
    #[must_use]
    pub const fn new(low: u8, high: u8, amount: i64) -> Self {
        Self { low, high, amount }
    }
}

/// Amount of the first tier containing `spin`, zero if none does.
#[must_use]
pub fn tier_payout(tiers: &[SpinTier], spin: u8) -> i64 {
    tiers
        .iter()
        .find(|t| (t.low..=t.high).contains(&spin))
        .map_or(0, |t| t.amount)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionEffect {
    Collect { amount: i64 },
    CollectBySpin { tiers: Vec<SpinTier> },
    CollectByColor { red: i64, black: i64 },
    /// Spin and collect `per_point` times the value.
    CollectTimesSpin { per_point: i64 },
    /// Sue a chosen opponent for `amount`.
    Lawsuit { amount: i64 },
    /// Every player spins and collects by tier.
    CollectAll { tiers: Vec<SpinTier> },
    Compete { amount: i64 },
    /// The winner collects `per_point` times the winning spin.
    CompeteTimesSpin { per_point: i64 },
    Pay { amount: i64 },
    /// Lose the current career and draw a new one.
    Fired,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCard {
    pub name: String,
    pub text: String,
    pub effect: ActionEffect,
}

impl ActionCard {
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.effect == ActionEffect::Fired
    }
}

impl std::fmt::Display for ActionCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_color() {
        assert_eq!(SpinColor::from_spin(2), SpinColor::Black);
        assert_eq!(SpinColor::from_spin(10), SpinColor::Black);
        assert_eq!(SpinColor::from_spin(7), SpinColor::Red);
    }

    #[test]
    fn test_tier_payout() {
        let tiers = [SpinTier::new(1, 3, 10_000), SpinTier::new(4, 7, 50_000), SpinTier::new(8, 10, 100_000)];
        assert_eq!(tier_payout(&tiers, 1), 10_000);
        assert_eq!(tier_payout(&tiers, 7), 50_000);
        assert_eq!(tier_payout(&tiers, 10), 100_000);
        assert_eq!(tier_payout(&tiers[..1], 9), 0);
    }

    #[test]
    fn test_house_prices() {
        let house = HouseCard::new("Cabin", 100_000, 80_000, 150_000);
        assert_eq!(house.sale_price(SpinColor::Red), 80_000);
        assert_eq!(house.sale_price(SpinColor::Black), 150_000);
        assert_eq!(house.to_string(), "Cabin (cost $100,000, sells for $80,000 on red / $150,000 on black)");
    }

    #[test]
    fn test_action_effect_json() {
        let card: ActionCard = serde_json::from_str(
            r#"{"name": "Lottery", "text": "Spin to win", "effect": {"type": "collect_by_spin", "tiers": [{"low": 1, "high": 10, "amount": 5}]}}"#,
        )
        .unwrap();
        assert_eq!(card.effect, ActionEffect::CollectBySpin { tiers: vec![SpinTier::new(1, 10, 5)] });

        let fired: ActionEffect = serde_json::from_str(r#"{"type": "fired"}"#).unwrap();
        assert_eq!(fired, ActionEffect::Fired);
    }
}
