//! Turn events and the action log.
//!
//! The session records what happened as structured `LifeEvent`s. Their
//! `Display` is the line shown to players, so the orchestrator can render a
//! turn by printing its log.

use serde::{Deserialize, Serialize};

use super::cards::SpinColor;
use crate::core::Identity;

/// Format dollars with thousands separators: `-1234567` -> `-$1,234,567`.
#[must_use]
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn plural(count: u32, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeEvent {
    WentToCollege { player: Identity, tuition: i64 },
    ChoseCareer { player: Identity, career: String },
    Spun { player: Identity, value: u8 },
    SpunColor { player: Identity, color: SpinColor },
    BonusPaid { payer: Identity, owner: Identity, number: u8, amount: i64 },
    Paydays { player: Identity, count: u32, total: i64 },
    PaydayBonus { player: Identity, amount: i64 },
    Collected { player: Identity, amount: i64 },
    Paid { player: Identity, amount: i64 },
    DrewCard { player: Identity, card: String },
    GotPets { player: Identity, count: u32 },
    Sued { player: Identity, opponent: Identity, amount: i64 },
    ChoseOpponent { player: Identity, opponent: Identity },
    SpinTie { value: u8 },
    SpunHigher { winner: Identity },
    Fired { player: Identity, career: String },
    BoughtHouse { player: Identity, house: String, loans: u32 },
    DeclinedHouse { player: Identity },
    SoldHouse { player: Identity, house: String, amount: i64 },
    NoHouseAction { player: Identity },
    ClaimedSlot { player: Identity, slot: u8 },
    SpinToWin { winner: Identity, value: u8, prize: i64 },
    Graduated { player: Identity },
    Married { player: Identity, gift: i64, total: i64 },
    Babies { player: Identity, count: u32 },
    NightSchool { player: Identity, attending: bool },
    FamilyPath { player: Identity, taking: bool },
    RiskyRoad { player: Identity, taking: bool },
    Retired { player: Identity, payout: i64 },
    OutOfCards { deck: String },
    NoOpponents { player: Identity },
    Left { player: Identity },
    EndBonus { player: Identity, what: String, count: u32, amount: i64 },
    LoansRepaid { player: Identity, loans: u32, amount: i64 },
}

impl std::fmt::Display for LifeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LifeEvent::*;
        match self {
            WentToCollege { player, tuition } => {
                write!(f, "{player} is going to college and paid {} in tuition", money(*tuition))
            }
            ChoseCareer { player, career } => write!(f, "{player} chose a career: {career}"),
            Spun { player, value } => write!(f, "{player} spun a {value}!"),
            SpunColor { player, color } => write!(f, "{player} spun {color}!"),
            BonusPaid {
                payer,
                owner,
                number,
                amount,
            } => write!(f, "{payer} had to pay {owner} {} for spinning {number}", money(*amount)),
            Paydays { player, count, total } => write!(
                f,
                "{player} got {}, collecting {}",
                plural(*count, "payday", "paydays"),
                money(*total)
            ),
            PaydayBonus { player, amount } => {
                write!(f, "{player} landed on a payday and got a {} bonus!", money(*amount))
            }
            Collected { player, amount } => write!(f, "{player} collected {}", money(*amount)),
            Paid { player, amount } => write!(f, "{player} had to pay {}", money(*amount)),
            DrewCard { player, card } => write!(f, "{player} drew {card}"),
            GotPets { player, count } => write!(f, "{player} got {}!", plural(*count, "pet", "pets")),
            Sued { player, opponent, amount } => write!(f, "{player} sued {opponent} for {}", money(*amount)),
            ChoseOpponent { player, opponent } => write!(f, "{player} chose {opponent}!"),
            SpinTie { value } => write!(f, "Both spun {value}. Spin again!"),
            SpunHigher { winner } => write!(f, "{winner} spun higher!"),
            Fired { player, career } => write!(f, "{player} was fired from {career}"),
            BoughtHouse { player, house, loans } => {
                if *loans > 0 {
                    write!(f, "{player} bought {house} after taking out {}", plural(*loans, "loan", "loans"))
                } else {
                    write!(f, "{player} bought {house}")
                }
            }
            DeclinedHouse { player } => write!(f, "{player} did not want to take any loans and did not buy a house"),
            SoldHouse { player, house, amount } => write!(f, "{player} sold {house} for {}", money(*amount)),
            NoHouseAction { player } => write!(f, "{player} chose not to buy nor sell a house"),
            ClaimedSlot { player, slot } => write!(f, "{player} took spot {slot}"),
            SpinToWin { winner, value, prize } => {
                write!(f, "A {value} was spun and {winner} won the spin to win, collecting {}!", money(*prize))
            }
            Graduated { player } => write!(f, "{player} graduated!"),
            Married { player, gift, total } => write!(
                f,
                "{player} got married and collected {} from everyone for a total of {}!",
                money(*gift),
                money(*total)
            ),
            Babies { player, count } => write!(f, "{player} had {}!", plural(*count, "baby", "babies")),
            NightSchool { player, attending } => {
                write!(f, "{player} is {}going to night school", if *attending { "" } else { "not " })
            }
            FamilyPath { player, taking } => {
                write!(f, "{player} is {}going down the family path", if *taking { "" } else { "not " })
            }
            RiskyRoad { player, taking } => {
                write!(f, "{player} is {}going down the risky road", if *taking { "" } else { "not " })
            }
            Retired { player, payout } => write!(f, "{player} has retired and collected {}", money(*payout)),
            OutOfCards { deck } => write!(f, "There are no {deck} cards left"),
            NoOpponents { player } => write!(f, "{player} has nobody to play against"),
            Left { player } => write!(f, "{player} left the game!"),
            EndBonus {
                player,
                what,
                count,
                amount,
            } => write!(f, "{player} had {count} {what} and collected {}", money(*amount)),
            LoansRepaid { player, loans, amount } => write!(
                f,
                "{player} had {} and was deducted {}",
                plural(*loans, "loan", "loans"),
                money(*amount)
            ),
        }
    }
}

/// Everything that happened during one turn (or during setup/final scoring).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLog {
    pub player: Option<Identity>,
    pub events: Vec<LifeEvent>,
}

impl TurnLog {
    #[must_use]
    pub fn for_player(player: Identity) -> Self {
        Self {
            player: Some(player),
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: LifeEvent) {
        log::debug!("{event}");
        self.events.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LifeEvent> {
        self.events.iter()
    }
}

impl std::fmt::Display for TurnLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(player) = &self.player {
            writeln!(f, "{player}'s turn!")?;
        }
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}
