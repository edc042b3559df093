//! Game of Life content: decks and board.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::cards::{ActionCard, ActionEffect, CareerCard, HouseCard, PetAction, PetCard, SpinTier};
use crate::error::ContentError;

/// Everything a session needs besides its players.
///
/// A JSON document without a `board` key gets `Board::standard()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeContent {
    pub careers: Vec<CareerCard>,
    pub college_careers: Vec<CareerCard>,
    pub houses: Vec<HouseCard>,
    pub pets: Vec<PetCard>,
    pub actions: Vec<ActionCard>,
    #[serde(default = "Board::standard")]
    pub board: Board,
}

impl LifeContent {
    /// Fail fast on content a session cannot start with.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.careers.len() < 2 {
            return Err(ContentError::EmptyDeck("career"));
        }
        if self.college_careers.len() < 2 {
            return Err(ContentError::EmptyDeck("college career"));
        }
        if self.houses.len() < 2 {
            return Err(ContentError::EmptyDeck("house"));
        }
        if self.pets.is_empty() {
            return Err(ContentError::EmptyDeck("pet"));
        }
        if self.actions.is_empty() {
            return Err(ContentError::EmptyDeck("action"));
        }
        self.board.validate()
    }

    /// The built-in card set on the standard board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            careers: standard_careers(),
            college_careers: standard_college_careers(),
            houses: standard_houses(),
            pets: standard_pets(),
            actions: standard_actions(),
            board: Board::standard(),
        }
    }
}

fn standard_careers() -> Vec<CareerCard> {
    [
        ("Salesperson", 90_000, 1),
        ("Hair Stylist", 80_000, 2),
        ("Mechanic", 80_000, 3),
        ("Police Officer", 100_000, 4),
        ("Entertainer", 50_000, 5),
        ("Athlete", 60_000, 6),
        ("Chef", 70_000, 7),
        ("Artist", 50_000, 8),
        ("Pilot", 110_000, 9),
        ("Writer", 60_000, 10),
    ]
    .into_iter()
    .map(|(name, salary, bonus)| CareerCard::new(name, salary, bonus))
    .collect()
}

fn standard_college_careers() -> Vec<CareerCard> {
    [
        ("Accountant", 100_000, 1),
        ("Veterinarian", 120_000, 2),
        ("Lawyer", 110_000, 3),
        ("Teacher", 90_000, 4),
        ("Computer Designer", 110_000, 5),
        ("Doctor", 130_000, 6),
        ("Architect", 120_000, 7),
        ("Engineer", 100_000, 8),
    ]
    .into_iter()
    .map(|(name, salary, bonus)| CareerCard::new(name, salary, bonus))
    .collect()
}

fn standard_houses() -> Vec<HouseCard> {
    [
        ("Mobile Home", 60_000, 40_000, 80_000),
        ("Studio Apartment", 80_000, 60_000, 100_000),
        ("Condo", 120_000, 90_000, 150_000),
        ("Cabin", 160_000, 130_000, 200_000),
        ("Split Level", 200_000, 170_000, 250_000),
        ("Farmhouse", 240_000, 210_000, 300_000),
        ("Tudor", 300_000, 260_000, 380_000),
        ("Dutch Colonial", 400_000, 350_000, 500_000),
        ("Modern Victorian", 500_000, 450_000, 620_000),
        ("Mansion", 800_000, 700_000, 1_000_000),
    ]
    .into_iter()
    .map(|(name, purchase, red, black)| HouseCard::new(name, purchase, red, black))
    .collect()
}

fn pet(name: &str, text: &str, action: PetAction, amount: i64, adds: u32) -> PetCard {
    PetCard {
        name: name.to_string(),
        text: text.to_string(),
        action,
        amount,
        adds,
    }
}

fn standard_pets() -> Vec<PetCard> {
    vec![
        pet("Pet Show", "Your dog wins best in show. Collect $20,000.", PetAction::Collect, 20_000, 0),
        pet("Adoption Day", "You adopt a kitten. Collect $10,000 for each pet.", PetAction::CollectForEach, 10_000, 1),
        pet("Puppy Party", "Everyone brings a gift. Collect $10,000 from each player.", PetAction::CollectFromEach, 10_000, 0),
        pet("Vet Bills", "Pay the bank $20,000.", PetAction::Pay, 20_000, 0),
        pet("Grooming Day", "Pay $10,000 for each pet.", PetAction::PayForEach, 10_000, 0),
        pet("Agility Contest", "Spin against an opponent. Higher spin collects $50,000.", PetAction::Compete, 50_000, 0),
        pet("Stray Cat", "A stray follows you home. Collect $5,000 for each pet.", PetAction::CollectForEach, 5_000, 1),
        pet("Pet Insurance", "Pay the bank $15,000.", PetAction::Pay, 15_000, 0),
        pet("Dog Walking", "Start a dog walking business. Collect $40,000.", PetAction::Collect, 40_000, 0),
        pet("Fish Tank", "Buy a goldfish and a tank. Pay $5,000 for each pet.", PetAction::PayForEach, 5_000, 1),
        pet("Talent Show", "Spin against an opponent. Higher spin collects $80,000.", PetAction::Compete, 80_000, 0),
        pet("Pet Sitting", "Watch the neighbors' pets. Collect $20,000 from each player.", PetAction::CollectFromEach, 20_000, 0),
    ]
}

fn action(name: &str, text: &str, effect: ActionEffect) -> ActionCard {
    ActionCard {
        name: name.to_string(),
        text: text.to_string(),
        effect,
    }
}

fn standard_actions() -> Vec<ActionCard> {
    use ActionEffect::*;

    let lottery = vec![SpinTier::new(1, 3, 10_000), SpinTier::new(4, 7, 50_000), SpinTier::new(8, 10, 100_000)];
    let stocks = vec![SpinTier::new(1, 5, 20_000), SpinTier::new(6, 10, 80_000)];
    vec![
        action("Win an Award", "Collect $100,000.", Collect { amount: 100_000 }),
        action("Tax Refund", "Collect $50,000.", Collect { amount: 50_000 }),
        action("Write a Best Seller", "Collect $150,000.", Collect { amount: 150_000 }),
        action("Lottery", "Spin to see how much you win.", CollectBySpin { tiers: lottery.clone() }),
        action("Invest in Stocks", "Spin to see how your stocks do.", CollectBySpin { tiers: stocks.clone() }),
        action("Sell a Painting", "Spin red for $50,000 or black for $100,000.", CollectByColor { red: 50_000, black: 100_000 }),
        action("Flip a Car", "Spin red for $20,000 or black for $60,000.", CollectByColor { red: 20_000, black: 60_000 }),
        action("Go on a Game Show", "Collect $10,000 times your spin.", CollectTimesSpin { per_point: 10_000 }),
        action("Busk Downtown", "Collect $5,000 times your spin.", CollectTimesSpin { per_point: 5_000 }),
        action("Lawsuit", "Sue an opponent for $100,000.", Lawsuit { amount: 100_000 }),
        action("Fender Bender", "Sue an opponent for $50,000.", Lawsuit { amount: 50_000 }),
        action("Block Party", "Everyone spins and collects.", CollectAll { tiers: stocks }),
        action("Class Reunion", "Everyone spins and collects.", CollectAll { tiers: lottery }),
        action("Dance Off", "Spin against an opponent. Higher spin collects $100,000.", Compete { amount: 100_000 }),
        action("Chess Match", "Spin against an opponent. Higher spin collects $50,000.", Compete { amount: 50_000 }),
        action("Trivia Night", "Spin against an opponent. Higher spin collects $10,000 times the spin.", CompeteTimesSpin { per_point: 10_000 }),
        action("Car Repairs", "Pay the bank $50,000.", Pay { amount: 50_000 }),
        action("Home Repairs", "Pay the bank $80,000.", Pay { amount: 80_000 }),
        action("Medical Bills", "Pay the bank $100,000.", Pay { amount: 100_000 }),
        action("Speeding Ticket", "Pay the bank $20,000.", Pay { amount: 20_000 }),
        action("Company Downsized", "You're fired. Choose a new career.", Fired),
        action("Career Change", "You're fired. Choose a new career.", Fired),
        action("Win a Marathon", "Collect $60,000.", Collect { amount: 60_000 }),
        action("Inherit a Fortune", "Spin red for $100,000 or black for $250,000.", CollectByColor { red: 100_000, black: 250_000 }),
    ]
}
