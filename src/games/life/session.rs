//! Game of Life turn engine.
//!
//! A session is set up once (college or career for every seat), then each
//! `take_turn` spins, moves along the board graph, pays out paydays and
//! resolves the landing space. Every change is recorded in the turn's
//! `TurnLog`. When everyone has retired, or fewer than two players remain,
//! houses are sold, end bonuses paid, loans repaid and the richest player
//! wins.
//!
//! Human choices go through the `LifeDecider` passed to each call; AI seats
//! use the session's own `AiPolicy`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{Board, SpaceKind};
use super::cards::{tier_payout, ActionCard, ActionEffect, CareerCard, HouseCard, PetAction, PetCard, SpinColor};
use super::content::LifeContent;
use super::decide::{AiPolicy, HouseAction, LifeDecider, StartChoice};
use super::player::LifePlayer;
use super::turn::{LifeEvent, TurnLog};
use crate::cards::{Deck, DeckPosition};
use crate::content::CardSource;
use crate::core::player::first_duplicate;
use crate::core::rng::{SPIN_MAX, SPIN_MIN};
use crate::core::{GameResult, GameRng, Identity, LifeConfig, Roster, Seat};
use crate::error::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifePhase {
    /// Waiting for `setup`.
    Setup,
    Playing,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Spin,
    Leave,
}

/// What one call to `take_turn` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub log: TurnLog,
    /// The same player goes again (landed on a stop space).
    pub extra_turn: bool,
    /// Whose turn it is now; `None` once the game is over.
    pub next: Option<Identity>,
    /// Set on the turn that ended the game.
    pub result: Option<GameResult>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played(TurnReport),
    /// `setup` has not run yet.
    NotStarted,
    /// The game is already over.
    Finished,
}

/// Route a decision to the AI policy or the caller's decider.
fn decider<'a>(ai: &'a mut AiPolicy, human: &'a mut dyn LifeDecider, is_ai: bool) -> &'a mut dyn LifeDecider {
    if is_ai {
        return ai;
    }
    human
}

#[derive(Clone, Debug)]
pub struct GameOfLife {
    config: LifeConfig,
    board: Board,
    players: Roster<LifePlayer>,
    careers: Deck<CareerCard>,
    college_careers: Deck<CareerCard>,
    houses: Deck<HouseCard>,
    pets: Deck<PetCard>,
    actions: Deck<ActionCard>,
    phase: LifePhase,
    result: Option<GameResult>,
    history: Vector<TurnLog>,
    rng: GameRng,
    ai: AiPolicy,
}

impl GameOfLife {
    /// Seat `players` in order. A single player may play alone.
    pub fn new(players: Vec<Identity>, content: LifeContent, config: LifeConfig, seed: u64) -> Result<Self, SessionError> {
        if players.is_empty() {
            return Err(SessionError::NotEnoughPlayers { needed: 1, found: 0 });
        }
        if let Some(dup) = first_duplicate(&players) {
            return Err(SessionError::DuplicatePlayer(dup.to_string()));
        }
        config.validate()?;
        content.validate()?;

        let mut rng = GameRng::new(seed);
        let mut deck_rng = rng.for_context("decks");
        let ai = AiPolicy::new(rng.fork());
        let start = content.board.career_start();
        let seats = players
            .into_iter()
            .map(|identity| LifePlayer::new(identity, &config, start))
            .collect();

        Ok(Self {
            players: Roster::new(seats),
            careers: Deck::shuffled(content.careers, &mut deck_rng),
            college_careers: Deck::shuffled(content.college_careers, &mut deck_rng),
            houses: Deck::shuffled(content.houses, &mut deck_rng),
            pets: Deck::shuffled(content.pets, &mut deck_rng),
            actions: Deck::shuffled(content.actions, &mut deck_rng),
            board: content.board,
            config,
            phase: LifePhase::Setup,
            result: None,
            history: Vector::new(),
            rng,
            ai,
        })
    }

    /// One human against `ai_count` AI seats, human first.
    pub fn against_ai(
        player: Identity,
        ai_count: u8,
        content: LifeContent,
        config: LifeConfig,
        seed: u64,
    ) -> Result<Self, SessionError> {
        let mut players = vec![player];
        players.extend((1..=ai_count).map(Identity::ai));
        Self::new(players, content, config, seed)
    }

    pub fn from_source(
        players: Vec<Identity>,
        source: &dyn CardSource,
        config: LifeConfig,
        seed: u64,
    ) -> Result<Self, SessionError> {
        let content = source.fetch_life()?;
        Self::new(players, content, config, seed)
    }

    #[must_use]
    pub fn phase(&self) -> LifePhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == LifePhase::Finished
    }

    #[must_use]
    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &Roster<LifePlayer> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, who: &Identity) -> Option<&LifePlayer> {
        self.players.find(who)
    }

    /// Whose turn it is. `None` after the game ends.
    #[must_use]
    pub fn current_player(&self) -> Option<&Identity> {
        if self.is_over() || self.players.is_empty() {
            return None;
        }
        Some(self.players.current_identity())
    }

    /// Every turn log so far, setup and final scoring included.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnLog> {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Ask every seat for college or career. Runs once; later calls return
    /// an empty log.
    pub fn setup(&mut self, human: &mut dyn LifeDecider) -> TurnLog {
        let mut log = TurnLog::default();
        if self.phase != LifePhase::Setup {
            return log;
        }

        for seat in 0..self.players.len() {
            let is_ai = self.players[seat].identity().is_ai();
            let choice = decider(&mut self.ai, &mut *human, is_ai).start(&self.players[seat]);
            match choice {
                StartChoice::College => {
                    let tuition = self.config.college_tuition;
                    let player = &mut self.players[seat];
                    player.cash -= tuition;
                    player.college = true;
                    player.space = self.board.college_start();
                    log.push(LifeEvent::WentToCollege {
                        player: player.identity().clone(),
                        tuition,
                    });
                }
                StartChoice::Career => {
                    self.players[seat].space = self.board.career_start();
                    self.offer_careers(seat, human, &mut log);
                }
            }
        }

        log::info!("game of life started with {} players", self.players.len());
        self.phase = LifePhase::Playing;
        self.history.push_back(log.clone());
        log
    }

    /// Play the current player's turn.
    pub fn take_turn(&mut self, action: TurnAction, human: &mut dyn LifeDecider) -> TurnOutcome {
        match self.phase {
            LifePhase::Setup => return TurnOutcome::NotStarted,
            LifePhase::Finished => return TurnOutcome::Finished,
            LifePhase::Playing => {}
        }

        let seat = self.players.current_index();
        let who = self.players[seat].identity().clone();
        let mut log = TurnLog::for_player(who.clone());
        let mut extra_turn = false;

        match action {
            TurnAction::Spin => {
                extra_turn = self.play_turn(seat, human, &mut log);
                if self.players.iter().all(LifePlayer::is_retired) {
                    self.finalize(&mut log);
                } else if !extra_turn {
                    self.players.advance(1);
                    self.skip_retired();
                }
            }
            TurnAction::Leave => {
                log.push(LifeEvent::Left { player: who.clone() });
                self.players.remove(seat);
                log::info!("{who} left the game of life");
                if self.players.len() < 2 || self.players.iter().all(LifePlayer::is_retired) {
                    self.finalize(&mut log);
                } else {
                    self.skip_retired();
                }
            }
        }

        self.history.push_back(log.clone());
        TurnOutcome::Played(TurnReport {
            log,
            extra_turn: extra_turn && !self.is_over(),
            next: self.current_player().cloned(),
            result: self.result.clone(),
        })
    }

    fn skip_retired(&mut self) {
        for _ in 0..self.players.len() {
            if !self.players.current().is_retired() {
                break;
            }
            self.players.advance(1);
        }
    }

    fn spin(&mut self, seat: usize, log: &mut TurnLog) -> u8 {
        let value = self.rng.spin();
        log.push(LifeEvent::Spun {
            player: self.players[seat].identity().clone(),
            value,
        });
        value
    }

    fn spin_color(&mut self, seat: usize, log: &mut TurnLog) -> SpinColor {
        let color = SpinColor::from_spin(self.rng.spin());
        log.push(LifeEvent::SpunColor {
            player: self.players[seat].identity().clone(),
            color,
        });
        color
    }

    fn collect(&mut self, seat: usize, amount: i64, log: &mut TurnLog) {
        let player = &mut self.players[seat];
        player.cash += amount;
        log.push(LifeEvent::Collected {
            player: player.identity().clone(),
            amount,
        });
    }

    fn pay(&mut self, seat: usize, amount: i64, log: &mut TurnLog) {
        let player = &mut self.players[seat];
        player.cash -= amount;
        log.push(LifeEvent::Paid {
            player: player.identity().clone(),
            amount,
        });
    }

    /// Spin, move and resolve the landing space. Returns true when the
    /// player goes again.
    fn play_turn(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) -> bool {
        let value = self.spin(seat, log);
        self.pay_bonuses(seat, value, log);

        let landing = {
            let player = &self.players[seat];
            self.board.next_space(player.space, value, player.take_branch)
        };
        let player = &mut self.players[seat];
        player.space = landing.space;
        if landing.paydays_passed > 0 {
            let total = player.salary() * i64::from(landing.paydays_passed);
            player.cash += total;
            log.push(LifeEvent::Paydays {
                player: player.identity().clone(),
                count: landing.paydays_passed,
                total,
            });
        }

        let Some(space) = self.board.get(landing.space) else {
            log::warn!("landed on missing space {}", landing.space);
            return false;
        };
        let kind = space.kind.clone();
        let who = self.players[seat].identity().clone();

        match &kind {
            SpaceKind::Blank => {}
            SpaceKind::Action => self.action_space(seat, human, log),
            SpaceKind::Pet => self.pet_space(seat, human, log),
            SpaceKind::House => self.house_space(seat, human, log),
            SpaceKind::Payday => {
                let amount = self.config.payday_bonus;
                self.players[seat].cash += amount;
                log.push(LifeEvent::PaydayBonus { player: who, amount });
            }
            SpaceKind::SpinToWin => self.spin_to_win(seat, human, log),
            SpaceKind::PayMoney { amount } => self.pay(seat, *amount, log),
            SpaceKind::GetMoney { amount } => self.collect(seat, *amount, log),
            SpaceKind::Baby => self.add_babies(seat, 1, log),
            SpaceKind::Twins => self.add_babies(seat, 2, log),
            SpaceKind::Triplets => self.add_babies(seat, 3, log),
            SpaceKind::Graduation => {
                self.players[seat].college = true;
                log.push(LifeEvent::Graduated { player: who });
                self.offer_careers(seat, human, log);
            }
            SpaceKind::Married => self.get_married(seat, log),
            SpaceKind::SpinForBabies { babies } => {
                let value = self.spin(seat, log);
                let count = babies.get(usize::from(value.saturating_sub(1))).copied().unwrap_or(0);
                self.add_babies(seat, u32::from(count), log);
            }
            SpaceKind::NightSchool => self.night_school(seat, human, log),
            SpaceKind::FamilyPath => {
                let is_ai = who.is_ai();
                let taking = decider(&mut self.ai, human, is_ai).family_path(&self.players[seat]);
                self.players[seat].take_branch = taking;
                log.push(LifeEvent::FamilyPath { player: who, taking });
            }
            SpaceKind::RiskyRoad => {
                let is_ai = who.is_ai();
                let taking = decider(&mut self.ai, human, is_ai).risky_road(&self.players[seat]);
                self.players[seat].take_branch = taking;
                log.push(LifeEvent::RiskyRoad { player: who, taking });
            }
            SpaceKind::Retirement => self.retire(seat, log),
        }

        kind.is_stop() && kind != SpaceKind::Retirement
    }

    /// Every other player whose bonus number was spun collects from the spinner.
    fn pay_bonuses(&mut self, seat: usize, value: u8, log: &mut TurnLog) {
        let divisor = self.config.bonus_divisor.max(1);
        for owner in 0..self.players.len() {
            if owner == seat {
                continue;
            }
            let Some(career) = &self.players[owner].career else { continue };
            if career.bonus != value {
                continue;
            }
            let amount = career.salary / divisor;
            self.players[owner].cash += amount;
            self.players[seat].cash -= amount;
            log.push(LifeEvent::BonusPaid {
                payer: self.players[seat].identity().clone(),
                owner: self.players[owner].identity().clone(),
                number: value,
                amount,
            });
        }
    }

    fn career_deck(&mut self, college: bool) -> &mut Deck<CareerCard> {
        if college {
            &mut self.college_careers
        } else {
            &mut self.careers
        }
    }

    /// Offer two careers from the player's deck; the other goes to the bottom.
    fn offer_careers(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let college = self.players[seat].college;
        let mut offered = self.career_deck(college).draw_many(2);
        if offered.is_empty() {
            log.push(LifeEvent::OutOfCards {
                deck: (if college { "college career" } else { "career" }).to_string(),
            });
            return;
        }

        let choice = if offered.len() == 1 {
            0
        } else {
            let is_ai = self.players[seat].identity().is_ai();
            decider(&mut self.ai, human, is_ai)
                .choose_career(&self.players[seat], &offered)
                .min(offered.len() - 1)
        };
        let chosen = offered.remove(choice);
        for card in offered {
            self.career_deck(college).put(card, DeckPosition::Bottom);
        }

        let player = &mut self.players[seat];
        log.push(LifeEvent::ChoseCareer {
            player: player.identity().clone(),
            career: chosen.to_string(),
        });
        player.career = Some(chosen);
    }

    fn add_babies(&mut self, seat: usize, count: u32, log: &mut TurnLog) {
        let player = &mut self.players[seat];
        player.babies += count;
        log.push(LifeEvent::Babies {
            player: player.identity().clone(),
            count,
        });
    }

    fn get_married(&mut self, seat: usize, log: &mut TurnLog) {
        let gift = match self.spin_color(seat, log) {
            SpinColor::Black => self.config.wedding_gift_black,
            SpinColor::Red => self.config.wedding_gift_red,
        };
        let mut total = 0;
        for guest in 0..self.players.len() {
            if guest != seat {
                self.players[guest].cash -= gift;
                total += gift;
            }
        }
        let player = &mut self.players[seat];
        player.cash += total;
        player.married = true;
        log.push(LifeEvent::Married {
            player: player.identity().clone(),
            gift,
            total,
        });
    }

    fn night_school(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let who = self.players[seat].identity().clone();
        let is_ai = who.is_ai();
        let attending = decider(&mut self.ai, &mut *human, is_ai).night_school(&self.players[seat]);
        self.players[seat].take_branch = attending;
        log.push(LifeEvent::NightSchool {
            player: who.clone(),
            attending,
        });
        if !attending {
            return;
        }

        let tuition = self.config.night_school_tuition;
        let was_college = self.players[seat].college;
        self.pay(seat, tuition, log);
        self.players[seat].college = true;

        let Some(offered) = self.college_careers.draw() else {
            log.push(LifeEvent::OutOfCards {
                deck: "college career".to_string(),
            });
            return;
        };
        let keep = match &self.players[seat].career {
            Some(current) => decider(&mut self.ai, human, is_ai).keep_career(&self.players[seat], current, &offered),
            None => false,
        };
        if keep {
            self.college_careers.put(offered, DeckPosition::Bottom);
            return;
        }

        log.push(LifeEvent::ChoseCareer {
            player: who,
            career: offered.to_string(),
        });
        if let Some(old) = self.players[seat].career.replace(offered) {
            self.career_deck(was_college).put(old, DeckPosition::Bottom);
        }
    }

    fn retire(&mut self, seat: usize, log: &mut TurnLog) {
        let already = self.players.iter().filter(|p| p.is_retired()).count();
        let payout = self.config.retirement_payout(already);
        let player = &mut self.players[seat];
        player.cash += payout;
        player.retired = true;
        log.push(LifeEvent::Retired {
            player: player.identity().clone(),
            payout,
        });
    }

    fn choose_opponent(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) -> Option<usize> {
        let seats: Vec<usize> = (0..self.players.len()).filter(|&i| i != seat).collect();
        if seats.is_empty() {
            log.push(LifeEvent::NoOpponents {
                player: self.players[seat].identity().clone(),
            });
            return None;
        }

        let is_ai = self.players[seat].identity().is_ai();
        let opponents: Vec<&LifePlayer> = seats.iter().map(|&i| &self.players[i]).collect();
        let picked = decider(&mut self.ai, human, is_ai).choose_opponent(&self.players[seat], &opponents);
        let opponent = seats[picked.min(seats.len() - 1)];
        log.push(LifeEvent::ChoseOpponent {
            player: self.players[seat].identity().clone(),
            opponent: self.players[opponent].identity().clone(),
        });
        Some(opponent)
    }

    /// Spin off against a chosen opponent until someone spins higher.
    /// Returns the winner's seat and the winning spin.
    fn compete(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) -> Option<(usize, u8)> {
        let opponent = self.choose_opponent(seat, human, log)?;
        loop {
            let mine = self.spin(seat, log);
            let theirs = self.spin(opponent, log);
            if mine == theirs {
                log.push(LifeEvent::SpinTie { value: mine });
                continue;
            }
            let winner = if mine > theirs { seat } else { opponent };
            log.push(LifeEvent::SpunHigher {
                winner: self.players[winner].identity().clone(),
            });
            return Some((winner, mine.max(theirs)));
        }
    }

    fn pet_space(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let Some(card) = self.pets.draw() else {
            log.push(LifeEvent::OutOfCards { deck: "pet".to_string() });
            return;
        };
        let player = &mut self.players[seat];
        player.pet_cards += 1;
        log.push(LifeEvent::DrewCard {
            player: player.identity().clone(),
            card: card.to_string(),
        });
        if card.adds > 0 {
            player.pets += card.adds;
            log.push(LifeEvent::GotPets {
                player: player.identity().clone(),
                count: card.adds,
            });
        }

        let pets = i64::from(self.players[seat].pets);
        match card.action {
            PetAction::Collect => self.collect(seat, card.amount, log),
            PetAction::CollectForEach => self.collect(seat, card.amount * pets, log),
            PetAction::CollectFromEach => {
                let mut total = 0;
                for other in 0..self.players.len() {
                    if other != seat {
                        self.pay(other, card.amount, log);
                        total += card.amount;
                    }
                }
                self.collect(seat, total, log);
            }
            PetAction::Pay => self.pay(seat, card.amount, log),
            PetAction::PayForEach => self.pay(seat, card.amount * pets, log),
            PetAction::Compete => {
                if let Some((winner, _)) = self.compete(seat, human, log) {
                    self.collect(winner, card.amount, log);
                }
            }
        }
    }

    fn action_space(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let employed = self.players[seat].career.is_some();
        let Some(card) = self.actions.draw_where(|c| employed || !c.is_fired()) else {
            log.push(LifeEvent::OutOfCards { deck: "action".to_string() });
            return;
        };
        let player = &mut self.players[seat];
        player.action_cards += 1;
        log.push(LifeEvent::DrewCard {
            player: player.identity().clone(),
            card: card.to_string(),
        });

        match card.effect {
            ActionEffect::Collect { amount } => self.collect(seat, amount, log),
            ActionEffect::CollectBySpin { tiers } => {
                let value = self.spin(seat, log);
                self.collect(seat, tier_payout(&tiers, value), log);
            }
            ActionEffect::CollectByColor { red, black } => {
                let amount = match self.spin_color(seat, log) {
                    SpinColor::Red => red,
                    SpinColor::Black => black,
                };
                self.collect(seat, amount, log);
            }
            ActionEffect::CollectTimesSpin { per_point } => {
                let value = self.spin(seat, log);
                self.collect(seat, per_point * i64::from(value), log);
            }
            ActionEffect::Lawsuit { amount } => {
                if let Some(opponent) = self.choose_opponent(seat, human, log) {
                    self.players[opponent].cash -= amount;
                    self.players[seat].cash += amount;
                    log.push(LifeEvent::Sued {
                        player: self.players[seat].identity().clone(),
                        opponent: self.players[opponent].identity().clone(),
                        amount,
                    });
                }
            }
            ActionEffect::CollectAll { tiers } => {
                for each in 0..self.players.len() {
                    let value = self.spin(each, log);
                    self.collect(each, tier_payout(&tiers, value), log);
                }
            }
            ActionEffect::Compete { amount } => {
                if let Some((winner, _)) = self.compete(seat, human, log) {
                    self.collect(winner, amount, log);
                }
            }
            ActionEffect::CompeteTimesSpin { per_point } => {
                if let Some((winner, value)) = self.compete(seat, human, log) {
                    self.collect(winner, per_point * i64::from(value), log);
                }
            }
            ActionEffect::Pay { amount } => self.pay(seat, amount, log),
            ActionEffect::Fired => self.fire(seat, human, log),
        }
    }

    fn fire(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let college = self.players[seat].college;
        let Some(old) = self.players[seat].career.take() else { return };
        log.push(LifeEvent::Fired {
            player: self.players[seat].identity().clone(),
            career: old.name.clone(),
        });
        self.career_deck(college).put(old, DeckPosition::Bottom);
        self.offer_careers(seat, human, log);
    }

    fn house_space(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let is_ai = self.players[seat].identity().is_ai();
        let action = decider(&mut self.ai, &mut *human, is_ai).house_action(&self.players[seat]);
        match action {
            HouseAction::Buy => self.buy_house(seat, human, log),
            HouseAction::Sell if !self.players[seat].houses.is_empty() => {
                let index = decider(&mut self.ai, human, is_ai)
                    .house_to_sell(&self.players[seat])
                    .min(self.players[seat].houses.len() - 1);
                self.sell_house(seat, index, log);
            }
            HouseAction::Sell | HouseAction::Nothing => log.push(LifeEvent::NoHouseAction {
                player: self.players[seat].identity().clone(),
            }),
        }
    }

    fn buy_house(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let mut offered = self.houses.draw_many(2);
        if offered.len() < 2 {
            for house in offered {
                self.houses.put(house, DeckPosition::Bottom);
            }
            log.push(LifeEvent::OutOfCards { deck: "house".to_string() });
            return;
        }

        let is_ai = self.players[seat].identity().is_ai();
        let choice = decider(&mut self.ai, &mut *human, is_ai)
            .choose_house(&self.players[seat], &offered)
            .min(1);
        let chosen = offered.remove(choice);
        let loans = self.config.loans_needed(chosen.purchase, self.players[seat].cash);
        let agreed = loans == 0 || decider(&mut self.ai, human, is_ai).take_loans(&self.players[seat], &chosen, loans);

        if agreed {
            let player = &mut self.players[seat];
            let loans = player.buy(chosen.purchase, &self.config);
            log.push(LifeEvent::BoughtHouse {
                player: player.identity().clone(),
                house: chosen.name.clone(),
                loans,
            });
            player.houses.push(chosen);
        } else {
            log.push(LifeEvent::DeclinedHouse {
                player: self.players[seat].identity().clone(),
            });
            self.houses.put(chosen, DeckPosition::Bottom);
        }
        for house in offered {
            self.houses.put(house, DeckPosition::Bottom);
        }
    }

    /// Sell a house for its spun price. Sold houses leave the game.
    fn sell_house(&mut self, seat: usize, index: usize, log: &mut TurnLog) {
        let color = self.spin_color(seat, log);
        let player = &mut self.players[seat];
        let house = player.houses.remove(index);
        let amount = house.sale_price(color);
        player.cash += amount;
        log.push(LifeEvent::SoldHouse {
            player: player.identity().clone(),
            house: house.name,
            amount,
        });
    }

    /// The spinner claims `spin_to_win_slots` numbers, everyone else one,
    /// then the wheel spins until a claimed number comes up.
    fn spin_to_win(&mut self, seat: usize, human: &mut dyn LifeDecider, log: &mut TurnLog) {
        let count = self.players.len();
        let mut claimed: Vec<(u8, usize)> = Vec::new();

        for offset in 0..count {
            let owner = (seat + offset) % count;
            let claims = if owner == seat { self.config.spin_to_win_slots } else { 1 };
            for _ in 0..claims {
                let free: Vec<u8> = (SPIN_MIN..=SPIN_MAX)
                    .filter(|n| claimed.iter().all(|(slot, _)| slot != n))
                    .collect();
                if free.is_empty() {
                    break;
                }
                let is_ai = self.players[owner].identity().is_ai();
                let wanted = decider(&mut self.ai, &mut *human, is_ai).spin_to_win_slot(&self.players[owner], &free);
                let slot = if free.contains(&wanted) { wanted } else { free[0] };
                claimed.push((slot, owner));
                log.push(LifeEvent::ClaimedSlot {
                    player: self.players[owner].identity().clone(),
                    slot,
                });
            }
        }
        if claimed.is_empty() {
            return;
        }

        loop {
            let value = self.spin(seat, log);
            if let Some(&(_, winner)) = claimed.iter().find(|(slot, _)| *slot == value) {
                let prize = self.config.spin_to_win_prize;
                let player = &mut self.players[winner];
                player.cash += prize;
                log.push(LifeEvent::SpinToWin {
                    winner: player.identity().clone(),
                    value,
                    prize,
                });
                return;
            }
        }
    }

    /// Sell every house, pay end bonuses, repay loans and rank by cash.
    fn finalize(&mut self, log: &mut TurnLog) {
        for seat in 0..self.players.len() {
            while !self.players[seat].houses.is_empty() {
                self.sell_house(seat, 0, log);
            }

            let config = &self.config;
            let player = &mut self.players[seat];
            let bonuses = [
                ("action cards", player.action_cards, config.card_bonus),
                ("pet cards", player.pet_cards, config.card_bonus),
                ("children", player.babies, config.child_bonus),
            ];
            for (what, count, each) in bonuses {
                if count == 0 {
                    continue;
                }
                let amount = each * i64::from(count);
                player.cash += amount;
                log.push(LifeEvent::EndBonus {
                    player: player.identity().clone(),
                    what: what.to_string(),
                    count,
                    amount,
                });
            }
            if player.loans > 0 {
                let amount = config.loan_payback * i64::from(player.loans);
                player.cash -= amount;
                log.push(LifeEvent::LoansRepaid {
                    player: player.identity().clone(),
                    loans: player.loans,
                    amount,
                });
            }
        }

        let result = match self.players.iter().map(LifePlayer::cash).max() {
            None => GameResult::Abandoned,
            Some(best) => {
                let mut winners: Vec<Identity> = self
                    .players
                    .iter()
                    .filter(|p| p.cash() == best)
                    .map(|p| p.identity().clone())
                    .collect();
                if winners.len() == 1 {
                    GameResult::Winner(winners.remove(0))
                } else {
                    GameResult::Winners(winners)
                }
            }
        };
        log::info!("game of life finished: {result:?}");
        self.result = Some(result);
        self.phase = LifePhase::Finished;
    }
}
