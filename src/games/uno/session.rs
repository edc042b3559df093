//! Uno turn loop.
//!
//! The session acts for whoever holds the turn. The orchestrator collects a
//! human's `UnoAction`, or asks `ai_action` for an AI seat, and passes it to
//! `take_turn`. Effects of special cards resolve inside that call.

use serde::{Deserialize, Serialize};

use super::card::{standard_deck, Color, Face, UnoCard};
use crate::cards::Deck;
use crate::core::player::first_duplicate;
use crate::core::{GameResult, GameRng, Identity, Roster, Seat, UnoConfig};
use crate::error::SessionError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnoPlayer {
    identity: Identity,
    hand: Vec<UnoCard>,
}

impl UnoPlayer {
    #[must_use]
    pub fn hand(&self) -> &[UnoCard] {
        &self.hand
    }
}

impl Seat for UnoPlayer {
    fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// What the current player does with their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnoAction {
    /// Play the card at `index` in hand. Wild cards need a `color`.
    Play { index: usize, color: Option<Color> },
    Draw,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnoRejection {
    GameOver,
    NoSuchCard,
    /// Neither color nor face matches the top card.
    IllegalCard,
    /// A wild was played without picking a color.
    ColorRequired,
}

/// Side effect of a special card on the rest of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardEffect {
    Skipped(Identity),
    Reversed,
    Penalty { victim: Identity, cards: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnoOutcome {
    Played {
        player: Identity,
        card: UnoCard,
        /// Color picked for a wild.
        color: Option<Color>,
        effect: Option<CardEffect>,
        /// The player is down to one card.
        uno: bool,
        next: Identity,
    },
    Drew { player: Identity, next: Identity },
    /// The player emptied their hand.
    Won { player: Identity, card: UnoCard },
    /// The player quit. `next` is `None` when too few players remain to go on.
    Left { player: Identity, next: Option<Identity> },
    Rejected(UnoRejection),
}

/// An Uno session.
#[derive(Clone, Debug)]
pub struct Uno {
    config: UnoConfig,
    players: Roster<UnoPlayer>,
    deck: Deck<UnoCard>,
    top: UnoCard,
    winner: Option<Identity>,
    abandoned: bool,
    deck_rng: GameRng,
    ai_rng: GameRng,
}

impl Uno {
    /// Shuffle a fresh deck, deal every player a hand and turn up a non-wild
    /// top card. The first listed player starts.
    pub fn new(players: Vec<Identity>, config: UnoConfig, seed: u64) -> Result<Self, SessionError> {
        if players.len() < config.min_players {
            return Err(SessionError::NotEnoughPlayers {
                needed: config.min_players,
                found: players.len(),
            });
        }
        if let Some(dup) = first_duplicate(&players) {
            return Err(SessionError::DuplicatePlayer(dup.to_string()));
        }

        let mut rng = GameRng::new(seed);
        let mut deck_rng = rng.for_context("deck");
        let deck = Deck::shuffled(standard_deck(), &mut deck_rng);
        let seats = players
            .into_iter()
            .map(|identity| UnoPlayer {
                identity,
                hand: Vec::new(),
            })
            .collect();

        let mut game = Self {
            config,
            players: Roster::new(seats),
            deck,
            top: UnoCard::number(Color::Red, 1),
            winner: None,
            abandoned: false,
            deck_rng,
            ai_rng: rng.fork(),
        };
        for seat in 0..game.players.len() {
            let hand = game.draw_cards(game.config.starting_hand);
            game.players[seat].hand = hand;
        }
        game.top = game.turn_up_top();
        Ok(game)
    }

    /// One human against `config.ai_opponents` AI seats. The human starts.
    pub fn against_ai(player: Identity, config: UnoConfig, seed: u64) -> Result<Self, SessionError> {
        let mut players = vec![player];
        players.extend((1..=config.ai_opponents).map(Identity::ai));
        Self::new(players, config, seed)
    }

    fn replenish(&mut self) {
        log::warn!("uno deck exhausted, shuffling in a fresh one");
        self.deck = Deck::shuffled(standard_deck(), &mut self.deck_rng);
    }

    fn draw_card(&mut self) -> UnoCard {
        loop {
            if let Some(card) = self.deck.draw() {
                return card;
            }
            self.replenish();
        }
    }

    fn draw_cards(&mut self, count: usize) -> Vec<UnoCard> {
        (0..count).map(|_| self.draw_card()).collect()
    }

    fn turn_up_top(&mut self) -> UnoCard {
        if let Some(card) = self.deck.draw_where(|c| !c.is_wild()) {
            return card;
        }
        self.replenish();
        self.deck
            .draw_where(|c| !c.is_wild())
            .unwrap_or(UnoCard::number(Color::Red, 1))
    }

    /// The card on the pile, colored if it was a wild.
    #[must_use]
    pub fn top_card(&self) -> &UnoCard {
        &self.top
    }

    #[must_use]
    pub fn current_player(&self) -> &Identity {
        self.players.current_identity()
    }

    pub fn players(&self) -> impl Iterator<Item = &UnoPlayer> {
        self.players.iter()
    }

    #[must_use]
    pub fn hand(&self, who: &Identity) -> Option<&[UnoCard]> {
        self.players.find(who).map(UnoPlayer::hand)
    }

    #[must_use]
    pub fn direction(&self) -> crate::core::Direction {
        self.players.direction()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.abandoned
    }

    /// Hand indices the current player may legally play.
    #[must_use]
    pub fn legal_cards(&self) -> Vec<usize> {
        self.players
            .current()
            .hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.plays_on(&self.top))
            .map(|(i, _)| i)
            .collect()
    }

    /// Resolve the current player's turn.
    pub fn take_turn(&mut self, action: UnoAction) -> UnoOutcome {
        if self.is_over() {
            return UnoOutcome::Rejected(UnoRejection::GameOver);
        }
        match action {
            UnoAction::Play { index, color } => self.play(index, color),
            UnoAction::Draw => {
                let card = self.draw_card();
                let player = self.players.current().identity.clone();
                self.players.current_mut().hand.push(card);
                self.players.advance(1);
                UnoOutcome::Drew {
                    player,
                    next: self.current_player().clone(),
                }
            }
            UnoAction::Quit => {
                let seat = self.players.current_index();
                let gone = self.players.remove(seat);
                log::debug!("{} left uno", gone.identity);
                if self.players.len() < self.config.min_players {
                    log::info!("uno abandoned: {} player(s) left", self.players.len());
                    self.abandoned = true;
                    return UnoOutcome::Left {
                        player: gone.identity,
                        next: None,
                    };
                }
                UnoOutcome::Left {
                    player: gone.identity,
                    next: Some(self.current_player().clone()),
                }
            }
        }
    }

    fn play(&mut self, index: usize, color: Option<Color>) -> UnoOutcome {
        let Some(&card) = self.players.current().hand.get(index) else {
            return UnoOutcome::Rejected(UnoRejection::NoSuchCard);
        };
        if !card.plays_on(&self.top) {
            return UnoOutcome::Rejected(UnoRejection::IllegalCard);
        }
        let color = match (card.is_wild(), color) {
            (true, None) => return UnoOutcome::Rejected(UnoRejection::ColorRequired),
            (true, picked) => picked,
            (false, _) => None,
        };

        let player = self.players.current().identity.clone();
        let hand = &mut self.players.current_mut().hand;
        hand.remove(index);
        let left = hand.len();
        self.top = color.map_or(card, |c| card.with_color(c));

        if left == 0 {
            log::info!("{} won uno with {}", player, card);
            self.winner = Some(player.clone());
            return UnoOutcome::Won { player, card };
        }

        let two_players = self.players.len() == 2;
        let effect = match card.face {
            Face::Skip => Some(self.skip_next()),
            Face::Reverse if two_players => Some(self.skip_next()),
            Face::Reverse => {
                self.players.reverse();
                self.players.advance(1);
                Some(CardEffect::Reversed)
            }
            Face::DrawTwo | Face::WildDrawFour => {
                let victim_seat = self.players.peek(1);
                let cards = self.draw_cards(card.face.penalty());
                let victim = &mut self.players[victim_seat];
                victim.hand.extend(cards);
                let victim = victim.identity.clone();
                self.players.advance(1);
                Some(CardEffect::Penalty {
                    victim,
                    cards: card.face.penalty(),
                })
            }
            Face::Number(_) | Face::Wild => {
                self.players.advance(1);
                None
            }
        };

        UnoOutcome::Played {
            player,
            card,
            color,
            effect,
            uno: left == 1,
            next: self.current_player().clone(),
        }
    }

    fn skip_next(&mut self) -> CardEffect {
        let skipped = self.players[self.players.peek(1)].identity.clone();
        self.players.advance(2);
        CardEffect::Skipped(skipped)
    }

    /// The built-in policy's move for the current seat.
    ///
    /// Plays a legal +4, +2, Skip or Wild in that order of preference, else a
    /// random legal card, else draws. Wild colors are picked at random.
    pub fn ai_action(&mut self) -> UnoAction {
        let legal = self.legal_cards();
        let hand = &self.players.current().hand;
        let preferred = [Face::WildDrawFour, Face::DrawTwo, Face::Skip, Face::Wild]
            .iter()
            .find_map(|face| legal.iter().copied().find(|&i| hand[i].face == *face));

        let index = match preferred.or_else(|| self.ai_rng.choose(&legal).copied()) {
            Some(index) => index,
            None => return UnoAction::Draw,
        };
        let color = hand[index]
            .is_wild()
            .then(|| self.ai_rng.choose(&Color::ALL).copied())
            .flatten();
        UnoAction::Play { index, color }
    }

    /// Terminal result, `None` while the game is still going.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        match (&self.winner, self.abandoned) {
            (Some(winner), _) => Some(GameResult::Winner(winner.clone())),
            (None, true) => Some(GameResult::Abandoned),
            (None, false) => None,
        }
    }
}
