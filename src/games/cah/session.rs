//! Cards Against Humanity round state machine.
//!
//! ```text
//!  Dealing --start_round--> Collecting --last submission--> Judging
//!     ^                                                        |
//!     +------------------------judge_choose--------------------+
//! ```
//!
//! Any state can drop to `Finished` when the black deck runs out, someone
//! reaches the winning score, or too few players remain.

use smallvec::SmallVec;

use super::cards::{BlackCard, CahContent, WhiteCard};
use crate::cards::Deck;
use crate::content::CardSource;
use crate::core::player::first_duplicate;
use crate::core::{CahConfig, GameResult, GameRng, Identity, Roster, Seat};
use crate::error::{ContentError, SessionError};

/// Cards picked for one submission. Black cards rarely ask for more than 3.
pub type CardPicks<T> = SmallVec<[T; 3]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CahPlayer {
    identity: Identity,
    hand: Vec<WhiteCard>,
    score: u32,
    selection: CardPicks<usize>,
    submitted: bool,
}

impl CahPlayer {
    fn new(identity: Identity) -> Self {
        Self {
            identity,
            hand: Vec::new(),
            score: 0,
            selection: CardPicks::new(),
            submitted: false,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &[WhiteCard] {
        &self.hand
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Hand indices chosen so far this round.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    #[must_use]
    pub fn has_submitted(&self) -> bool {
        self.submitted
    }
}

impl Seat for CahPlayer {
    fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// One player's answer to the black card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub player: Identity,
    pub cards: CardPicks<WhiteCard>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CahEnd {
    Winner(Identity),
    NotEnoughPlayers,
    OutOfCards,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for `start_round`.
    Dealing,
    /// Non-judges are picking cards.
    Collecting,
    /// Every non-judge has submitted; waiting on the judge.
    Judging,
    Finished(CahEnd),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStart {
    Started { round: u32, judge: Identity, black: BlackCard },
    /// A round is already running.
    InProgress,
    /// The game is over (possibly just now, if a deck ran dry).
    Finished(CahEnd),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectRejection {
    NotCollecting,
    NotInGame,
    IsJudge,
    AlreadySubmitted,
    NoSuchCard,
    AlreadyChosen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Card noted; `remaining` more are needed.
    Chosen { remaining: usize },
    /// The submission is complete. `all_in` is set when this was the last
    /// one and the round moved to judging.
    Submitted { all_in: bool },
    Rejected(SelectRejection),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Departure {
    /// A non-judge left.
    Removed,
    /// The judge left; the next seat judges this round.
    JudgeReplaced { judge: Identity },
    /// The table fell below the minimum.
    GameEnded,
    NotInGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JudgeRejection {
    NotJudging,
    NoSuchSubmission,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Judgement {
    RoundWon { winner: Identity, cards: CardPicks<WhiteCard>, score: u32 },
    GameWon { winner: Identity, cards: CardPicks<WhiteCard>, score: u32 },
    Rejected(JudgeRejection),
}

/// A Cards Against Humanity session.
#[derive(Clone, Debug)]
pub struct CardsAgainstHumanity {
    config: CahConfig,
    players: Roster<CahPlayer>,
    black: Deck<BlackCard>,
    white: Deck<WhiteCard>,
    black_card: Option<BlackCard>,
    submissions: Vec<Submission>,
    round: u32,
    phase: Phase,
    rng: GameRng,
}

impl CardsAgainstHumanity {
    /// Seat the players, shuffle both decks and pick a random first judge.
    pub fn new(players: Vec<Identity>, content: CahContent, config: CahConfig, seed: u64) -> Result<Self, SessionError> {
        if players.len() < config.min_players {
            return Err(SessionError::NotEnoughPlayers {
                needed: config.min_players,
                found: players.len(),
            });
        }
        if let Some(dup) = first_duplicate(&players) {
            return Err(SessionError::DuplicatePlayer(dup.to_string()));
        }
        if content.black.is_empty() {
            return Err(ContentError::EmptyDeck("black card").into());
        }
        if content.white.is_empty() {
            return Err(ContentError::EmptyDeck("white card").into());
        }

        let mut rng = GameRng::new(seed);
        let mut deck_rng = rng.for_context("decks");
        let mut roster = Roster::new(players.into_iter().map(CahPlayer::new).collect());
        let first_judge = rng.gen_range_usize(0..roster.len());
        roster.set_current(first_judge);

        Ok(Self {
            config,
            players: roster,
            black: Deck::shuffled(content.black, &mut deck_rng),
            white: Deck::shuffled(content.white, &mut deck_rng),
            black_card: None,
            submissions: Vec::new(),
            round: 1,
            phase: Phase::Dealing,
            rng,
        })
    }

    /// Like `new`, fetching both decks from `source`.
    pub fn from_source(
        players: Vec<Identity>,
        source: &dyn CardSource,
        config: CahConfig,
        seed: u64,
    ) -> Result<Self, SessionError> {
        let content = source.fetch_cah()?;
        Self::new(players, content, config, seed)
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn judge(&self) -> &Identity {
        self.players.current_identity()
    }

    #[must_use]
    pub fn judge_index(&self) -> usize {
        self.players.current_index()
    }

    #[must_use]
    pub fn black_card(&self) -> Option<&BlackCard> {
        self.black_card.as_ref()
    }

    pub fn players(&self) -> impl Iterator<Item = &CahPlayer> {
        self.players.iter()
    }

    #[must_use]
    pub fn player(&self, who: &Identity) -> Option<&CahPlayer> {
        self.players.find(who)
    }

    /// Submissions so far. Once judging starts they are in shuffled order.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Every non-judge has submitted.
    #[must_use]
    pub fn ready_to_judge(&self) -> bool {
        self.players.len() > 1 && self.submissions.len() == self.players.len() - 1
    }

    /// `(player, score)` pairs, highest score first.
    #[must_use]
    pub fn scoreboard(&self) -> Vec<(&Identity, u32)> {
        let mut board: Vec<_> = self.players.iter().map(|p| (&p.identity, p.score)).collect();
        board.sort_by(|a, b| b.1.cmp(&a.1));
        board
    }

    fn finish(&mut self, end: CahEnd) {
        log::info!("cards against humanity ended after round {}: {:?}", self.round, end);
        self.phase = Phase::Finished(end);
    }

    /// Draw the black card and top up every non-judge's hand.
    pub fn start_round(&mut self) -> RoundStart {
        match &self.phase {
            Phase::Dealing => {}
            Phase::Finished(end) => return RoundStart::Finished(end.clone()),
            Phase::Collecting | Phase::Judging => return RoundStart::InProgress,
        }

        let Some(black) = self.black.draw() else {
            log::warn!("black card deck exhausted");
            self.finish(CahEnd::OutOfCards);
            return RoundStart::Finished(CahEnd::OutOfCards);
        };

        let pick = black.pick();
        let target = if pick > 1 { self.config.hand_size + pick } else { self.config.hand_size };
        let judge = self.players.current_index();
        let mut short = false;
        for idx in 0..self.players.len() {
            let player = &mut self.players[idx];
            player.selection.clear();
            player.submitted = false;
            if idx == judge {
                continue;
            }
            let missing = target.saturating_sub(player.hand.len());
            player.hand.extend(self.white.draw_many(missing));
            short |= player.hand.len() < pick;
        }
        if short {
            log::warn!("white card deck exhausted");
            self.finish(CahEnd::OutOfCards);
            return RoundStart::Finished(CahEnd::OutOfCards);
        }

        log::debug!("round {} judged by {}", self.round, self.judge());
        self.submissions.clear();
        self.black_card = Some(black.clone());
        self.phase = Phase::Collecting;
        RoundStart::Started {
            round: self.round,
            judge: self.judge().clone(),
            black,
        }
    }

    /// Pick the card at `index` in `who`'s hand for this round's submission.
    ///
    /// The submission is locked in once the black card's pick count is
    /// reached; the chosen cards leave the hand for good.
    pub fn select_card(&mut self, who: &Identity, index: usize) -> Selection {
        if self.phase != Phase::Collecting {
            return Selection::Rejected(SelectRejection::NotCollecting);
        }
        let Some(seat) = self.players.position(who) else {
            return Selection::Rejected(SelectRejection::NotInGame);
        };
        if seat == self.players.current_index() {
            return Selection::Rejected(SelectRejection::IsJudge);
        }
        let pick = self.black_card.as_ref().map_or(1, BlackCard::pick);

        let player = &mut self.players[seat];
        if player.submitted {
            return Selection::Rejected(SelectRejection::AlreadySubmitted);
        }
        if index >= player.hand.len() {
            return Selection::Rejected(SelectRejection::NoSuchCard);
        }
        if player.selection.contains(&index) {
            return Selection::Rejected(SelectRejection::AlreadyChosen);
        }

        player.selection.push(index);
        if player.selection.len() < pick {
            return Selection::Chosen {
                remaining: pick - player.selection.len(),
            };
        }

        let cards: CardPicks<WhiteCard> = player.selection.iter().map(|&i| player.hand[i].clone()).collect();
        let mut indices = player.selection.clone();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for i in indices {
            player.hand.remove(i);
        }
        player.submitted = true;
        self.submissions.push(Submission {
            player: player.identity.clone(),
            cards,
        });

        let all_in = self.check_all_in();
        Selection::Submitted { all_in }
    }

    /// Move to judging if every non-judge has submitted.
    fn check_all_in(&mut self) -> bool {
        if self.phase == Phase::Collecting && self.ready_to_judge() {
            self.rng.shuffle(&mut self.submissions);
            self.phase = Phase::Judging;
            log::debug!("round {}: all {} submissions in", self.round, self.submissions.len());
            true
        } else {
            false
        }
    }

    /// Remove a player mid-game.
    ///
    /// A leaving judge hands the role to the next seat; if that player had
    /// already submitted, their submission is withdrawn and their cards are
    /// gone with it.
    pub fn leave(&mut self, who: &Identity) -> Departure {
        if matches!(self.phase, Phase::Finished(_)) {
            return Departure::NotInGame;
        }
        let Some(seat) = self.players.position(who) else {
            return Departure::NotInGame;
        };
        let was_judge = seat == self.players.current_index();
        self.players.remove(seat);
        self.submissions.retain(|s| s.player != *who);
        log::debug!("{} left the game", who);

        if self.players.len() < self.config.min_players {
            self.finish(CahEnd::NotEnoughPlayers);
            return Departure::GameEnded;
        }

        if was_judge {
            let judge = self.players.current_identity().clone();
            self.submissions.retain(|s| s.player != judge);
            let new_judge = self.players.current_mut();
            new_judge.selection.clear();
            new_judge.submitted = false;
            if self.phase == Phase::Judging {
                self.phase = Phase::Collecting;
            }
            self.check_all_in();
            Departure::JudgeReplaced { judge }
        } else {
            self.check_all_in();
            Departure::Removed
        }
    }

    /// The judge picks the winning submission by its index in `submissions()`.
    pub fn judge_choose(&mut self, index: usize) -> Judgement {
        if self.phase != Phase::Judging {
            return Judgement::Rejected(JudgeRejection::NotJudging);
        }
        if index >= self.submissions.len() {
            return Judgement::Rejected(JudgeRejection::NoSuchSubmission);
        }

        let winning = self.submissions.swap_remove(index);
        self.submissions.clear();
        self.black_card = None;

        let score = match self.players.find_mut(&winning.player) {
            Some(p) => {
                p.score += 1;
                p.score
            }
            None => 0,
        };
        self.players.advance(1);
        self.round += 1;

        if score >= self.config.winning_score {
            self.finish(CahEnd::Winner(winning.player.clone()));
            Judgement::GameWon {
                winner: winning.player,
                cards: winning.cards,
                score,
            }
        } else {
            self.phase = Phase::Dealing;
            Judgement::RoundWon {
                winner: winning.player,
                cards: winning.cards,
                score,
            }
        }
    }

    /// Terminal result, `None` while the game is still going.
    ///
    /// Running out of cards ranks the table by score.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        let Phase::Finished(end) = &self.phase else {
            return None;
        };
        Some(match end {
            CahEnd::Winner(p) => GameResult::Winner(p.clone()),
            CahEnd::NotEnoughPlayers => GameResult::Abandoned,
            CahEnd::OutOfCards => {
                let best = self.players.iter().map(|p| p.score).max().unwrap_or(0);
                let mut leaders: Vec<Identity> = self
                    .players
                    .iter()
                    .filter(|p| p.score == best)
                    .map(|p| p.identity.clone())
                    .collect();
                match (best, leaders.len()) {
                    (0, _) => GameResult::Draw,
                    (_, 1) => GameResult::Winner(leaders.remove(0)),
                    _ => GameResult::Winners(leaders),
                }
            }
        })
    }
}
