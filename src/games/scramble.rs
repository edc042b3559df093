//! Scramble: unscramble a word or phrase.
//!
//! Normal difficulty shuffles each word in place and keeps word order;
//! expert shuffles the whole phrase, spaces included. Hints are drawn with
//! replacement, so the same hint can come up twice.

use serde::{Deserialize, Serialize};

use crate::content::{WordEntry, WordSource, SCRAMBLE_WORDS};
use crate::core::{GameResult, GameRng, Identity, ScrambleConfig};
use crate::error::ContentError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrambleDifficulty {
    /// Each word scrambled on its own.
    #[default]
    Normal,
    /// The whole phrase scrambled as one token.
    Expert,
}

/// Result of one guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrambleGuess {
    Correct,
    Incorrect,
    /// The guess was a hint request.
    Hint(String),
    /// The guess was a hint request but this word has no hints.
    NoHints,
    /// Already solved; nothing changes.
    GameOver,
}

/// Random permutation of `word`'s characters.
///
/// Repeatedly picks a uniformly random remaining character, so every
/// ordering is equally likely.
pub fn scramble_word(word: &str, difficulty: ScrambleDifficulty, rng: &mut GameRng) -> String {
    match difficulty {
        ScrambleDifficulty::Normal => word
            .split(' ')
            .map(|w| scramble_word(w, ScrambleDifficulty::Expert, rng))
            .collect::<Vec<_>>()
            .join(" "),
        ScrambleDifficulty::Expert => {
            let mut remaining: Vec<char> = word.chars().collect();
            let mut scrambled = String::with_capacity(word.len());
            while let Some(idx) = rng.choose_index(remaining.len()) {
                scrambled.push(remaining.swap_remove(idx));
            }
            scrambled
        }
    }
}

/// A Scramble session for one player.
#[derive(Clone, Debug)]
pub struct Scramble {
    player: Identity,
    config: ScrambleConfig,
    difficulty: ScrambleDifficulty,
    word: String,
    scrambled: String,
    hints: Vec<String>,
    hints_used: u32,
    solved: bool,
    rng: GameRng,
}

impl Scramble {
    /// Start a game on a known entry.
    pub fn new(
        player: Identity,
        entry: WordEntry,
        difficulty: ScrambleDifficulty,
        config: ScrambleConfig,
        seed: u64,
    ) -> Self {
        let mut rng = GameRng::new(seed);
        let word = entry.value.to_lowercase();
        let scrambled = scramble_word(&word, difficulty, &mut rng);
        Self {
            player,
            config,
            difficulty,
            word,
            scrambled,
            hints: entry.hints,
            hints_used: 0,
            solved: false,
            rng,
        }
    }

    /// Start a game on a random entry from `source`.
    pub fn from_source(
        player: Identity,
        source: &dyn WordSource,
        difficulty: ScrambleDifficulty,
        config: ScrambleConfig,
        seed: u64,
    ) -> Result<Self, ContentError> {
        let entry = source.pick_word(SCRAMBLE_WORDS, &mut GameRng::new(seed).for_context("words"))?;
        Ok(Self::new(player, entry, difficulty, config, seed))
    }

    #[must_use]
    pub fn player(&self) -> &Identity {
        &self.player
    }

    #[must_use]
    pub fn difficulty(&self) -> ScrambleDifficulty {
        self.difficulty
    }

    /// The answer, lowercased.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// What the player sees.
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Check a guess, or hand out a hint if the guess asks for one.
    pub fn make_guess(&mut self, guess: &str) -> ScrambleGuess {
        if self.solved {
            return ScrambleGuess::GameOver;
        }
        let guess = guess.trim().to_lowercase();

        if self.config.hint_phrases.iter().any(|p| *p == guess) {
            return match self.rng.choose(&self.hints) {
                Some(hint) => {
                    self.hints_used += 1;
                    ScrambleGuess::Hint(hint.to_lowercase())
                }
                None => ScrambleGuess::NoHints,
            };
        }

        if guess == self.word {
            log::info!("{} unscrambled {:?} with {} hints", self.player, self.word, self.hints_used);
            self.solved = true;
            ScrambleGuess::Correct
        } else {
            ScrambleGuess::Incorrect
        }
    }

    /// `Some` once solved. Giving up is the orchestrator's call.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.solved.then(|| GameResult::Winner(self.player.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_normal_keeps_word_boundaries() {
        let mut rng = GameRng::new(3);
        let scrambled = scramble_word("ping pong ball", ScrambleDifficulty::Normal, &mut rng);
        let words: Vec<_> = scrambled.split(' ').collect();

        assert_eq!(words.len(), 3);
        assert_eq!(sorted(words[0]), sorted("ping"));
        assert_eq!(sorted(words[1]), sorted("pong"));
        assert_eq!(sorted(words[2]), sorted("ball"));
    }

    #[test]
    fn test_expert_is_permutation() {
        let mut rng = GameRng::new(3);
        let scrambled = scramble_word("ping pong", ScrambleDifficulty::Expert, &mut rng);
        assert_eq!(sorted(&scrambled), sorted("ping pong"));
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let entry = WordEntry::new("Apple");
        let mut game = Scramble::new(Identity::user(1, "a"), entry, ScrambleDifficulty::Normal, ScrambleConfig::default(), 1);

        assert_eq!(game.make_guess("pear"), ScrambleGuess::Incorrect);
        assert_eq!(game.make_guess("APPLE"), ScrambleGuess::Correct);
        assert!(game.outcome().is_some());
    }

    #[test]
    fn test_guesses_after_solving() {
        let entry = WordEntry::new("apple").with_hint("a fruit");
        let mut game = Scramble::new(Identity::user(1, "a"), entry, ScrambleDifficulty::Normal, ScrambleConfig::default(), 1);

        assert_eq!(game.make_guess("apple"), ScrambleGuess::Correct);
        assert_eq!(game.make_guess("apple"), ScrambleGuess::GameOver);
        assert_eq!(game.make_guess("hint"), ScrambleGuess::GameOver);
        assert_eq!(game.hints_used(), 0);
    }

    #[test]
    fn test_hints_reused() {
        let entry = WordEntry::new("apple").with_hint("A Fruit");
        let mut game = Scramble::new(Identity::user(1, "a"), entry, ScrambleDifficulty::Normal, ScrambleConfig::default(), 1);

        assert_eq!(game.make_guess("hint"), ScrambleGuess::Hint("a fruit".into()));
        assert_eq!(game.make_guess("Hint Please"), ScrambleGuess::Hint("a fruit".into()));
        assert_eq!(game.hints_used(), 2);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_no_hints() {
        let entry = WordEntry::new("apple");
        let mut game = Scramble::new(Identity::user(1, "a"), entry, ScrambleDifficulty::Expert, ScrambleConfig::default(), 1);
        assert_eq!(game.make_guess("i need a hint"), ScrambleGuess::NoHints);
        assert_eq!(game.hints_used(), 0);
    }
}
