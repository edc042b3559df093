//! Hangman: guess a word or phrase one letter at a time.
//!
//! The target is lowercased on construction and guesses are compared
//! case-insensitively. Non-letter characters in the target (spaces,
//! hyphens, apostrophes) are shown from the start and never need guessing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::content::{WordSource, HANGMAN_WORDS};
use crate::core::{GameResult, GameRng, HangmanConfig, Identity};
use crate::error::ContentError;

/// Why a guess was refused. Nothing about the game changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessRejection {
    /// The guess contains something other than letters.
    NotAlpha,
    /// The letter was guessed before.
    AlreadyGuessed,
    /// The game is over.
    GameOver,
}

/// Result of one guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    /// New letter found in the word.
    Correct,
    /// New letter not in the word; the fail counter went up.
    Incorrect,
    /// That letter completed the word.
    Won,
    /// The whole phrase was guessed at once.
    Word,
    /// The fail counter hit the limit.
    Failed,
    Rejected(GuessRejection),
}

impl Guess {
    /// Did this guess end the game?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Word | Self::Failed)
    }
}

/// A Hangman session for one player.
#[derive(Clone, Debug)]
pub struct Hangman {
    player: Identity,
    config: HangmanConfig,
    word: String,
    guessed: Vec<String>,
    found: FxHashSet<char>,
    fails: u8,
    guesses: u32,
    finished: Option<Guess>,
}

impl Hangman {
    /// Start a game on a known word.
    pub fn new(player: Identity, word: &str, config: HangmanConfig) -> Self {
        Self {
            player,
            config,
            word: word.to_lowercase(),
            guessed: Vec::new(),
            found: FxHashSet::default(),
            fails: 0,
            guesses: 0,
            finished: None,
        }
    }

    /// Start a game on a random word from `source`.
    pub fn from_source(
        player: Identity,
        source: &dyn WordSource,
        config: HangmanConfig,
        rng: &mut GameRng,
    ) -> Result<Self, ContentError> {
        let entry = source.pick_word(HANGMAN_WORDS, rng)?;
        Ok(Self::new(player, &entry.value, config))
    }

    #[must_use]
    pub fn player(&self) -> &Identity {
        &self.player
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn fails(&self) -> u8 {
        self.fails
    }

    /// Accepted guesses so far (right or wrong).
    #[must_use]
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Letters and words guessed so far, in order.
    #[must_use]
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    /// Every letter of the word has been found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.word
            .chars()
            .all(|c| !c.is_alphabetic() || self.found.contains(&c))
    }

    /// Guess a letter or the whole phrase.
    pub fn make_guess(&mut self, guess: &str) -> Guess {
        if self.finished.is_some() {
            return Guess::Rejected(GuessRejection::GameOver);
        }
        let guess = guess.trim().to_lowercase();

        if guess == self.word {
            self.guesses += 1;
            return self.finish(Guess::Word);
        }
        if guess.is_empty() || !guess.chars().all(char::is_alphabetic) {
            return Guess::Rejected(GuessRejection::NotAlpha);
        }
        if self.guessed.contains(&guess) {
            return Guess::Rejected(GuessRejection::AlreadyGuessed);
        }

        self.guesses += 1;
        let mut letters = guess.chars();
        let single = match (letters.next(), letters.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        self.guessed.push(guess);

        match single {
            Some(letter) if self.word.contains(letter) => {
                self.found.insert(letter);
                if self.is_solved() {
                    self.finish(Guess::Won)
                } else {
                    Guess::Correct
                }
            }
            _ => {
                self.fails += 1;
                if self.fails >= self.config.max_fails {
                    self.finish(Guess::Failed)
                } else {
                    Guess::Incorrect
                }
            }
        }
    }

    fn finish(&mut self, result: Guess) -> Guess {
        log::info!("hangman for {} ended: {:?} after {} guesses", self.player, result, self.guesses);
        self.finished = Some(result);
        result
    }

    /// Terminal result, `None` while the game is still going.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        match self.finished? {
            // the house wins a failed game
            Guess::Failed => Some(GameResult::Winner(Identity::ai(1))),
            _ => Some(GameResult::Winner(self.player.clone())),
        }
    }

    /// The word with unfound letters as `_`, characters separated by spaces.
    ///
    /// `"half-asleep"` with nothing found renders as `"_ _ _ _ - _ _ _ _ _ _"`.
    #[must_use]
    pub fn masked_word(&self) -> String {
        let chars: Vec<String> = self
            .word
            .chars()
            .map(|c| {
                if c.is_alphabetic() && !self.found.contains(&c) {
                    "_".to_string()
                } else {
                    c.to_string()
                }
            })
            .collect();
        chars.join(" ")
    }

    /// ASCII gallows for the current fail count.
    #[must_use]
    pub fn gallows(&self) -> String {
        let limit = self.config.max_fails.max(1);
        // Scale the eight drawing stages onto the configured limit.
        let stage = usize::from(self.fails) * 8 / usize::from(limit);
        let part = |n: usize, s: &'static str| if stage >= n { s } else { " " };
        let plate = if stage >= 8 { "DEAD" } else { "    " };

        [
            "+----+    ".to_string(),
            "|    |    ".to_string(),
            format!("|    {}    ", part(1, "0")),
            format!("|   {}{}{}   ", part(3, "\\"), part(2, "|"), part(4, "/")),
            format!("|    {}    ", part(5, "|")),
            format!("|   {} {}   ", part(6, "/"), part(7, "\\")),
            "|         ".to_string(),
            "+--------+".to_string(),
            format!("|  {}  |", plate),
            "+--------+".to_string(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> Hangman {
        Hangman::new(Identity::user(1, "alice"), word, HangmanConfig::default())
    }

    #[test]
    fn test_cat() {
        let mut h = game("cat");
        assert_eq!(h.make_guess("c"), Guess::Correct);
        assert_eq!(h.make_guess("a"), Guess::Correct);
        assert_eq!(h.make_guess("t"), Guess::Won);
        assert_eq!(h.outcome(), Some(GameResult::Winner(Identity::user(1, "alice"))));
    }

    #[test]
    fn test_rejections_leave_state() {
        let mut h = game("cat");
        assert_eq!(h.make_guess("1"), Guess::Rejected(GuessRejection::NotAlpha));
        assert_eq!(h.make_guess("x"), Guess::Incorrect);
        assert_eq!(h.make_guess("X"), Guess::Rejected(GuessRejection::AlreadyGuessed));
        assert_eq!(h.fails(), 1);
        assert_eq!(h.guesses(), 1);
    }

    #[test]
    fn test_whole_phrase() {
        let mut h = game("Ping Pong");
        assert_eq!(h.make_guess("ping pong"), Guess::Word);
        assert_eq!(h.make_guess("p"), Guess::Rejected(GuessRejection::GameOver));
    }

    #[test]
    fn test_wrong_word_counts_as_fail() {
        let mut h = game("cat");
        assert_eq!(h.make_guess("dog"), Guess::Incorrect);
        assert_eq!(h.fails(), 1);
    }

    #[test]
    fn test_fails_out() {
        let mut h = game("a");
        for letter in ["b", "c", "d", "e", "f", "g", "h"] {
            assert_eq!(h.make_guess(letter), Guess::Incorrect);
        }
        assert_eq!(h.make_guess("i"), Guess::Failed);
        assert_eq!(h.outcome(), Some(GameResult::Winner(Identity::ai(1))));
    }

    #[test]
    fn test_masked_word() {
        let mut h = game("half-asleep");
        assert_eq!(h.masked_word(), "_ _ _ _ - _ _ _ _ _ _");
        h.make_guess("a");
        assert_eq!(h.masked_word(), "_ a _ _ - a _ _ _ _ _");
    }

    #[test]
    fn test_gallows_stages() {
        let mut h = game("a");
        assert!(!h.gallows().contains('0'));

        h.make_guess("b");
        assert!(h.gallows().contains("|    0    "));

        for letter in ["c", "d", "e", "f", "g", "h", "i"] {
            h.make_guess(letter);
        }
        let art = h.gallows();
        assert!(art.contains("|   \\|/   "));
        assert!(art.contains("|   / \\   "));
        assert!(art.contains("DEAD"));
    }
}
