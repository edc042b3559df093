//! Content collaborators: where words and cards come from.
//!
//! The engines never fetch anything themselves. A host implements
//! `WordSource` / `CardSource` over whatever backs it (a database, a REST
//! API, a JSON file) and hands the result to a session constructor. Content
//! is read once per session and only mutated in the session's own memory.
//!
//! ## Key Types
//!
//! - `WordEntry`: A word or phrase with optional hints
//! - `WordSource`: `fetch_words(category)`
//! - `CardSource`: `fetch_cah()` and `fetch_life()`
//! - `StaticContent`: In-memory source, loadable from JSON

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::ContentError;
use crate::games::cah::CahContent;
use crate::games::life::LifeContent;

/// Word list category used by Hangman.
pub const HANGMAN_WORDS: &str = "hangman";

/// Word list category used by Scramble.
pub const SCRAMBLE_WORDS: &str = "scramble";

/// A word or phrase for the word games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub value: String,
    #[serde(default)]
    pub hints: Vec<String>,
}

impl WordEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hints: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

/// Supplies word lists by category.
pub trait WordSource {
    fn fetch_words(&self, category: &str) -> Result<Vec<WordEntry>, ContentError>;

    /// One entry chosen uniformly at random.
    fn pick_word(&self, category: &str, rng: &mut GameRng) -> Result<WordEntry, ContentError> {
        let mut words = self.fetch_words(category)?;
        let idx = rng
            .choose_index(words.len())
            .ok_or_else(|| ContentError::EmptyWordList(category.to_string()))?;
        Ok(words.swap_remove(idx))
    }
}

/// Supplies card decks.
pub trait CardSource {
    fn fetch_cah(&self) -> Result<CahContent, ContentError>;
    fn fetch_life(&self) -> Result<LifeContent, ContentError>;
}

/// Content held in memory.
///
/// ```
/// use minigames::content::{StaticContent, WordSource, HANGMAN_WORDS};
///
/// let content = StaticContent::from_json(r#"{
///     "words": { "hangman": [{ "value": "ping pong" }] }
/// }"#).unwrap();
///
/// assert_eq!(content.fetch_words(HANGMAN_WORDS).unwrap()[0].value, "ping pong");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticContent {
    #[serde(default)]
    words: FxHashMap<String, Vec<WordEntry>>,
    #[serde(default)]
    cah: Option<CahContent>,
    #[serde(default)]
    life: Option<LifeContent>,
}

impl StaticContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document with optional `words`, `cah` and `life` keys.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_words(mut self, category: impl Into<String>, words: Vec<WordEntry>) -> Self {
        self.words.entry(category.into()).or_default().extend(words);
        self
    }

    #[must_use]
    pub fn with_cah(mut self, cah: CahContent) -> Self {
        self.cah = Some(cah);
        self
    }

    #[must_use]
    pub fn with_life(mut self, life: LifeContent) -> Self {
        self.life = Some(life);
        self
    }
}

impl WordSource for StaticContent {
    fn fetch_words(&self, category: &str) -> Result<Vec<WordEntry>, ContentError> {
        match self.words.get(category) {
            Some(words) if !words.is_empty() => Ok(words.clone()),
            _ => Err(ContentError::EmptyWordList(category.to_string())),
        }
    }
}

impl CardSource for StaticContent {
    fn fetch_cah(&self) -> Result<CahContent, ContentError> {
        self.cah.clone().ok_or(ContentError::Missing("cards against humanity"))
    }

    fn fetch_life(&self) -> Result<LifeContent, ContentError> {
        self.life.clone().ok_or(ContentError::Missing("game of life"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_word() {
        let content = StaticContent::new().with_words(
            SCRAMBLE_WORDS,
            vec![WordEntry::new("apple").with_hint("fruit"), WordEntry::new("pear")],
        );
        let mut rng = GameRng::new(1);

        let word = content.pick_word(SCRAMBLE_WORDS, &mut rng).unwrap();
        assert!(word.value == "apple" || word.value == "pear");
    }

    #[test]
    fn test_empty_category() {
        let content = StaticContent::new().with_words(HANGMAN_WORDS, Vec::new());
        let err = content.pick_word(HANGMAN_WORDS, &mut GameRng::new(1)).unwrap_err();
        assert!(matches!(err, ContentError::EmptyWordList(c) if c == HANGMAN_WORDS));
    }

    #[test]
    fn test_missing_decks() {
        let content = StaticContent::new();
        assert!(matches!(content.fetch_cah(), Err(ContentError::Missing(_))));
        assert!(matches!(content.fetch_life(), Err(ContentError::Missing(_))));
    }

    #[test]
    fn test_from_json() {
        let content = StaticContent::from_json(
            r#"{
                "words": { "scramble": [{ "value": "Apple", "hints": ["a fruit"] }] },
                "cah": { "black": [{ "text": "Why _?", "pick": 1 }], "white": ["Bees."] }
            }"#,
        )
        .unwrap();

        let words = content.fetch_words(SCRAMBLE_WORDS).unwrap();
        assert_eq!(words[0].hints, vec!["a fruit".to_string()]);
        assert_eq!(content.fetch_cah().unwrap().white.len(), 1);

        assert!(StaticContent::from_json("{ nope").is_err());
    }
}
