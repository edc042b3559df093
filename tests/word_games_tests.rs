//! Hangman and Scramble tests, including sessions built from a word source.

use minigames::content::{StaticContent, WordEntry, HANGMAN_WORDS, SCRAMBLE_WORDS};
use minigames::core::{GameResult, GameRng, HangmanConfig, Identity, ScrambleConfig};
use minigames::error::ContentError;
use minigames::games::{scramble_word, Guess, GuessRejection, Hangman, Scramble, ScrambleDifficulty, ScrambleGuess};
use proptest::prelude::*;

fn player() -> Identity {
    Identity::user(7, "wordsmith")
}

fn sorted(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

// =============================================================================
// Hangman
// =============================================================================

/// Letter by letter to a win.
#[test]
fn test_hangman_letters_win() {
    let mut game = Hangman::new(player(), "Cat", HangmanConfig::default());
    assert_eq!(game.make_guess("c"), Guess::Correct);
    assert_eq!(game.make_guess("A"), Guess::Correct);
    assert_eq!(game.make_guess("t"), Guess::Won);
    assert_eq!(game.guesses(), 3);
    assert_eq!(game.fails(), 0);
    assert_eq!(game.outcome(), Some(GameResult::Winner(player())));
    assert_eq!(game.make_guess("x"), Guess::Rejected(GuessRejection::GameOver));
}

/// Running out of fails hands the game to the house.
#[test]
fn test_hangman_failure() {
    let mut game = Hangman::new(player(), "cat", HangmanConfig::default().with_max_fails(3));
    assert_eq!(game.make_guess("x"), Guess::Incorrect);
    // a wrong multi-letter guess costs a fail too
    assert_eq!(game.make_guess("dog"), Guess::Incorrect);
    assert_eq!(game.make_guess("z"), Guess::Failed);
    assert_eq!(game.outcome(), Some(GameResult::Winner(Identity::ai(1))));
}

/// Rejected guesses change nothing.
#[test]
fn test_hangman_rejections() {
    let mut game = Hangman::new(player(), "ice cream", HangmanConfig::default());
    assert_eq!(game.make_guess("3"), Guess::Rejected(GuessRejection::NotAlpha));
    assert_eq!(game.make_guess(""), Guess::Rejected(GuessRejection::NotAlpha));
    assert_eq!(game.make_guess("e"), Guess::Correct);
    assert_eq!(game.make_guess("e"), Guess::Rejected(GuessRejection::AlreadyGuessed));
    assert_eq!(game.guesses(), 1);

    // the whole phrase, space and all
    assert_eq!(game.make_guess("Ice Cream"), Guess::Word);
    assert!(game.outcome().is_some());
}

#[test]
fn test_hangman_from_source() {
    let source = StaticContent::new().with_words(HANGMAN_WORDS, vec![WordEntry::new("Otter")]);
    let game = Hangman::from_source(player(), &source, HangmanConfig::default(), &mut GameRng::new(1)).unwrap();
    assert_eq!(game.word(), "otter");

    let empty = StaticContent::new();
    let err = Hangman::from_source(player(), &empty, HangmanConfig::default(), &mut GameRng::new(1)).unwrap_err();
    assert!(matches!(err, ContentError::EmptyWordList(_)));
}

// =============================================================================
// Scramble
// =============================================================================

#[test]
fn test_scramble_hint_then_solve() {
    let entry = WordEntry::new("Apple").with_hint("A Fruit");
    let mut game = Scramble::new(player(), entry, ScrambleDifficulty::Normal, ScrambleConfig::default(), 5);
    assert_eq!(sorted(game.scrambled()), sorted("apple"));

    assert_eq!(game.make_guess("Hint Please"), ScrambleGuess::Hint("a fruit".to_string()));
    assert_eq!(game.hints_used(), 1);
    assert_eq!(game.make_guess("pear"), ScrambleGuess::Incorrect);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.make_guess(" APPLE "), ScrambleGuess::Correct);
    assert_eq!(game.outcome(), Some(GameResult::Winner(player())));
    assert_eq!(game.make_guess("apple"), ScrambleGuess::GameOver);
}

#[test]
fn test_scramble_without_hints() {
    let config = ScrambleConfig::default().with_hint_phrase("help");
    let mut game = Scramble::new(player(), WordEntry::new("kiwi"), ScrambleDifficulty::Expert, config, 5);
    assert_eq!(game.make_guess("help"), ScrambleGuess::NoHints);
    assert_eq!(game.hints_used(), 0);
}

#[test]
fn test_scramble_from_source() {
    let source = StaticContent::new().with_words(SCRAMBLE_WORDS, vec![WordEntry::new("ice cream")]);
    let game = Scramble::from_source(
        player(),
        &source,
        ScrambleDifficulty::Normal,
        ScrambleConfig::default(),
        2,
    )
    .unwrap();
    assert_eq!(game.word(), "ice cream");
    // normal difficulty keeps the word boundaries
    assert_eq!(game.scrambled().split(' ').map(str::len).collect::<Vec<_>>(), vec![3, 5]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Scrambling only reorders characters; normal mode keeps word lengths.
    #[test]
    fn prop_scramble_is_permutation(phrase in "[a-z]{1,8}( [a-z]{1,8}){0,3}", seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let expert = scramble_word(&phrase, ScrambleDifficulty::Expert, &mut rng);
        prop_assert_eq!(sorted(&expert), sorted(&phrase));

        let normal = scramble_word(&phrase, ScrambleDifficulty::Normal, &mut rng);
        prop_assert_eq!(sorted(&normal), sorted(&phrase));
        let lengths = |s: &str| s.split(' ').map(str::len).collect::<Vec<_>>();
        prop_assert_eq!(lengths(&normal), lengths(&phrase));
    }

    /// Guessing each distinct letter of the word wins without a single fail.
    #[test]
    fn prop_hangman_distinct_letters_win(word in "[a-z]{1,12}") {
        let mut game = Hangman::new(player(), &word, HangmanConfig::default());
        let mut seen = Vec::new();
        let mut last = None;
        for c in word.chars() {
            if !seen.contains(&c) {
                seen.push(c);
                last = Some(game.make_guess(&c.to_string()));
            }
        }
        prop_assert!(matches!(last, Some(Guess::Won | Guess::Word)));
        prop_assert_eq!(game.fails(), 0);
        prop_assert_eq!(game.outcome(), Some(GameResult::Winner(player())));
    }

    /// Fails never exceed the limit, whatever gets guessed.
    #[test]
    fn prop_hangman_fail_bound(word in "[a-z]{3,10}", guesses in prop::collection::vec("[a-z0-9]{1,2}", 0..40)) {
        let config = HangmanConfig::default();
        let max = config.max_fails;
        let mut game = Hangman::new(player(), &word, config);
        for g in &guesses {
            game.make_guess(g);
            prop_assert!(game.fails() <= max);
        }
    }
}
