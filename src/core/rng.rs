//! Deterministic random number generation for game sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: Hand an independent stream to an AI policy
//! - **Context streams**: Independent sequences for different purposes
//!   (deck shuffling vs. spins)
//!
//! ## Usage
//!
//! ```
//! use minigames::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // The spinner used by the Game of Life
//! let spin = rng.spin();
//! assert!((1..=10).contains(&spin));
//!
//! // Deck shuffling gets its own stream
//! let mut decks = rng.for_context("decks");
//! let mut cards = vec![1, 2, 3, 4];
//! decks.shuffle(&mut cards);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Lowest value on the spinner.
pub const SPIN_MIN: u8 = 1;

/// Highest value on the spinner.
pub const SPIN_MAX: u8 = 10;

/// Deterministic RNG owned by one game session.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// Sessions never share an RNG, so two games never influence each other.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Spin the wheel: one uniform draw in `1..=10`.
    pub fn spin(&mut self) -> u8 {
        self.inner.gen_range(SPIN_MIN..=SPIN_MAX)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Choose a random index into a collection of `len` elements.
    ///
    /// Returns `None` when the collection is empty.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.spin(), rng2.spin());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_spin_covers_whole_wheel() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 10];

        for _ in 0..1000 {
            let spin = rng.spin();
            assert!((SPIN_MIN..=SPIN_MAX).contains(&spin));
            seen[usize::from(spin - 1)] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("decks");
        let mut ctx2 = GameRng::new(42).for_context("decks");
        let mut other = GameRng::new(42).for_context("spins");

        let seq1: Vec<_> = (0..10).map(|_| ctx1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| ctx2.gen_range_usize(0..1000)).collect();
        let seq3: Vec<_> = (0..10).map(|_| other.gen_range_usize(0..1000)).collect();

        assert_eq!(seq1, seq2);
        assert_ne!(seq1, seq3);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);
        assert_ne!(data, original);

        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose_index() {
        let mut rng = GameRng::new(42);

        assert_eq!(rng.choose_index(0), None);
        for _ in 0..20 {
            let idx = rng.choose_index(3).unwrap();
            assert!(idx < 3);
        }
    }
}
