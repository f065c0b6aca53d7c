//! Word scrambling for guessing games.
//!
//! A level word is shuffled, uppercased, and broken up with spaces at
//! pseudo-random intervals so the original word boundaries give nothing
//! away. Only the letters matter: the multiset of non-space characters in
//! the output always equals the (case-normalized) input letters.
//!
//! The shuffle can, rarely, reproduce the original order. That is
//! accepted: a "SPOON" that still reads "SPOON" is a fast round, not a bug.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Spacing knobs for the scrambled display string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Minimum consecutive characters before a space may be inserted.
    pub min_run: usize,
    /// Chance of inserting a space at each candidate point.
    pub space_probability: f64,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            min_run: 3,
            space_probability: 0.4,
        }
    }
}

impl ScrambleConfig {
    /// Create the default config: runs of 3+, 40% insertion chance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum run length before a space may appear.
    #[must_use]
    pub fn with_min_run(mut self, min_run: usize) -> Self {
        self.min_run = min_run;
        self
    }

    /// Set the per-candidate space insertion probability.
    #[must_use]
    pub fn with_space_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "probability must be in [0, 1]"
        );
        self.space_probability = probability;
        self
    }
}

/// Scramble a word with the default spacing config.
///
/// ```
/// use parlor::core::GameRng;
/// use parlor::scramble::scramble;
///
/// let mut rng = GameRng::new(42);
/// let display = scramble("pineapple", &mut rng);
///
/// let mut letters: Vec<char> = display.chars().filter(|c| *c != ' ').collect();
/// letters.sort_unstable();
/// assert_eq!(letters, vec!['A', 'E', 'E', 'I', 'L', 'N', 'P', 'P', 'P']);
/// ```
#[must_use]
pub fn scramble(word: &str, rng: &mut GameRng) -> String {
    scramble_with(word, &ScrambleConfig::default(), rng)
}

/// Scramble a word: strip whitespace, shuffle, uppercase, re-space.
///
/// Spaces are inserted after a run of at least `min_run` characters with
/// `space_probability` per candidate point, never trailing and never
/// doubled. Empty or whitespace-only input yields an empty string; callers
/// substitute a fallback word first (see `levels::pick_word`).
#[must_use]
pub fn scramble_with(word: &str, config: &ScrambleConfig, rng: &mut GameRng) -> String {
    let mut chars: Vec<char> = word.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return String::new();
    }

    rng.shuffle(&mut chars);

    let mut display = String::with_capacity(chars.len() * 2);
    let mut run_length = 0;
    for (i, ch) in chars.iter().enumerate() {
        for upper in ch.to_uppercase() {
            display.push(upper);
        }
        run_length += 1;

        let remaining = chars.len() - i - 1;
        if remaining > 0 && run_length >= config.min_run && rng.gen_bool(config.space_probability) {
            display.push(' ');
            run_length = 0;
        }
    }

    display
}
