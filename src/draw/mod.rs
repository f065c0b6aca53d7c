//! Simple randomizers: dice, coins, number ranges, first letters.
//!
//! Each draw is a single pure function over an explicit RNG. The screens
//! wrap these in rapid-fire "spinning" animations, but only the final
//! call's value is ever shown as the result.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;

/// The two sides of a fair coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "Heads"),
            CoinFace::Tails => write!(f, "Tails"),
        }
    }
}

/// Roll one six-sided die, 1..=6.
#[must_use]
pub fn roll_die(rng: &mut GameRng) -> u8 {
    rng.gen_range(1..7) as u8
}

/// Roll one or two dice. `count` is clamped to 1..=2, matching the
/// screen's die-count toggle.
#[must_use]
pub fn roll_dice(rng: &mut GameRng, count: usize) -> SmallVec<[u8; 2]> {
    (0..count.clamp(1, 2)).map(|_| roll_die(rng)).collect()
}

/// Flip a fair coin.
#[must_use]
pub fn flip_coin(rng: &mut GameRng) -> CoinFace {
    if rng.gen_bool(0.5) {
        CoinFace::Heads
    } else {
        CoinFace::Tails
    }
}

/// Uniform integer in `min..=max`.
///
/// Swapped bounds are normalized first, so (100, 1) draws from 1..=100.
#[must_use]
pub fn roll_range(rng: &mut GameRng, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if low == high {
        return low;
    }
    low + rng.gen_range(0..high - low + 1)
}

/// Uniform uppercase letter, 'A'..='Z'.
#[must_use]
pub fn random_letter(rng: &mut GameRng) -> char {
    (b'A' + rng.gen_range_usize(0..26) as u8) as char
}
