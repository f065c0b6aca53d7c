//! Role deck construction: expand counts into cards, shuffle, freeze.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Role → count mapping with stable insertion order.
///
/// Order matters: expanding in insertion order (rather than hash order)
/// means a fixed RNG seed reproduces the exact same deck, which keeps
/// seeded replays and tests deterministic.
///
/// Counts come from bounded +/- counters on a settings screen, so edits
/// saturate at zero instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    entries: Vec<(String, u32)>,
}

impl RoleCounts {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a role's count, keeping its original position if it exists.
    pub fn set(&mut self, role: impl Into<String>, count: u32) {
        let role = role.into();
        match self.entries.iter_mut().find(|(name, _)| *name == role) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((role, count)),
        }
    }

    /// Builder-style `set`.
    #[must_use]
    pub fn with(mut self, role: impl Into<String>, count: u32) -> Self {
        self.set(role, count);
        self
    }

    /// Adjust a role's count by a delta, saturating at zero.
    ///
    /// Mirrors the settings screen's +/- counter buttons. Unknown roles
    /// start from zero.
    pub fn adjust(&mut self, role: &str, delta: i32) {
        let current = self.count(role) as i64;
        let next = (current + i64::from(delta)).max(0) as u32;
        self.set(role, next);
    }

    /// A role's current count (zero if absent).
    #[must_use]
    pub fn count(&self, role: &str) -> u32 {
        self.entries
            .iter()
            .find(|(name, _)| name == role)
            .map_or(0, |(_, count)| *count)
    }

    /// Sum of all counts: the number of players at the table.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate roles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for RoleCounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (role, count) in iter {
            counts.set(role, count);
        }
        counts
    }
}

/// A flat, pre-shuffled sequence of role labels.
///
/// Built once per reveal round and immutable afterwards: consumption is a
/// cursor into an unchanging sequence (`RevealCursor`), never removal.
/// The persistent `Vector` makes cloning the deck into a cursor cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDeck {
    cards: Vector<String>,
}

impl RoleDeck {
    /// Expand counts into a deck and shuffle it.
    ///
    /// Each role appears exactly `count` times; the deck length equals the
    /// sum of counts; the order is a uniform random permutation. A total
    /// of zero yields an empty deck, which the reveal cursor treats as
    /// immediately done.
    #[must_use]
    pub fn build(counts: &RoleCounts, rng: &mut GameRng) -> Self {
        let mut cards: Vec<String> = Vec::with_capacity(counts.total() as usize);
        for (role, count) in counts.iter() {
            for _ in 0..count {
                cards.push(role.to_string());
            }
        }

        rng.shuffle(&mut cards);

        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cards.get(index).map(String::as_str)
    }

    /// Iterate cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(String::as_str)
    }
}
