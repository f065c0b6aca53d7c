//! Per-player score tallies.
//!
//! The trivia and anagram screens keep one running count per player with
//! +/- buttons. Scores never go negative: the minus button bottoms out at
//! zero rather than tracking debt.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Fewest players a score row supports.
pub const MIN_PLAYERS: usize = 2;
/// Most players a score row fits on screen.
pub const MAX_PLAYERS: usize = 4;

/// Running scores for the players at the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreBoard {
    scores: PlayerMap<i64>,
}

impl ScoreBoard {
    /// Create a board with all scores at zero.
    ///
    /// The player count is clamped into `MIN_PLAYERS..=MAX_PLAYERS`, as
    /// the screens do with their `players` route parameter.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let player_count = player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        Self {
            scores: PlayerMap::with_value(player_count, 0),
        }
    }

    /// Number of players on the board.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.scores.player_count()
    }

    /// A player's current score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores[player]
    }

    /// Add one point.
    pub fn increment(&mut self, player: PlayerId) {
        self.scores[player] += 1;
    }

    /// Remove one point, bottoming out at zero.
    pub fn decrement(&mut self, player: PlayerId) {
        self.scores[player] = (self.scores[player] - 1).max(0);
    }

    /// Reset every score to zero.
    pub fn reset(&mut self) {
        for player in PlayerId::all(self.player_count()) {
            self.scores[player] = 0;
        }
    }

    /// Iterate `(player, score)` in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.scores.iter().map(|(player, score)| (player, *score))
    }
}
