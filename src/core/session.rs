//! Session-scoped state: played-level tracking and the premium flag.
//!
//! Both stores live for the process lifetime only. Nothing here touches
//! disk; restarting the app resets everything. The UI is single-threaded,
//! so plain sequential mutation is the whole concurrency story.
//!
//! `Session` is an explicit value the host constructs once at startup and
//! passes by handle to whichever screen needs it, rather than an ambient
//! module-level singleton.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-game record of which levels have been played this session.
///
/// Keyed by an opaque game-name string; the store never interprets it.
///
/// ## Example
///
/// ```
/// use parlor::core::LevelProgress;
///
/// let mut progress = LevelProgress::new();
/// progress.toggle_played("Trivia", 3);
/// progress.toggle_played("Trivia", 1);
///
/// assert!(progress.is_played("Trivia", 3));
/// assert_eq!(progress.played_levels("Trivia"), vec![1, 3]);
///
/// // Toggling again clears the mark.
/// progress.toggle_played("Trivia", 3);
/// assert!(!progress.is_played("Trivia", 3));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LevelProgress {
    played: FxHashMap<String, ImHashSet<u32>>,
}

impl LevelProgress {
    /// Create an empty progress store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Levels marked played for a game, sorted ascending.
    ///
    /// Unknown games have no played levels.
    #[must_use]
    pub fn played_levels(&self, game: &str) -> Vec<u32> {
        let Some(set) = self.played.get(game) else {
            return Vec::new();
        };
        let mut levels: Vec<u32> = set.iter().copied().collect();
        levels.sort_unstable();
        levels
    }

    /// Mark a level played if it isn't, or clear the mark if it is.
    pub fn toggle_played(&mut self, game: &str, level: u32) {
        let set = self.played.entry(game.to_string()).or_default();
        if set.contains(&level) {
            set.remove(&level);
        } else {
            set.insert(level);
        }
    }

    /// Whether a level is currently marked played.
    #[must_use]
    pub fn is_played(&self, game: &str, level: u32) -> bool {
        self.played.get(game).is_some_and(|set| set.contains(&level))
    }
}

/// All process-wide mutable state: level progress plus the premium flag.
///
/// Constructed once at process start; dropped at exit. Single writer at a
/// time under the UI event model.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    progress: LevelProgress,
    premium: bool,
}

impl Session {
    /// Create a fresh session: no levels played, premium locked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The level-progress store.
    #[must_use]
    pub fn progress(&self) -> &LevelProgress {
        &self.progress
    }

    /// Mutable access to the level-progress store.
    pub fn progress_mut(&mut self) -> &mut LevelProgress {
        &mut self.progress
    }

    /// Whether premium content is unlocked.
    #[must_use]
    pub fn premium(&self) -> bool {
        self.premium
    }

    /// Set the premium flag.
    pub fn set_premium(&mut self, unlocked: bool) {
        self.premium = unlocked;
    }
}
