//! # parlor
//!
//! A party-game toolkit: the shared randomization, fair-draw, and
//! session-state machinery behind a menu of party mini-games.
//!
//! ## Design Principles
//!
//! 1. **Pure Outcomes**: every draw (shuffle, spin, reveal) is computed
//!    synchronously from an explicit RNG. Animations are presentation-only
//!    and can never influence a result.
//!
//! 2. **Screen-Agnostic**: no rendering, navigation, or content tables.
//!    Screens feed word lists, role counts, and wheel labels in; they get
//!    plain values back.
//!
//! 3. **Explicit State**: session-scoped stores (`Session`) and per-game
//!    cursors are ordinary values passed by handle, never ambient
//!    singletons.
//!
//! ## Modules
//!
//! - `core`: RNG, player identity, session-scoped state
//! - `deck`: role deck building and tap-to-reveal consumption
//! - `scramble`: word scrambling for guessing games
//! - `wheel`: spin-the-wheel segment layout and outcome resolution
//! - `quiz`: collect-answers / reveal-answers pairing
//! - `draw`: dice, coins, ranges, and letter draws
//! - `timer`: countdown state machine
//! - `score`: per-player tallies
//! - `levels`: level content fallback helpers

pub mod core;
pub mod deck;
pub mod draw;
pub mod levels;
pub mod quiz;
pub mod scramble;
pub mod score;
pub mod timer;
pub mod wheel;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    PlayerId, PlayerMap,
    LevelProgress, Session,
};

pub use crate::deck::{RevealCursor, RevealPhase, RoleCounts, RoleDeck};

pub use crate::scramble::{scramble, scramble_with, ScrambleConfig};

pub use crate::wheel::{
    effective_labels, resolve_outcome, segment_layout,
    SpinOutcome, SpinPlan, WheelPool, WheelSegment,
    MAX_LABEL_LEN, PLACEHOLDER_LABELS, POINTER_DEGREES,
};

pub use crate::quiz::{
    decode_entries, encode_entries, try_decode_entries,
    AnswerSheet, Assignment, CollectPlan, PayloadError, RevealEntry, RevealRun,
};

pub use crate::draw::{flip_coin, random_letter, roll_dice, roll_die, roll_range, CoinFace};

pub use crate::timer::{Countdown, CountdownState};

pub use crate::score::ScoreBoard;

pub use crate::levels::pick_word;
