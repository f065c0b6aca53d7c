//! Core types: RNG, player identity, session-scoped state.
//!
//! Everything here is game-agnostic. Mini-games build on these primitives
//! but the core never knows which screen is asking.

pub mod player;
pub mod rng;
pub mod session;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use session::{LevelProgress, Session};
