//! Role decks for hidden-role games.
//!
//! A settings screen counts out roles (3 Citizens, 2 Mafia, 1 Doctor...),
//! the deck is expanded and shuffled once, and the phone is passed around
//! the table: each player taps to reveal their card, taps again to hide
//! it, and hands the phone on.
//!
//! ## Key Types
//!
//! - `RoleCounts`: insertion-ordered role → count mapping
//! - `RoleDeck`: the expanded, shuffled, immutable deck
//! - `RevealCursor`: tap-to-reveal consumption state machine

pub mod builder;
pub mod reveal;

pub use builder::{RoleCounts, RoleDeck};
pub use reveal::{RevealCursor, RevealPhase};
