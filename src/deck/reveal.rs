//! Tap-to-reveal consumption of a built role deck.
//!
//! Per card: `Hidden → (tap) → Revealed → (tap) → Hidden(next)`, until the
//! cursor runs past the last card, which is the terminal `Done` state.
//! `Done` offers nothing but "return to menu"; further taps are no-ops.

use serde::{Deserialize, Serialize};

use super::RoleDeck;

/// Where the cursor is in the reveal cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPhase {
    /// A card is face down, waiting for its player to tap.
    Hidden,
    /// The current card is showing.
    Revealed,
    /// Every card has been revealed.
    Done,
}

/// Sequential reveal cursor over an immutable deck.
///
/// Draws consume by index, never by removal: progress is a monotonically
/// increasing cursor into an unchanging sequence.
///
/// ## Example
///
/// ```
/// use parlor::core::GameRng;
/// use parlor::deck::{RevealCursor, RevealPhase, RoleCounts, RoleDeck};
///
/// let counts = RoleCounts::new().with("Mafia", 1).with("Citizen", 2);
/// let deck = RoleDeck::build(&counts, &mut GameRng::new(42));
/// let mut cursor = RevealCursor::new(deck);
///
/// while cursor.phase() != RevealPhase::Done {
///     cursor.tap(); // reveal
///     assert!(cursor.current().is_some());
///     cursor.tap(); // hide and advance
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealCursor {
    deck: RoleDeck,
    position: usize,
    phase: RevealPhase,
}

impl RevealCursor {
    /// Start a reveal round over a built deck.
    ///
    /// An empty deck has no cards to show and starts in `Done`.
    #[must_use]
    pub fn new(deck: RoleDeck) -> Self {
        let phase = if deck.is_empty() {
            RevealPhase::Done
        } else {
            RevealPhase::Hidden
        };
        Self {
            deck,
            position: 0,
            phase,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The label currently showing. `Some` only while `Revealed`.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        match self.phase {
            RevealPhase::Revealed => self.deck.get(self.position),
            RevealPhase::Hidden | RevealPhase::Done => None,
        }
    }

    /// Progress counter for display: `(current card 1-based, deck size)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let shown = (self.position + 1).min(self.deck.len());
        (shown, self.deck.len())
    }

    /// Turn the current card face up.
    ///
    /// No-op unless the cursor is on a hidden card.
    pub fn reveal(&mut self) {
        if self.phase == RevealPhase::Hidden {
            self.phase = RevealPhase::Revealed;
        }
    }

    /// Hide the current card and move to the next player's card.
    ///
    /// Transitions to `Done` after the last card. No-op unless a card is
    /// currently revealed.
    pub fn advance(&mut self) {
        if self.phase != RevealPhase::Revealed {
            return;
        }
        self.position += 1;
        self.phase = if self.position >= self.deck.len() {
            RevealPhase::Done
        } else {
            RevealPhase::Hidden
        };
    }

    /// One tap: reveal if hidden, advance if revealed, nothing when done.
    pub fn tap(&mut self) {
        match self.phase {
            RevealPhase::Hidden => self.reveal(),
            RevealPhase::Revealed => self.advance(),
            RevealPhase::Done => {}
        }
    }

    /// The deck being revealed.
    #[must_use]
    pub fn deck(&self) -> &RoleDeck {
        &self.deck
    }
}
