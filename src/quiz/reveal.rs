//! Reveal payload codec and the guess-who reveal run.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameRng;

/// One collected answer, ready to reveal.
///
/// Serialized with camelCase field names: the payload crosses the
/// collect → reveal navigation boundary as JSON text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealEntry {
    /// The question that was asked.
    pub question: String,
    /// What the player typed (possibly empty).
    pub answer: String,
    /// 0-based seat of the player who answered.
    pub player_index: usize,
}

/// The reveal payload could not be decoded.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Not valid JSON, or not the expected entry shape.
    #[error("malformed reveal payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize entries into a handoff payload.
///
/// Falls back to an empty-list payload if serialization fails, which for
/// these plain string/number fields it can't in practice.
#[must_use]
pub fn encode_entries(entries: &[RevealEntry]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a handoff payload, reporting what went wrong.
pub fn try_decode_entries(payload: &str) -> Result<Vec<RevealEntry>, PayloadError> {
    Ok(serde_json::from_str(payload)?)
}

/// Decode a handoff payload, failing soft.
///
/// Any malformed payload yields an empty entry list: the reveal screen
/// shows "nothing to reveal" instead of crashing mid-party.
#[must_use]
pub fn decode_entries(payload: &str) -> Vec<RevealEntry> {
    try_decode_entries(payload).unwrap_or_default()
}

/// Where the reveal run is in its two-tap cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealStep {
    /// Showing the question and answer; the table is guessing.
    Guessing,
    /// Showing who wrote it.
    AuthorShown,
    /// Every entry has been revealed.
    Done,
}

/// Steps through shuffled entries: guess, show author, advance.
///
/// Entries are shuffled once at construction so reveal order gives away
/// nothing about seating order. An empty entry set (including a failed
/// payload decode) starts in `Done`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealRun {
    entries: Vector<RevealEntry>,
    position: usize,
    step: RevealStep,
}

impl RevealRun {
    /// Shuffle entries and start the run.
    #[must_use]
    pub fn new(mut entries: Vec<RevealEntry>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut entries);
        let step = if entries.is_empty() {
            RevealStep::Done
        } else {
            RevealStep::Guessing
        };
        Self {
            entries: entries.into_iter().collect(),
            position: 0,
            step,
        }
    }

    /// Decode a payload and start the run; malformed payloads give an
    /// empty, already-done run.
    #[must_use]
    pub fn from_payload(payload: &str, rng: &mut GameRng) -> Self {
        Self::new(decode_entries(payload), rng)
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> RevealStep {
        self.step
    }

    /// The entry currently on screen, `None` once done.
    #[must_use]
    pub fn current(&self) -> Option<&RevealEntry> {
        match self.step {
            RevealStep::Done => None,
            RevealStep::Guessing | RevealStep::AuthorShown => self.entries.get(self.position),
        }
    }

    /// Number of entries in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the run has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One tap: show the author, or move on to the next entry.
    pub fn tap(&mut self) {
        match self.step {
            RevealStep::Guessing => self.step = RevealStep::AuthorShown,
            RevealStep::AuthorShown => {
                self.position += 1;
                self.step = if self.position >= self.entries.len() {
                    RevealStep::Done
                } else {
                    RevealStep::Guessing
                };
            }
            RevealStep::Done => {}
        }
    }
}
