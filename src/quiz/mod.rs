//! Collect-answers / reveal-answers pairing.
//!
//! One phone makes two passes around the table. First pass: each player
//! privately answers their block of questions (`CollectPlan` +
//! `AnswerSheet`). The answers are serialized into a JSON payload and
//! handed to the reveal screen, which shuffles them and steps through:
//! show the answer, let the table guess, tap to show who wrote it.
//!
//! The payload crosses a navigation boundary as opaque text, so decoding
//! fails soft: a malformed payload becomes an empty reveal, never a crash.

pub mod collect;
pub mod reveal;

pub use collect::{AnswerSheet, Assignment, CollectPlan};
pub use reveal::{
    decode_entries, encode_entries, try_decode_entries,
    PayloadError, RevealEntry, RevealRun, RevealStep,
};
