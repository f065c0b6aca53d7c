//! Spin plans, pointer math, and the remove-winner pool.

use serde::{Deserialize, Serialize};

use super::segments::{effective_labels, MAX_LABEL_LEN};
use crate::core::GameRng;

/// The fixed pointer position, measured from the segment-numbering origin.
///
/// The pointer sits at 3 o'clock; segment 0 starts at 12 o'clock, so the
/// pointer is 90° around from the origin.
pub const POINTER_DEGREES: f64 = 90.0;

/// A randomly drawn spin: rotation plus cosmetic timing.
///
/// Only `total_rotation()` feeds outcome resolution. The duration exists
/// for the host's animation and must never be consulted for anything else.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    /// Full turns before settling, 3 to 5.
    pub turns: u32,
    /// Final resting angle in [0°, 360°).
    pub final_angle_degrees: f64,
    /// Animation length in milliseconds, 3000 to 7000.
    pub duration_ms: u32,
}

impl SpinPlan {
    /// Draw a random spin.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Self {
            turns: rng.gen_range_usize(3..6) as u32,
            final_angle_degrees: rng.gen_unit() * 360.0,
            duration_ms: rng.gen_range_usize(3000..7000) as u32,
        }
    }

    /// Total rotation in degrees: full turns plus the final angle.
    #[must_use]
    pub fn total_rotation(&self) -> f64 {
        f64::from(self.turns) * 360.0 + self.final_angle_degrees
    }
}

/// A resolved spin: the winning label and its position in the label list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// The winning label text.
    pub label: String,
    /// The winning segment's index, always in [0, N).
    pub index: usize,
}

/// Determine which segment sits under the pointer after a rotation.
///
/// Segments are equal slices of 360°/N assigned to `labels` in order from
/// 0°. After rotating the wheel by `total_rotation_degrees`, the segment
/// under the pointer is:
///
/// ```text
/// normalized = total_rotation mod 360
/// pointer_angle = (POINTER_DEGREES - normalized + 360) mod 360
/// index = floor(pointer_angle / (360 / N))
/// ```
///
/// An angle exactly on a segment's start belongs to that segment (floor
/// semantics), so boundary landings resolve deterministically. Negative
/// rotations are normalized the same way.
///
/// Panics if fewer than two labels are supplied; run raw entries through
/// `effective_labels` first.
#[must_use]
pub fn resolve_outcome(labels: &[String], total_rotation_degrees: f64) -> SpinOutcome {
    assert!(labels.len() >= 2, "a wheel needs at least 2 segments");

    let segment_width = 360.0 / labels.len() as f64;
    let normalized = total_rotation_degrees.rem_euclid(360.0);
    let pointer_angle = (POINTER_DEGREES - normalized).rem_euclid(360.0);

    // Float division can graze labels.len() when pointer_angle is a hair
    // under 360; clamp back into range.
    let index = ((pointer_angle / segment_width) as usize).min(labels.len() - 1);

    SpinOutcome {
        label: labels[index].clone(),
        index,
    }
}

/// The wheel screen's entry slots, plus remove-winner mode.
///
/// Entries are free text; blanks are allowed and skipped at spin time.
/// With remove-winner enabled, each spin blanks the first entry whose
/// trimmed text matches the winning label, shrinking the wheel for the
/// next spin. With duplicate labels, "first match" is the rule: the
/// lowest-indexed slot is cleared, the rest stay.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WheelPool {
    entries: Vec<String>,
    remove_winner: bool,
}

impl WheelPool {
    /// Create a pool with `slots` empty entries.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self {
            entries: vec![String::new(); slots],
            remove_winner: false,
        }
    }

    /// Create a pool pre-filled with entries.
    #[must_use]
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self {
            entries,
            remove_winner: false,
        }
    }

    /// Enable or disable remove-winner mode.
    pub fn set_remove_winner(&mut self, enabled: bool) {
        self.remove_winner = enabled;
    }

    /// Whether remove-winner mode is on.
    #[must_use]
    pub fn remove_winner(&self) -> bool {
        self.remove_winner
    }

    /// Set one entry slot's text.
    ///
    /// Returns false (leaving the slot unchanged) if the slot is out of
    /// range or the text exceeds `MAX_LABEL_LEN` characters.
    pub fn set_entry(&mut self, slot: usize, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.chars().count() > MAX_LABEL_LEN {
            return false;
        }
        match self.entries.get_mut(slot) {
            Some(entry) => {
                *entry = text;
                true
            }
            None => false,
        }
    }

    /// Blank every entry slot.
    pub fn clear_all(&mut self) {
        for entry in &mut self.entries {
            entry.clear();
        }
    }

    /// The raw entry slots, blanks included.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The labels a spin would currently use.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        effective_labels(&self.entries)
    }

    /// Spin the wheel: draw a plan, resolve the outcome, apply
    /// remove-winner if enabled.
    ///
    /// The outcome is computed before any removal, so removal can never
    /// change the spin that triggered it. Returns the outcome together
    /// with the plan so the host can animate the same rotation.
    pub fn spin(&mut self, rng: &mut GameRng) -> (SpinOutcome, SpinPlan) {
        let labels = self.labels();
        let plan = SpinPlan::random(rng);
        let outcome = resolve_outcome(&labels, plan.total_rotation());

        if self.remove_winner {
            self.remove_first_match(&outcome.label);
        }

        (outcome, plan)
    }

    /// Blank the first entry whose trimmed text equals `label`.
    ///
    /// Placeholder spins (all slots blank) match nothing; that's fine.
    fn remove_first_match(&mut self, label: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|text| text.trim() == label) {
            entry.clear();
        }
    }
}
