//! Wheel segment layout.
//!
//! Labels come from a bank of free-text entry slots. Blank entries are
//! skipped; a wheel needs at least two segments to mean anything, so
//! fewer than two real labels fall back to a two-entry placeholder wheel.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Labels used when fewer than two real entries are supplied.
pub const PLACEHOLDER_LABELS: [&str; 2] = ["A", "B"];

/// Maximum characters per wheel entry.
pub const MAX_LABEL_LEN: usize = 30;

/// One angular slice of the wheel, bound to a label.
///
/// Segments partition [0°, 360°) with no gaps or overlaps; `end_degrees`
/// is exclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    /// The label shown on this slice.
    pub label: String,
    /// Position in the label list.
    pub index: usize,
    /// Start angle, inclusive.
    pub start_degrees: f64,
    /// End angle, exclusive.
    pub end_degrees: f64,
}

/// Reduce raw entry slots to the labels actually on the wheel.
///
/// Trims whitespace and drops blanks. If fewer than two labels remain the
/// placeholder pair is used instead, so downstream outcome resolution
/// never needs a special case.
#[must_use]
pub fn effective_labels(entries: &[String]) -> Vec<String> {
    let labels: Vec<String> = entries
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect();

    if labels.len() >= 2 {
        labels
    } else {
        PLACEHOLDER_LABELS.iter().map(|s| s.to_string()).collect()
    }
}

/// Partition the circle into equal slices, one per label, from 0°.
///
/// Panics if fewer than two labels are supplied; run raw entries through
/// `effective_labels` first.
#[must_use]
pub fn segment_layout(labels: &[String]) -> SmallVec<[WheelSegment; 8]> {
    assert!(labels.len() >= 2, "a wheel needs at least 2 segments");

    let width = 360.0 / labels.len() as f64;
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| WheelSegment {
            label: label.clone(),
            index,
            start_degrees: width * index as f64,
            end_degrees: width * (index + 1) as f64,
        })
        .collect()
}
