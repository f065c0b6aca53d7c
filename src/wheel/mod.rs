//! Spin-the-wheel: segment layout and outcome resolution.
//!
//! The wheel is N equal slices, one per label, drawn from 0° in input
//! order. A spin rotates the wheel by several full turns plus a uniformly
//! random final angle; the winner is whichever segment ends up under the
//! fixed pointer. The animation is cosmetic: duration and easing never
//! influence the outcome, which is computed once, synchronously, from the
//! rotation alone.
//!
//! ## Key Types
//!
//! - `WheelSegment` / `segment_layout`: the angular partition
//! - `SpinPlan`: randomly drawn rotation and cosmetic duration
//! - `resolve_outcome` / `SpinOutcome`: pointer math
//! - `WheelPool`: entry slots with optional remove-winner mode

pub mod segments;
pub mod spin;

pub use segments::{
    effective_labels, segment_layout, WheelSegment, MAX_LABEL_LEN, PLACEHOLDER_LABELS,
};
pub use spin::{resolve_outcome, SpinOutcome, SpinPlan, WheelPool, POINTER_DEGREES};
