//! Wheel spin tests: pointer math, fallbacks, and remove-winner mode.

use parlor::core::GameRng;
use parlor::wheel::{resolve_outcome, segment_layout, SpinPlan, WheelPool};
use proptest::prelude::*;

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("label-{i}")).collect()
}

proptest! {
    /// For all label lists of size N >= 2 and all rotations, the winning
    /// index is in [0, N).
    #[test]
    fn outcome_index_is_bounded(
        count in 2usize..26,
        rotation in -100_000.0f64..100_000.0,
    ) {
        let labels = labels(count);
        let outcome = resolve_outcome(&labels, rotation);

        prop_assert!(outcome.index < count);
        prop_assert_eq!(&outcome.label, &labels[outcome.index]);
    }

    /// The resolved label always lies inside its segment's angular range.
    #[test]
    fn outcome_matches_segment_geometry(
        count in 2usize..26,
        rotation in 0.0f64..100_000.0,
    ) {
        let labels = labels(count);
        let outcome = resolve_outcome(&labels, rotation);
        let segments = segment_layout(&labels);

        let pointer_angle = (90.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
        let segment = &segments[outcome.index];
        prop_assert!(segment.start_degrees <= pointer_angle + 1e-9);
        prop_assert!(pointer_angle < segment.end_degrees + 1e-9 || outcome.index == count - 1);
    }
}

/// Test the dice-roll replacement scenario: four labels, one full turn
/// plus 90 degrees lands on the first segment.
#[test]
fn test_four_label_450_degree_spin_lands_on_red() {
    let labels: Vec<String> = ["Red", "Blue", "Green", "Yellow"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let outcome = resolve_outcome(&labels, 450.0);
    assert_eq!(outcome.index, 0);
    assert_eq!(outcome.label, "Red");
}

/// Test that a pool with all-blank entries spins a placeholder wheel
/// without any caller-side special-casing.
#[test]
fn test_blank_pool_spins_placeholders() {
    let mut pool = WheelPool::new(25);
    assert_eq!(pool.labels(), vec!["A", "B"]);

    let mut rng = GameRng::new(42);
    let (outcome, _plan) = pool.spin(&mut rng);
    assert!(outcome.label == "A" || outcome.label == "B");
}

/// Test that the outcome depends only on the rotation, not on the
/// animation duration the plan happens to carry.
#[test]
fn test_outcome_ignores_animation_timing() {
    let wheel = labels(5);
    let rotation = 3.0 * 360.0 + 123.4;

    let fast = SpinPlan {
        turns: 3,
        final_angle_degrees: 123.4,
        duration_ms: 3000,
    };
    let slow = SpinPlan {
        turns: 3,
        final_angle_degrees: 123.4,
        duration_ms: 7000,
    };

    assert_eq!(fast.total_rotation(), rotation);
    assert_eq!(fast.total_rotation(), slow.total_rotation());
    assert_eq!(
        resolve_outcome(&wheel, fast.total_rotation()),
        resolve_outcome(&wheel, slow.total_rotation()),
    );
}

/// Test that spin plans stay inside their documented ranges.
#[test]
fn test_spin_plan_ranges() {
    let mut rng = GameRng::new(42);
    for _ in 0..500 {
        let plan = SpinPlan::random(&mut rng);
        assert!((3..=5).contains(&plan.turns));
        assert!((0.0..360.0).contains(&plan.final_angle_degrees));
        assert!((3000..7000).contains(&plan.duration_ms));
        assert!(plan.total_rotation() >= 3.0 * 360.0);
    }
}

/// Test remove-winner mode: the winning entry is blanked after the spin,
/// and with duplicates only the first matching slot goes.
#[test]
fn test_remove_winner_shrinks_the_pool() {
    let mut pool = WheelPool::from_entries(vec![
        "Pizza".to_string(),
        "Sushi".to_string(),
        "Tacos".to_string(),
    ]);
    pool.set_remove_winner(true);

    let mut rng = GameRng::new(42);
    let (outcome, _plan) = pool.spin(&mut rng);

    let remaining: Vec<_> = pool.entries().iter().filter(|e| !e.is_empty()).collect();
    assert_eq!(remaining.len(), 2);
    assert!(!remaining.iter().any(|e| **e == outcome.label));
}

/// Test that remove-winner spins drain the pool down to one entry, at
/// which point the wheel falls back to placeholders and stops removing:
/// placeholder wins match no entry.
#[test]
fn test_remove_winner_drains_to_placeholders() {
    let mut pool = WheelPool::from_entries(vec![
        "Pizza".to_string(),
        "Sushi".to_string(),
        "Tacos".to_string(),
    ]);
    pool.set_remove_winner(true);

    let mut rng = GameRng::new(42);
    let _ = pool.spin(&mut rng);
    let _ = pool.spin(&mut rng);

    let remaining: Vec<_> = pool.entries().iter().filter(|e| !e.is_empty()).collect();
    assert_eq!(remaining.len(), 1);
    assert_eq!(pool.labels(), vec!["A", "B"]);

    let (outcome, _plan) = pool.spin(&mut rng);
    assert!(outcome.label == "A" || outcome.label == "B");
    let still_remaining = pool.entries().iter().filter(|e| !e.is_empty()).count();
    assert_eq!(still_remaining, 1);
}
