//! Role deck tests: build invariants and reveal consumption.

use parlor::core::GameRng;
use parlor::deck::{RevealCursor, RevealPhase, RoleCounts, RoleDeck};
use proptest::prelude::*;

proptest! {
    /// For all role-count maps, the deck length equals the sum of counts
    /// and each role appears exactly its count times.
    #[test]
    fn deck_matches_counts(
        roles in prop::collection::vec(("[a-z]{1,8}", 0u32..5), 0..6),
        seed in any::<u64>(),
    ) {
        let counts: RoleCounts = roles.into_iter().collect();
        let deck = RoleDeck::build(&counts, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), counts.total() as usize);

        for (role, count) in counts.iter() {
            let occurrences = deck.iter().filter(|card| *card == role).count();
            prop_assert_eq!(occurrences, count as usize);
        }
    }
}

/// Test the reveal exhaustion scenario: two Mafia and three Citizens make
/// five cards; after revealing all five, further taps report Done and
/// never produce a sixth label.
#[test]
fn test_reveal_exhaustion() {
    let counts = RoleCounts::new().with("Mafia", 2).with("Citizen", 3);
    let deck = RoleDeck::build(&counts, &mut GameRng::new(42));
    let mut cursor = RevealCursor::new(deck);

    let mut revealed = Vec::new();
    for _ in 0..5 {
        assert_eq!(cursor.phase(), RevealPhase::Hidden);
        cursor.tap();
        revealed.push(cursor.current().expect("a card should be showing").to_string());
        cursor.tap();
    }

    assert_eq!(revealed.len(), 5);
    assert_eq!(cursor.phase(), RevealPhase::Done);

    // The sixth reveal attempt: no panic, no card.
    cursor.tap();
    assert_eq!(cursor.phase(), RevealPhase::Done);
    assert!(cursor.current().is_none());

    assert_eq!(revealed.iter().filter(|r| *r == "Mafia").count(), 2);
    assert_eq!(revealed.iter().filter(|r| *r == "Citizen").count(), 3);
}

/// Test that a zero-total count map builds an empty deck which is
/// immediately terminal.
#[test]
fn test_empty_deck_is_immediately_done() {
    let counts = RoleCounts::new().with("Mafia", 0);
    let deck = RoleDeck::build(&counts, &mut GameRng::new(42));
    assert!(deck.is_empty());

    let mut cursor = RevealCursor::new(deck);
    assert_eq!(cursor.phase(), RevealPhase::Done);
    cursor.tap();
    assert_eq!(cursor.phase(), RevealPhase::Done);
}

/// Test that the current card is visible only while revealed.
#[test]
fn test_current_only_while_revealed() {
    let counts = RoleCounts::new().with("Citizen", 2);
    let mut cursor = RevealCursor::new(RoleDeck::build(&counts, &mut GameRng::new(42)));

    assert!(cursor.current().is_none());
    cursor.reveal();
    assert_eq!(cursor.current(), Some("Citizen"));
    cursor.advance();
    assert!(cursor.current().is_none());
}

/// Test the on-screen progress counter.
#[test]
fn test_progress_counter() {
    let counts = RoleCounts::new().with("Citizen", 3);
    let mut cursor = RevealCursor::new(RoleDeck::build(&counts, &mut GameRng::new(42)));

    assert_eq!(cursor.progress(), (1, 3));
    cursor.tap();
    cursor.tap();
    assert_eq!(cursor.progress(), (2, 3));
    cursor.tap();
    cursor.tap();
    cursor.tap();
    cursor.tap();
    assert_eq!(cursor.phase(), RevealPhase::Done);
    assert_eq!(cursor.progress(), (3, 3));
}

/// Test that the deck itself never changes while a cursor consumes it.
#[test]
fn test_deck_is_immutable_during_reveal() {
    let counts = RoleCounts::new().with("Mafia", 1).with("Citizen", 2);
    let deck = RoleDeck::build(&counts, &mut GameRng::new(42));
    let snapshot = deck.clone();

    let mut cursor = RevealCursor::new(deck);
    while cursor.phase() != RevealPhase::Done {
        cursor.tap();
    }

    assert_eq!(cursor.deck(), &snapshot);
}
