//! Collect/reveal round-trip tests.

use parlor::core::GameRng;
use parlor::quiz::{
    decode_entries, encode_entries, AnswerSheet, CollectPlan, RevealRun, RevealStep,
};

const QUESTIONS: [&str; 6] = [
    "Favorite midnight snack?",
    "Most embarrassing song you love?",
    "Dream vacation?",
    "Weirdest talent?",
    "First concert?",
    "Go-to karaoke song?",
];

/// Test the full round: collect answers, encode, hand off, decode, reveal
/// every entry, end in Done.
#[test]
fn test_collect_to_reveal_roundtrip() {
    let plan = CollectPlan::build(QUESTIONS.len(), 3);
    let mut sheet = AnswerSheet::for_plan(&plan);
    for step in 0..plan.len() {
        sheet.set_answer(step, format!("answer-{step}"));
    }

    let entries = sheet.into_entries(&plan, &QUESTIONS);
    assert_eq!(entries.len(), 6);

    let payload = encode_entries(&entries);
    let mut rng = GameRng::new(42);
    let mut run = RevealRun::from_payload(&payload, &mut rng);
    assert_eq!(run.len(), 6);

    let mut seen = Vec::new();
    while run.step() != RevealStep::Done {
        let current = run.current().expect("an entry should be showing").clone();
        run.tap(); // show author
        assert_eq!(run.current(), Some(&current));
        run.tap(); // next
        seen.push(current);
    }

    // Shuffled order, same multiset.
    assert_eq!(seen.len(), entries.len());
    let mut seen_sorted = seen.clone();
    seen_sorted.sort_by(|a, b| a.question.cmp(&b.question));
    let mut entries_sorted = entries.clone();
    entries_sorted.sort_by(|a, b| a.question.cmp(&b.question));
    assert_eq!(seen_sorted, entries_sorted);

    // Taps after Done stay put.
    run.tap();
    assert_eq!(run.step(), RevealStep::Done);
    assert!(run.current().is_none());
}

/// Test that a corrupt handoff payload degrades to an empty reveal.
#[test]
fn test_corrupt_payload_reveals_nothing() {
    let mut rng = GameRng::new(42);
    let run = RevealRun::from_payload("{definitely not json", &mut rng);

    assert!(run.is_empty());
    assert_eq!(run.step(), RevealStep::Done);
}

/// Test that unanswered steps come through as empty answers, not dropped
/// entries.
#[test]
fn test_unanswered_steps_reveal_blank() {
    let plan = CollectPlan::build(4, 2);
    let mut sheet = AnswerSheet::for_plan(&plan);
    sheet.set_answer(0, "only answer");

    let entries = sheet.into_entries(&plan, &QUESTIONS[..4].to_vec());
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].answer, "only answer");
    assert!(entries[1..].iter().all(|e| e.answer.is_empty()));
}

/// Test that entries survive encode/decode with their seat attribution.
#[test]
fn test_attribution_survives_handoff() {
    let plan = CollectPlan::build(4, 2);
    let sheet = AnswerSheet::for_plan(&plan);
    let entries = sheet.into_entries(&plan, &QUESTIONS[..4].to_vec());

    let decoded = decode_entries(&encode_entries(&entries));
    let seats: Vec<_> = decoded.iter().map(|e| e.player_index).collect();
    assert_eq!(seats, vec![0, 0, 1, 1]);
}
