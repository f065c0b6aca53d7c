//! Question assignment and answer collection.

use serde::{Deserialize, Serialize};

use super::reveal::RevealEntry;
use crate::core::PlayerId;

/// Fewest players a collect round supports.
pub const MIN_PLAYERS: usize = 2;
/// Most players a collect round supports.
pub const MAX_PLAYERS: usize = 12;

/// One step of the collect pass: a player and their question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Who answers.
    pub player: PlayerId,
    /// Index into the level's question list.
    pub question_index: usize,
}

/// The full collect pass: who answers which question, in table order.
///
/// Questions are dealt in contiguous blocks: player 0 gets questions
/// `0..per_player`, player 1 the next block, and so on. Leftover questions
/// (when the count doesn't divide evenly) are simply not asked this round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollectPlan {
    assignments: Vec<Assignment>,
    per_player: usize,
    player_count: usize,
}

impl CollectPlan {
    /// Deal `question_count` questions to `player_count` players.
    ///
    /// The player count is clamped into `MIN_PLAYERS..=MAX_PLAYERS`. With
    /// fewer questions than players, nobody gets one and the plan is
    /// empty; the collect screen treats that as immediately done.
    #[must_use]
    pub fn build(question_count: usize, player_count: usize) -> Self {
        let player_count = player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        let per_player = question_count / player_count;

        let mut assignments = Vec::with_capacity(player_count * per_player);
        for player in PlayerId::all(player_count) {
            for j in 0..per_player {
                assignments.push(Assignment {
                    player,
                    question_index: player.index() * per_player + j,
                });
            }
        }

        Self {
            assignments,
            per_player,
            player_count,
        }
    }

    /// Total number of collect steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether there is nothing to collect.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Questions dealt to each player.
    #[must_use]
    pub fn per_player(&self) -> usize {
        self.per_player
    }

    /// Players in the round (after clamping).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The assignment at `step`, if in bounds.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<Assignment> {
        self.assignments.get(step).copied()
    }

    /// Whether `step` starts a new player's block.
    ///
    /// The collect screen shows a "pass the phone, look away" interstitial
    /// before these steps.
    #[must_use]
    pub fn is_player_boundary(&self, step: usize) -> bool {
        self.per_player > 0
            && step > 0
            && step < self.assignments.len()
            && step % self.per_player == 0
    }

    /// Iterate all assignments in collect order.
    pub fn iter(&self) -> impl Iterator<Item = Assignment> + '_ {
        self.assignments.iter().copied()
    }
}

/// Answers typed during the collect pass, one slot per assignment.
///
/// Unanswered slots stay empty strings: skipping a question is allowed
/// and shows up as a blank in the reveal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: Vec<String>,
}

impl AnswerSheet {
    /// Create a blank sheet for a plan.
    #[must_use]
    pub fn for_plan(plan: &CollectPlan) -> Self {
        Self {
            answers: vec![String::new(); plan.len()],
        }
    }

    /// Record an answer for a step. Out-of-range steps are ignored.
    pub fn set_answer(&mut self, step: usize, text: impl Into<String>) {
        if let Some(slot) = self.answers.get_mut(step) {
            *slot = text.into();
        }
    }

    /// The answer recorded at `step`, empty if none.
    #[must_use]
    pub fn answer(&self, step: usize) -> &str {
        self.answers.get(step).map_or("", String::as_str)
    }

    /// Combine the plan, question texts, and answers into reveal entries.
    ///
    /// Assignments whose question index falls outside `questions` are
    /// dropped rather than invented.
    #[must_use]
    pub fn into_entries(self, plan: &CollectPlan, questions: &[&str]) -> Vec<RevealEntry> {
        plan.iter()
            .zip(self.answers)
            .filter_map(|(assignment, answer)| {
                questions
                    .get(assignment.question_index)
                    .map(|question| RevealEntry {
                        question: (*question).to_string(),
                        answer,
                        player_index: assignment.player.index(),
                    })
            })
            .collect()
    }
}
