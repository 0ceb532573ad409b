//! Difficulty / parameter calculator.
//!
//! Pure functions of the level id. No hidden state, no randomness: the same
//! id always yields the same shape, which is what makes regenerating a level
//! safe without caching.

use super::Difficulty;

/// Difficulty tier by level id: 1–5 easy, 6–15 medium, beyond that hard.
pub fn difficulty_for(id: u32) -> Difficulty {
    if id <= 5 {
        Difficulty::Easy
    } else if id <= 15 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Minimum correct answers to pass; the fraction tightens with difficulty.
pub fn target_score(id: u32, total_questions: u32) -> u32 {
    let fraction = match difficulty_for(id) {
        Difficulty::Easy => 0.6,
        Difficulty::Medium => 0.7,
        Difficulty::Hard => 0.8,
    };
    (total_questions as f64 * fraction).ceil() as u32
}

/// Advisory move budget for memory games; not enforced by the core.
pub fn max_moves(id: u32, pair_count: u32) -> u32 {
    let bonus = match difficulty_for(id) {
        Difficulty::Easy => 2,
        Difficulty::Medium => 4,
        Difficulty::Hard => 6,
    };
    pair_count * 3 + bonus
}

/// Star reward: 2–6, stepping up every 5 levels and capping at 6.
pub fn star_reward(id: u32) -> u32 {
    2 + (id / 5).min(4)
}

/// Question count for quiz/spelling: grows from 5 toward a ceiling of 15.
pub fn question_count(id: u32) -> u32 {
    (5 + id / 3).min(15)
}

/// Pair count for memory games, cycling within a tier-specific window so
/// nearby levels vary in size.
pub fn pair_count(id: u32) -> u32 {
    match difficulty_for(id) {
        Difficulty::Easy => 4 + (id - 1) % 3,
        Difficulty::Medium => 6 + (id - 6) % 4,
        Difficulty::Hard => 8 + (id - 11) % 4,
    }
}
