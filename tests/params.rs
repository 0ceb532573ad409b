// Unit tests for the pure parameter calculator: given any id >= 1 the
// outputs are reproducible and bounded.

use hanzi_garden::levels::params;
use hanzi_garden::levels::Difficulty;

#[test]
fn difficulty_tiers_by_id() {
    for id in 1..=5 {
        assert_eq!(params::difficulty_for(id), Difficulty::Easy);
    }
    for id in 6..=15 {
        assert_eq!(params::difficulty_for(id), Difficulty::Medium);
    }
    for id in [16, 17, 40, 1000] {
        assert_eq!(params::difficulty_for(id), Difficulty::Hard);
    }
}

#[test]
fn target_score_tightens_with_difficulty() {
    // ceil(10 * 0.6 / 0.7 / 0.8)
    assert_eq!(params::target_score(3, 10), 6);
    assert_eq!(params::target_score(10, 10), 7);
    assert_eq!(params::target_score(20, 10), 8);
    // ceil rounds up on fractional thresholds
    assert_eq!(params::target_score(1, 5), 3);
    assert_eq!(params::target_score(7, 5), 4);
}

#[test]
fn max_moves_adds_tier_bonus() {
    assert_eq!(params::max_moves(1, 4), 14); // 4*3 + 2
    assert_eq!(params::max_moves(8, 6), 22); // 6*3 + 4
    assert_eq!(params::max_moves(20, 10), 36); // 10*3 + 6
}

#[test]
fn star_reward_steps_every_five_levels_and_caps() {
    assert_eq!(params::star_reward(1), 2);
    assert_eq!(params::star_reward(4), 2);
    assert_eq!(params::star_reward(5), 3);
    assert_eq!(params::star_reward(10), 4);
    assert_eq!(params::star_reward(20), 6);
    assert_eq!(params::star_reward(500), 6, "reward caps at 6");
}

#[test]
fn question_count_grows_to_a_ceiling() {
    assert_eq!(params::question_count(1), 5);
    assert_eq!(params::question_count(3), 6);
    assert_eq!(params::question_count(15), 10);
    assert_eq!(params::question_count(30), 15);
    assert_eq!(params::question_count(900), 15, "count caps at 15");
}

#[test]
fn pair_count_cycles_within_tier_windows() {
    // easy: 4..=6 over (id-1) % 3
    assert_eq!(params::pair_count(1), 4);
    assert_eq!(params::pair_count(2), 5);
    assert_eq!(params::pair_count(3), 6);
    assert_eq!(params::pair_count(4), 4);
    // medium: 6..=9 over (id-6) % 4
    assert_eq!(params::pair_count(6), 6);
    assert_eq!(params::pair_count(9), 9);
    assert_eq!(params::pair_count(10), 6);
    // hard: 8..=11 over (id-11) % 4
    assert_eq!(params::pair_count(16), 9);
    assert_eq!(params::pair_count(19), 8);
}

#[test]
fn pair_count_is_bounded_for_any_id() {
    for id in 1..=200 {
        let pairs = params::pair_count(id);
        assert!((4..=12).contains(&pairs), "id {} yielded {} pairs", id, pairs);
    }
}
