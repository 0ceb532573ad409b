// Tests for the separately-keyed Tang-poem ladder: regeneration + overlay,
// frontier growth, and isolation from the generic per-game store.

use hanzi_garden::content::ContentSource;
use hanzi_garden::levels::{GameKind, ProgressStore};
use hanzi_garden::storage::{KeyValueStore, MemoryStore};

fn fresh() -> ProgressStore<MemoryStore> {
    ProgressStore::new(MemoryStore::new())
}

#[test]
fn fresh_ladder_shows_fifty_levels_with_only_the_first_unlocked() {
    let store = fresh();
    let ladder = store.poem_ladder();
    assert_eq!(ladder.len(), 50);
    assert!(ladder[0].is_unlocked);
    assert!(ladder[1..].iter().all(|l| !l.is_unlocked));
    assert!(ladder.iter().all(|l| l.content_source == Some(ContentSource::Tangshi)));
    assert!(ladder.iter().all(|l| l.pair_count.is_some()), "poem levels are memory levels");
    // Nothing is persisted by a plain load.
    assert!(store.backend().get("tangshi_memory_progress").is_none());
}

#[test]
fn ladder_regeneration_is_deterministic() {
    let store = fresh();
    assert_eq!(store.poem_ladder(), store.poem_ladder());
}

#[test]
fn completion_overlays_onto_the_regenerated_ladder() {
    let store = fresh();
    store.record_poem_completion(1, 3);

    let ladder = store.poem_ladder();
    assert!(ladder[0].completed);
    assert_eq!(ladder[0].stars_earned, 3);
    assert!(ladder[1].is_unlocked, "next poem level unlocks");
    assert!(ladder[2..].iter().all(|l| !l.is_unlocked));

    // Best stars stick across attempts.
    store.record_poem_completion(1, 2);
    assert_eq!(store.poem_ladder()[0].stars_earned, 3);
}

#[test]
fn ladder_grows_when_the_player_nears_the_frontier() {
    let store = fresh();
    for id in 1..=46 {
        store.record_poem_completion(id, 2);
    }
    // Highest unlocked id is 47, within five of the 50-level window.
    let ladder = store.poem_ladder();
    assert_eq!(ladder.len(), 70);
    assert!(ladder[46].is_unlocked);
    assert!(!ladder[69].is_unlocked);
}

#[test]
fn progression_continues_past_the_first_fifty_levels() {
    let store = fresh();
    for id in 1..=50 {
        store.record_poem_completion(id, 2);
    }
    let ladder = store.poem_ladder();
    assert!(ladder.len() > 50, "ladder must have grown past the base window");
    assert!(ladder[50].is_unlocked, "level 51 unlocks after completing level 50");

    // Levels appended by growth accept completion reports like any other.
    store.record_poem_completion(51, 3);
    let ladder = store.poem_ladder();
    assert!(ladder[50].completed);
    assert_eq!(ladder[50].stars_earned, 3);
    assert!(ladder[51].is_unlocked);
}

#[test]
fn unknown_poem_id_is_a_silent_noop() {
    let store = fresh();
    store.record_poem_completion(999, 3);
    assert!(store.backend().get("tangshi_memory_progress").is_none());
    assert!(store.poem_ladder().iter().all(|l| !l.completed));
}

#[test]
fn poem_ladder_is_invisible_to_the_generic_store() {
    let store = fresh();
    store.record_poem_completion(1, 4);

    // The generic memory ladder still holds its untouched seed defaults and
    // the poem ladder contributes nothing to the global star total.
    let memory = store.load_or_init(GameKind::Memory);
    assert_eq!(memory.len(), 5);
    assert!(memory.iter().all(|l| !l.completed));
    assert_eq!(store.total_stars(), 0);
}

#[test]
fn corrupt_poem_records_fall_back_to_a_fresh_ladder() {
    let store = fresh();
    store.backend().set("tangshi_memory_progress", "[{]");
    let ladder = store.poem_ladder();
    assert_eq!(ladder.len(), 50);
    assert!(ladder[0].is_unlocked && !ladder[0].completed);
}

#[test]
fn reset_clears_only_the_poem_ladder() {
    let store = fresh();
    store.record_poem_completion(1, 3);
    store.load_or_init(GameKind::Quiz);
    store.record_completion(GameKind::Quiz, 1, 2);

    store.reset_poem_ladder();
    assert!(store.poem_ladder().iter().all(|l| !l.completed));
    assert!(store.load_or_init(GameKind::Quiz)[0].completed, "generic progress survives");
}
