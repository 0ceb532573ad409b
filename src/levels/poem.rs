//! Poem ladder: the parallel, separately-keyed progression for Tang-poem
//! memory levels.
//!
//! Unlike the generic per-game ladders, nothing but bare progress records is
//! persisted here; the levels themselves are regenerated on every load and
//! the saved records overlaid. The key predates the unified store and is kept
//! for save compatibility, but reads and writes go through the same
//! [`crate::storage::KeyValueStore`] substrate.

use serde::{Deserialize, Serialize};

use crate::content::ContentSource;
use crate::storage::KeyValueStore;

use super::progress::warn_corrupt;
use super::{generator, GameKind, Level, ProgressStore};

const POEM_KEY: &str = "tangshi_memory_progress";

/// The ladder always shows at least this many levels.
const BASE_COUNT: u32 = 50;
/// Levels appended once the player nears the frontier.
const GROW_BY: u32 = 20;
/// "Near the frontier" means within this many levels of the end.
const FRONTIER_MARGIN: u32 = 5;

/// Bare progress record persisted per poem level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemLevelRecord {
    pub id: u32,
    pub completed: bool,
    pub stars_earned: u32,
    pub is_unlocked: bool,
}

impl From<&Level> for PoemLevelRecord {
    fn from(level: &Level) -> Self {
        PoemLevelRecord {
            id: level.id,
            completed: level.completed,
            stars_earned: level.stars_earned,
            is_unlocked: level.is_unlocked,
        }
    }
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Regenerate the poem ladder and overlay saved progress. The ladder
    /// holds at least [`BASE_COUNT`] levels and grows by [`GROW_BY`] whenever
    /// the highest unlocked id comes within [`FRONTIER_MARGIN`] of the end.
    /// Level 1 is always unlocked.
    pub fn poem_ladder(&self) -> Vec<Level> {
        let records = self.poem_records();
        let saved_count = records.len() as u32;
        let max_unlocked = records
            .iter()
            .filter(|r| r.is_unlocked)
            .map(|r| r.id)
            .max()
            .unwrap_or(0);

        let near_frontier =
            max_unlocked > 0 && max_unlocked + FRONTIER_MARGIN >= saved_count;
        let total = if near_frontier {
            saved_count + GROW_BY
        } else {
            BASE_COUNT.max(saved_count)
        };

        (1..=total)
            .map(|id| {
                let mut level =
                    generator::generate(GameKind::Memory, id, Some(ContentSource::Tangshi));
                if let Some(record) = records.iter().find(|r| r.id == id) {
                    level.completed = record.completed;
                    level.stars_earned = record.stars_earned;
                    level.is_unlocked = record.is_unlocked;
                }
                if id == 1 {
                    level.is_unlocked = true;
                }
                level
            })
            .collect()
    }

    /// Record a passing attempt on a poem level: completed sticks, stars keep
    /// their maximum, the next record unlocks. The saved record list is
    /// brought up to the displayed ladder's length first, so levels appended
    /// by frontier growth stay completable. Ids beyond the displayed ladder
    /// are a silent no-op.
    pub fn record_poem_completion(&self, id: u32, stars: u32) {
        let mut records = self.poem_records();
        let ladder = self.poem_ladder();
        for level in &ladder[records.len()..] {
            records.push(PoemLevelRecord::from(level));
        }
        let Some(idx) = records.iter().position(|r| r.id == id) else {
            return;
        };
        records[idx].completed = true;
        records[idx].stars_earned = records[idx].stars_earned.max(stars);
        records[idx].is_unlocked = true;
        if idx + 1 < records.len() {
            records[idx + 1].is_unlocked = true;
        }
        if let Ok(json) = serde_json::to_string(&records) {
            self.store.set(POEM_KEY, &json);
        }
    }

    /// Reset only the poem ladder.
    pub fn reset_poem_ladder(&self) {
        self.store.remove(POEM_KEY);
    }

    fn poem_records(&self) -> Vec<PoemLevelRecord> {
        if let Some(raw) = self.store.get(POEM_KEY) {
            match serde_json::from_str(&raw) {
                Ok(records) => return records,
                Err(_) => warn_corrupt(POEM_KEY),
            }
        }
        Vec::new()
    }
}
