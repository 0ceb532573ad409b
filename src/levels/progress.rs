//! Progression store: one persisted level ladder per game kind, plus the
//! global star counter.
//!
//! All operations are synchronous read-modify-write against the injected
//! key-value substrate. Corrupt or missing persisted data is never an error:
//! the store falls back to the seed defaults so a bad save can reset progress
//! but never block play.

use crate::storage::KeyValueStore;

use super::{generator, GameKind, GameProgress, Level, SEED_LEVEL_COUNT};

/// Levels appended per backfill step.
pub const BATCH_SIZE: u32 = 5;

/// Key of the aggregate star counter, shared across all game kinds.
const STARS_KEY: &str = "gameStars";

pub(crate) fn warn_corrupt(key: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(
        &format!("hanzi-garden: discarding corrupt save under '{key}'").into(),
    );
    #[cfg(not(target_arch = "wasm32"))]
    let _ = key;
}

pub struct ProgressStore<S: KeyValueStore> {
    pub(crate) store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value backend (tests seed raw state through this).
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Persisted ladder for this game kind, or the freshly persisted seed
    /// defaults when nothing (or nothing parseable) is stored.
    pub fn load_or_init(&self, game: GameKind) -> Vec<Level> {
        let key = game.storage_key();
        if let Some(raw) = self.store.get(&key) {
            match serde_json::from_str::<Vec<Level>>(&raw) {
                Ok(levels) => return levels,
                Err(_) => warn_corrupt(&key),
            }
        }
        let seed = game.seed_levels();
        self.save(game, &seed);
        seed
    }

    /// Load the ladder and, if the player has cleared every seed level,
    /// append exactly one batch of generated levels. Single-step: one batch
    /// per call, never a catch-up loop.
    pub fn load_with_backfill(&self, game: GameKind) -> Vec<Level> {
        let mut levels = self.load_or_init(game);
        if self.backfill(game, &mut levels) {
            self.save(game, &levels);
        }
        levels
    }

    /// Record a passing attempt. Unknown ids are a silent no-op: nothing is
    /// created, nothing persisted. Otherwise the level is marked completed,
    /// keeps its best star count, the next level unlocks, the backfill check
    /// re-runs, and the global star total grows by `stars`.
    pub fn record_completion(&self, game: GameKind, id: u32, stars: u32) {
        let mut levels = self.load_or_init(game);
        let Some(idx) = levels.iter().position(|l| l.id == id) else {
            return;
        };
        levels[idx].completed = true;
        levels[idx].stars_earned = levels[idx].stars_earned.max(stars);
        if idx + 1 < levels.len() {
            levels[idx + 1].is_unlocked = true;
        }
        self.backfill(game, &mut levels);
        self.save(game, &levels);
        self.add_stars(stars);
    }

    /// Delete this game kind's persisted ladder; the next load recreates the
    /// seed defaults. The global star total is untouched. Idempotent.
    pub fn reset(&self, game: GameKind) {
        self.store.remove(&game.storage_key());
    }

    pub fn reset_all(&self) {
        for game in GameKind::ALL {
            self.reset(game);
        }
    }

    /// Aggregate stars across all game kinds (0 when absent or corrupt).
    pub fn total_stars(&self) -> u32 {
        self.store
            .get(STARS_KEY)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Completion summary for the level-selector header.
    pub fn progress_summary(&self, game: GameKind) -> GameProgress {
        let levels = self.load_or_init(game);
        GameProgress {
            completed: levels.iter().filter(|l| l.completed).count(),
            total: levels.len(),
            stars: levels.iter().map(|l| l.stars_earned).sum(),
        }
    }

    /// Append one generated batch when all seed levels are completed. The
    /// first appended level unlocks immediately when its predecessor is
    /// already completed; otherwise the normal completion chain unlocks it
    /// later, keeping unlocks contiguous. Returns whether the ladder grew;
    /// the caller persists.
    fn backfill(&self, game: GameKind, levels: &mut Vec<Level>) -> bool {
        let seed_cleared = levels
            .iter()
            .filter(|l| l.id <= SEED_LEVEL_COUNT)
            .all(|l| l.completed);
        if !seed_cleared || levels.is_empty() {
            return false;
        }
        let next_id = levels.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let first_new = levels.len();
        let predecessor_completed = levels.last().is_some_and(|l| l.completed);
        for offset in 0..BATCH_SIZE {
            levels.push(generator::generate(game, next_id + offset, None));
        }
        if predecessor_completed {
            levels[first_new].is_unlocked = true;
        }
        true
    }

    fn save(&self, game: GameKind, levels: &[Level]) {
        if let Ok(json) = serde_json::to_string(levels) {
            self.store.set(&game.storage_key(), &json);
        }
    }

    fn add_stars(&self, stars: u32) {
        let total = self.total_stars() + stars;
        self.store.set(STARS_KEY, &total.to_string());
    }
}
