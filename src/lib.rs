//! Hanzi Garden core crate.
//!
//! Level generation and progression engine for the browser literacy games
//! (quiz, memory matching, spelling, hanzi memory). The UI calls the wasm
//! exports below; everything behind them is plain Rust over an injected
//! key-value store, so the whole progression core runs natively under
//! `cargo test`. Static learning datasets live in [`content`].

use wasm_bindgen::prelude::*;

pub mod content;
pub mod levels;
pub mod storage;

use levels::{GameKind, ProgressStore};
use storage::LocalStorage;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS boundary: stateless calls backed by localStorage
// -----------------------------------------------------------------------------

fn store() -> ProgressStore<LocalStorage> {
    ProgressStore::new(LocalStorage)
}

fn parse_game(game: &str) -> Result<GameKind, JsValue> {
    GameKind::parse(game)
        .ok_or_else(|| JsValue::from_str(&format!("unknown game type '{game}'")))
}

/// Level ladder for one game kind as a JSON array, backfilling a new batch
/// when the player has cleared all seed levels.
#[wasm_bindgen]
pub fn levels_with_backfill(game: &str) -> Result<String, JsValue> {
    let game = parse_game(game)?;
    let levels = store().load_with_backfill(game);
    serde_json::to_string(&levels).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Report a passing attempt. Unknown game kinds and level ids are no-ops;
/// completion reports never fail the UI.
#[wasm_bindgen]
pub fn record_level_completion(game: &str, level_id: u32, stars: u32) {
    if let Ok(game) = parse_game(game) {
        store().record_completion(game, level_id, stars);
    }
}

/// Per-game completion summary (completed / total / stars) as JSON.
#[wasm_bindgen]
pub fn game_progress(game: &str) -> Result<String, JsValue> {
    let game = parse_game(game)?;
    let summary = store().progress_summary(game);
    serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Delete one game kind's saved ladder (seed defaults return on next load).
#[wasm_bindgen]
pub fn reset_progress(game: &str) {
    if let Ok(game) = parse_game(game) {
        store().reset(game);
    }
}

/// Delete all four game ladders. The global star total is kept.
#[wasm_bindgen]
pub fn reset_all_progress() {
    store().reset_all();
}

/// Aggregate star count across all game kinds.
#[wasm_bindgen]
pub fn total_stars() -> u32 {
    store().total_stars()
}

/// The Tang-poem memory ladder (separately persisted) as a JSON array.
#[wasm_bindgen]
pub fn poem_ladder() -> Result<String, JsValue> {
    let levels = store().poem_ladder();
    serde_json::to_string(&levels).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Report a passing attempt on a poem level.
#[wasm_bindgen]
pub fn record_poem_level_completion(level_id: u32, stars: u32) {
    store().record_poem_completion(level_id, stars);
}
