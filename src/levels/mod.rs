//! Level descriptors, seed ladders and the progression machinery.
//!
//! A [`Level`] is the full configuration plus mutable progress state for one
//! playable level. Lists of levels are persisted per [`GameKind`] as JSON
//! arrays with camelCase field names, so saves written by earlier builds of
//! the app keep parsing.

use serde::{Deserialize, Serialize};

use crate::content::ContentSource;

pub mod generator;
pub mod params;
pub mod poem;
pub mod progress;

pub use progress::ProgressStore;

/// Hand-authored levels per game kind; ids above this are generated.
pub const SEED_LEVEL_COUNT: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// The four mini-game surfaces levels are generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    #[serde(rename = "quiz")]
    Quiz,
    #[serde(rename = "memory")]
    Memory,
    #[serde(rename = "spelling")]
    Spelling,
    #[serde(rename = "han-memory")]
    HanMemory,
}

impl GameKind {
    pub const ALL: [GameKind; 4] =
        [GameKind::Quiz, GameKind::Memory, GameKind::Spelling, GameKind::HanMemory];

    pub fn as_str(self) -> &'static str {
        match self {
            GameKind::Quiz => "quiz",
            GameKind::Memory => "memory",
            GameKind::Spelling => "spelling",
            GameKind::HanMemory => "han-memory",
        }
    }

    pub fn parse(s: &str) -> Option<GameKind> {
        GameKind::ALL.into_iter().find(|g| g.as_str() == s)
    }

    /// Persistence key for this kind's level list.
    pub fn storage_key(self) -> String {
        format!("gameLevels_{}", self.as_str())
    }

    /// Memory-style games carry a pair count instead of a question count.
    pub fn is_memory(self) -> bool {
        matches!(self, GameKind::Memory | GameKind::HanMemory)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Full configuration + progress record for one level instance.
/// Identity within one game kind's list is `id` (1-based, dense).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Minimum correct answers to pass (quiz/spelling only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_score: Option<u32>,
    pub star_reward: u32,
    pub is_unlocked: bool,
    pub completed: bool,
    pub stars_earned: u32,
    /// Procedurally generated (id above the seed count) vs hand-authored.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_dynamic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_source: Option<ContentSource>,
    /// 0-based registry positions this level draws its content from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_ids: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u32>,
}

/// Per-game completion summary for the UI header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameProgress {
    pub completed: usize,
    pub total: usize,
    pub stars: u32,
}

// --- Seed ladders -------------------------------------------------------------

fn seed(
    id: u32,
    name: &str,
    description: &str,
    difficulty: Difficulty,
    target_score: Option<u32>,
    star_reward: u32,
) -> Level {
    Level {
        id,
        name: name.to_string(),
        description: description.to_string(),
        difficulty,
        target_score,
        star_reward,
        is_unlocked: id == 1,
        completed: false,
        stars_earned: 0,
        is_dynamic: false,
        content_source: None,
        section_ids: None,
        pair_count: None,
        question_count: None,
    }
}

impl GameKind {
    /// The five hand-tuned levels created when no progress is persisted.
    /// Only id=1 starts unlocked.
    pub fn seed_levels(self) -> Vec<Level> {
        use Difficulty::*;
        match self {
            GameKind::Quiz => vec![
                seed(1, "第一关：初试牛刀", "完成 5 道简单题目", Easy, Some(3), 2),
                seed(2, "第二关：小有成就", "完成 7 道题目，答对 5 题", Medium, Some(5), 3),
                seed(3, "第三关：勇攀高峰", "完成 10 道题目，答对 7 题", Medium, Some(7), 4),
                seed(4, "第四关：挑战极限", "完成 10 道题目，答对 8 题", Hard, Some(8), 5),
                seed(5, "第五关：拼音大师", "完成 10 道题目，答对 9 题", Hard, Some(9), 5),
            ],
            GameKind::Memory => vec![
                seed(1, "第一关：入门挑战", "找出 4 对卡片", Easy, None, 2),
                seed(2, "第二关：进阶测试", "找出 6 对卡片，步数不超过 12 步", Medium, None, 3),
                seed(3, "第三关：高手对决", "找出 8 对卡片，步数不超过 16 步", Medium, None, 4),
                seed(4, "第四关：记忆挑战", "找出 10 对卡片，步数不超过 22 步", Hard, None, 5),
                seed(5, "第五关：超级记忆", "找出 12 对卡片，步数不超过 30 步", Hard, None, 6),
            ],
            GameKind::Spelling => vec![
                seed(1, "第一关：拼音入门", "完成 5 道简单拼写题", Easy, Some(3), 2),
                seed(2, "第二关：声母练习", "完成 7 道题目，答对 5 题", Medium, Some(5), 3),
                seed(3, "第三关：韵母挑战", "完成 10 道题目，答对 7 题", Medium, Some(7), 4),
                seed(4, "第四关：组合拼写", "完成 10 道题目，答对 8 题", Hard, Some(8), 5),
                seed(5, "第五关：拼写大师", "完成 10 道题目，答对 9 题", Hard, Some(9), 5),
            ],
            GameKind::HanMemory => vec![
                seed(1, "第一关：汉字入门", "找出 4 对基础汉字", Easy, None, 2),
                seed(2, "第二关：汉字进阶", "找出 6 对汉字，步数不超过 12 步", Medium, None, 3),
                seed(3, "第三关：汉字高手", "找出 8 对汉字，步数不超过 16 步", Medium, None, 4),
                seed(4, "第四关：汉字挑战", "找出 10 对汉字，步数不超过 22 步", Hard, None, 5),
                seed(5, "第五关：汉字大师", "找出 12 对汉字，步数不超过 30 步", Hard, None, 6),
            ],
        }
    }
}
