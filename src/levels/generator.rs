//! Dynamic level generator.
//!
//! Builds a fully-populated [`Level`] for a (game kind, id, content source)
//! triple. Everything is a deterministic function of the id: the source
//! rotation, the section slice, the counts and the display strings. Unlock
//! state is the progression store's responsibility, so generated levels
//! always come back locked and uncompleted.

use crate::content::ContentSource;

use super::params;
use super::{GameKind, Level};

/// Build the level for this id. When `source` is `None` the fixed rotation
/// picks one, so every content source reappears periodically as ids grow.
pub fn generate(game: GameKind, id: u32, source: Option<ContentSource>) -> Level {
    let source = source.unwrap_or_else(|| rotation_source(id));
    if game.is_memory() {
        memory_level(id, source)
    } else {
        question_level(game, id, source)
    }
}

/// The content source the rotation assigns to this id.
pub fn rotation_source(id: u32) -> ContentSource {
    let sources = &ContentSource::ROTATION;
    sources[(id as usize - 1) % sources.len()]
}

/// Contiguous slice of `width` section ids starting at a rotating offset,
/// clipped at the end of the registry (no wrap within one level).
fn section_slice(id: u32, stride: usize, width: usize, total: usize) -> Vec<usize> {
    let start = ((id as usize - 1) * stride) % total;
    let end = (start + width).min(total);
    (start..end).collect()
}

/// 1-based "{first}-{last}" label for a slice, for display strings.
fn range_label(ids: &[usize]) -> String {
    format!("{}-{}", ids[0] + 1, ids[ids.len() - 1] + 1)
}

fn question_level(game: GameKind, id: u32, source: ContentSource) -> Level {
    let question_count = params::question_count(id);
    let target = params::target_score(id, question_count);
    let verb = if game == GameKind::Spelling { "拼写" } else { "挑战" };

    let mut section_ids = None;
    let (name_tail, description) = match source {
        ContentSource::PinyinInitial => (
            format!("声母{verb}"),
            format!("从声母中选出 {question_count} 道题目，答对 {target} 题"),
        ),
        ContentSource::PinyinFinal => (
            format!("韵母{verb}"),
            format!("从韵母中选出 {question_count} 道题目，答对 {target} 题"),
        ),
        ContentSource::PinyinWhole => (
            format!("整体认读{verb}"),
            format!("从整体认读音节中选出 {question_count} 道题目，答对 {target} 题"),
        ),
        ContentSource::ThousandCharacter => {
            let ids = section_slice(id, 3, 3, source.section_count());
            let label = range_label(&ids);
            section_ids = Some(ids);
            (
                format!("千字文 {label} 段"),
                format!("从千字文第 {label} 段中选出 {question_count} 题，答对 {target} 题"),
            )
        }
        ContentSource::SanziJing => {
            let ids = section_slice(id, 2, 2, source.section_count());
            let label = range_label(&ids);
            section_ids = Some(ids);
            (
                format!("三字经 {label} 段"),
                format!("从三字经第 {label} 段中选出 {question_count} 题，答对 {target} 题"),
            )
        }
        ContentSource::Baijiaxing => {
            let ids = section_slice(id, 2, 2, source.section_count());
            let label = range_label(&ids);
            section_ids = Some(ids);
            (
                format!("百家姓 {label} 段"),
                format!("从百家姓第 {label} 段中选出 {question_count} 题，答对 {target} 题"),
            )
        }
        ContentSource::Tangshi => {
            let ids = section_slice(id, 3, 3, source.section_count());
            let label = range_label(&ids);
            section_ids = Some(ids);
            (
                format!("唐诗精选 {label} 首"),
                format!("从唐诗第 {label} 首中选出 {question_count} 题，答对 {target} 题"),
            )
        }
        ContentSource::HanziLevel1 => (
            format!("基础汉字{verb}"),
            format!("为 {question_count} 个基础汉字选拼音，答对 {target} 题"),
        ),
        ContentSource::HanziLevel2 => (
            format!("进阶汉字{verb}"),
            format!("为 {question_count} 个中级汉字选拼音，答对 {target} 题"),
        ),
        ContentSource::HanziLevel3 => (
            format!("高级汉字{verb}"),
            format!("为 {question_count} 个高级汉字选拼音，答对 {target} 题"),
        ),
    };

    Level {
        id,
        name: format!("第 {id} 关 - {name_tail}"),
        description,
        difficulty: params::difficulty_for(id),
        target_score: Some(target),
        star_reward: params::star_reward(id),
        is_unlocked: false,
        completed: false,
        stars_earned: 0,
        is_dynamic: true,
        content_source: Some(source),
        section_ids,
        pair_count: None,
        question_count: Some(question_count),
    }
}

fn memory_level(id: u32, source: ContentSource) -> Level {
    let pair_count = params::pair_count(id);
    let max_moves = params::max_moves(id, pair_count);

    let mut section_ids = None;
    let (name_tail, description) = match source {
        ContentSource::PinyinInitial => (
            "声母翻牌".to_string(),
            format!("找出 {pair_count} 对声母卡片，步数不超过 {max_moves} 步"),
        ),
        ContentSource::PinyinFinal => (
            "韵母翻牌".to_string(),
            format!("找出 {pair_count} 对韵母卡片，步数不超过 {max_moves} 步"),
        ),
        ContentSource::PinyinWhole => (
            "整体认读翻牌".to_string(),
            format!("找出 {pair_count} 对整体认读音节卡片，步数不超过 {max_moves} 步"),
        ),
        ContentSource::ThousandCharacter => {
            let section = ((id as usize - 1) * 4) % source.section_count();
            section_ids = Some(vec![section]);
            (
                format!("千字文 第 {} 段", section + 1),
                format!("从千字文第 {} 段中找出 {pair_count} 对汉字，步数不超过 {max_moves} 步", section + 1),
            )
        }
        ContentSource::SanziJing => {
            let section = ((id as usize - 1) * 3) % source.section_count();
            section_ids = Some(vec![section]);
            (
                format!("三字经 第 {} 段", section + 1),
                format!("从三字经第 {} 段中找出 {pair_count} 对汉字，步数不超过 {max_moves} 步", section + 1),
            )
        }
        ContentSource::Baijiaxing => {
            let section = ((id as usize - 1) * 3) % source.section_count();
            section_ids = Some(vec![section]);
            (
                format!("百家姓 第 {} 段", section + 1),
                format!("从百家姓第 {} 段中找出 {pair_count} 对姓氏，步数不超过 {max_moves} 步", section + 1),
            )
        }
        ContentSource::Tangshi => {
            let section = ((id as usize - 1) * 4) % source.section_count();
            section_ids = Some(vec![section]);
            (
                format!("唐诗精选 第 {} 首", section + 1),
                format!("从唐诗第 {} 首中找出 {pair_count} 对卡片，步数不超过 {max_moves} 步", section + 1),
            )
        }
        ContentSource::HanziLevel1 => (
            "基础汉字翻牌".to_string(),
            format!("找出 {pair_count} 对基础汉字，步数不超过 {max_moves} 步"),
        ),
        ContentSource::HanziLevel2 => (
            "进阶汉字翻牌".to_string(),
            format!("找出 {pair_count} 对中级汉字，步数不超过 {max_moves} 步"),
        ),
        ContentSource::HanziLevel3 => (
            "高级汉字翻牌".to_string(),
            format!("找出 {pair_count} 对高级汉字，步数不超过 {max_moves} 步"),
        ),
    };

    Level {
        id,
        name: format!("第 {id} 关 - {name_tail}"),
        description,
        difficulty: params::difficulty_for(id),
        target_score: None,
        star_reward: params::star_reward(id),
        is_unlocked: false,
        completed: false,
        stars_earned: 0,
        is_dynamic: true,
        content_source: Some(source),
        section_ids,
        pair_count: Some(pair_count),
        question_count: None,
    }
}
