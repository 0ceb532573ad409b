//! Static learning-content registry.
//!
//! Every dataset the games draw from lives here as inert `const` tables, one
//! file per collection. The level generator never inspects item shapes at
//! runtime: each source yields a tagged [`ContentItem`] variant and callers
//! match on the closed [`ContentSource`] enum.
//!
//! Section ids are 0-based positions in each collection's ordered list, which
//! is also the order slices rotate through as level ids grow.

use serde::{Deserialize, Serialize};

pub mod baijiaxing;
pub mod hanzi;
pub mod pinyin;
pub mod sanzi_jing;
pub mod tang_poetry;
pub mod thousand_character;

/// Difficulty grading shared by poems, surnames and hanzi tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Basic,
    Intermediate,
    Advanced,
}

/// One section of a classic text (Thousand Character Classic, Three Character
/// Classic): a short run of characters with pinyin and a plain reading.
pub struct PassageSection {
    pub id: usize,
    pub characters: &'static str,
    pub pinyin: &'static str,
    pub translation: &'static str,
}

/// Identifier selecting which dataset (and slicing rule) feeds a level.
/// Wire names are stable; persisted levels reference them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentSource {
    #[serde(rename = "pinyin-initial")]
    PinyinInitial,
    #[serde(rename = "pinyin-final")]
    PinyinFinal,
    #[serde(rename = "pinyin-whole")]
    PinyinWhole,
    #[serde(rename = "thousand-character")]
    ThousandCharacter,
    #[serde(rename = "sanzi-jing")]
    SanziJing,
    #[serde(rename = "baijiaxing")]
    Baijiaxing,
    #[serde(rename = "tangshi")]
    Tangshi,
    #[serde(rename = "hanzi-level-1")]
    HanziLevel1,
    #[serde(rename = "hanzi-level-2")]
    HanziLevel2,
    #[serde(rename = "hanzi-level-3")]
    HanziLevel3,
}

/// One item handed to a game loop, tagged by its dataset of origin.
#[derive(Clone, Copy)]
pub enum ContentItem {
    Letter(&'static pinyin::PinyinLetter),
    Passage(&'static PassageSection),
    Surnames(&'static baijiaxing::SurnameSection),
    Poem(&'static tang_poetry::Poem),
    Hanzi(&'static hanzi::HanziEntry),
}

impl ContentSource {
    /// Fixed rotation order used when a generated level does not pin a source.
    pub const ROTATION: [ContentSource; 10] = [
        ContentSource::PinyinInitial,
        ContentSource::PinyinFinal,
        ContentSource::PinyinWhole,
        ContentSource::ThousandCharacter,
        ContentSource::SanziJing,
        ContentSource::Baijiaxing,
        ContentSource::Tangshi,
        ContentSource::HanziLevel1,
        ContentSource::HanziLevel2,
        ContentSource::HanziLevel3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentSource::PinyinInitial => "pinyin-initial",
            ContentSource::PinyinFinal => "pinyin-final",
            ContentSource::PinyinWhole => "pinyin-whole",
            ContentSource::ThousandCharacter => "thousand-character",
            ContentSource::SanziJing => "sanzi-jing",
            ContentSource::Baijiaxing => "baijiaxing",
            ContentSource::Tangshi => "tangshi",
            ContentSource::HanziLevel1 => "hanzi-level-1",
            ContentSource::HanziLevel2 => "hanzi-level-2",
            ContentSource::HanziLevel3 => "hanzi-level-3",
        }
    }

    pub fn parse(s: &str) -> Option<ContentSource> {
        ContentSource::ROTATION.into_iter().find(|c| c.as_str() == s)
    }

    /// Number of ordered sections/items this source exposes to slicing.
    pub fn section_count(self) -> usize {
        match self {
            ContentSource::PinyinInitial => pinyin::INITIALS.len(),
            ContentSource::PinyinFinal => {
                pinyin::SIMPLE_FINALS.len() + pinyin::COMPOUND_FINALS.len()
            }
            ContentSource::PinyinWhole => pinyin::WHOLE_SYLLABLES.len(),
            ContentSource::ThousandCharacter => thousand_character::SECTIONS.len(),
            ContentSource::SanziJing => sanzi_jing::SECTIONS.len(),
            ContentSource::Baijiaxing => baijiaxing::SECTIONS.len(),
            ContentSource::Tangshi => tang_poetry::POEMS.len(),
            ContentSource::HanziLevel1 => hanzi::graded(Grade::Basic).count(),
            ContentSource::HanziLevel2 => hanzi::graded(Grade::Intermediate).count(),
            ContentSource::HanziLevel3 => hanzi::graded(Grade::Advanced).count(),
        }
    }

    /// Full ordered item list for this source.
    pub fn sections(self) -> Vec<ContentItem> {
        match self {
            ContentSource::PinyinInitial => {
                pinyin::INITIALS.iter().map(ContentItem::Letter).collect()
            }
            ContentSource::PinyinFinal => pinyin::SIMPLE_FINALS
                .iter()
                .chain(pinyin::COMPOUND_FINALS.iter())
                .map(ContentItem::Letter)
                .collect(),
            ContentSource::PinyinWhole => pinyin::WHOLE_SYLLABLES
                .iter()
                .map(ContentItem::Letter)
                .collect(),
            ContentSource::ThousandCharacter => thousand_character::SECTIONS
                .iter()
                .map(ContentItem::Passage)
                .collect(),
            ContentSource::SanziJing => {
                sanzi_jing::SECTIONS.iter().map(ContentItem::Passage).collect()
            }
            ContentSource::Baijiaxing => {
                baijiaxing::SECTIONS.iter().map(ContentItem::Surnames).collect()
            }
            ContentSource::Tangshi => {
                tang_poetry::POEMS.iter().map(ContentItem::Poem).collect()
            }
            ContentSource::HanziLevel1 => {
                hanzi::graded(Grade::Basic).map(ContentItem::Hanzi).collect()
            }
            ContentSource::HanziLevel2 => hanzi::graded(Grade::Intermediate)
                .map(ContentItem::Hanzi)
                .collect(),
            ContentSource::HanziLevel3 => hanzi::graded(Grade::Advanced)
                .map(ContentItem::Hanzi)
                .collect(),
        }
    }

    /// Items at the given 0-based positions, in registry order (the order of
    /// `ids` does not matter and duplicates are ignored).
    pub fn sections_by_ids(self, ids: &[usize]) -> Vec<ContentItem> {
        self.sections()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| ids.contains(i))
            .map(|(_, item)| item)
            .collect()
    }
}
