//! Graded hanzi tiers for the character games.
//! Tone numbers: 1–5 where 5 denotes neutral tone.

use super::Grade;

pub struct HanziEntry {
    pub hanzi: &'static str,
    pub pinyin: &'static str,
    pub grade: Grade,
}

const fn h(hanzi: &'static str, pinyin: &'static str, grade: Grade) -> HanziEntry {
    HanziEntry { hanzi, pinyin, grade }
}

pub const HANZI: &[HanziEntry] = &[
    // Basic: single characters a first reader meets early.
    h("你", "ni3", Grade::Basic), h("好", "hao3", Grade::Basic),
    h("猫", "mao1", Grade::Basic), h("学", "xue2", Grade::Basic),
    h("大", "da4", Grade::Basic), h("小", "xiao3", Grade::Basic),
    h("山", "shan1", Grade::Basic), h("水", "shui3", Grade::Basic),
    h("月", "yue4", Grade::Basic), h("日", "ri4", Grade::Basic),
    h("天", "tian1", Grade::Basic), h("人", "ren2", Grade::Basic),
    h("口", "kou3", Grade::Basic), h("中", "zhong1", Grade::Basic),
    h("上", "shang4", Grade::Basic), h("下", "xia4", Grade::Basic),
    h("火", "huo3", Grade::Basic), h("木", "mu4", Grade::Basic),
    // Intermediate: single characters with more strokes or rarer readings.
    h("汉", "han4", Grade::Intermediate), h("字", "zi4", Grade::Intermediate),
    h("黑", "hei1", Grade::Intermediate), h("鱼", "yu2", Grade::Intermediate),
    h("国", "guo2", Grade::Intermediate), h("左", "zuo3", Grade::Intermediate),
    h("右", "you4", Grade::Intermediate), h("心", "xin1", Grade::Intermediate),
    h("手", "shou3", Grade::Intermediate), h("目", "mu4", Grade::Intermediate),
    h("耳", "er3", Grade::Intermediate), h("足", "zu2", Grade::Intermediate),
    h("米", "mi3", Grade::Intermediate), h("花", "hua1", Grade::Intermediate),
    h("林", "lin2", Grade::Intermediate), h("雨", "yu3", Grade::Intermediate),
    // Advanced: characters with complex forms or less common in early texts.
    h("食", "shi2", Grade::Advanced), h("电", "dian4", Grade::Advanced),
    h("风", "feng1", Grade::Advanced), h("龙", "long2", Grade::Advanced),
    h("鸟", "niao3", Grade::Advanced), h("马", "ma3", Grade::Advanced),
    h("雪", "xue3", Grade::Advanced), h("云", "yun2", Grade::Advanced),
    h("星", "xing1", Grade::Advanced), h("海", "hai3", Grade::Advanced),
    h("桥", "qiao2", Grade::Advanced), h("船", "chuan2", Grade::Advanced),
];

/// All entries of one grade, in table order.
pub fn graded(grade: Grade) -> impl Iterator<Item = &'static HanziEntry> {
    HANZI.iter().filter(move |e| e.grade == grade)
}
