//! Phonetic alphabet tables: initials, finals and whole-recognition syllables.
//!
//! Each letter carries an example word so flashcards can show a usage; the
//! example pinyin keeps tone marks for display.

pub struct PinyinLetter {
    pub letter: &'static str,
    pub example: &'static str,
    pub example_pinyin: &'static str,
}

const fn letter(
    letter: &'static str,
    example: &'static str,
    example_pinyin: &'static str,
) -> PinyinLetter {
    PinyinLetter { letter, example, example_pinyin }
}

/// The 23 initials (声母).
pub const INITIALS: &[PinyinLetter] = &[
    letter("b", "爸", "bà"),
    letter("p", "跑", "pǎo"),
    letter("m", "妈", "mā"),
    letter("f", "飞", "fēi"),
    letter("d", "大", "dà"),
    letter("t", "天", "tiān"),
    letter("n", "牛", "niú"),
    letter("l", "蓝", "lán"),
    letter("g", "狗", "gǒu"),
    letter("k", "口", "kǒu"),
    letter("h", "花", "huā"),
    letter("j", "鸡", "jī"),
    letter("q", "气", "qì"),
    letter("x", "星", "xīng"),
    letter("zh", "中", "zhōng"),
    letter("ch", "吃", "chī"),
    letter("sh", "山", "shān"),
    letter("r", "人", "rén"),
    letter("z", "早", "zǎo"),
    letter("c", "草", "cǎo"),
    letter("s", "三", "sān"),
    letter("y", "鱼", "yú"),
    letter("w", "我", "wǒ"),
];

/// The 6 simple finals (单韵母).
pub const SIMPLE_FINALS: &[PinyinLetter] = &[
    letter("a", "啊", "ā"),
    letter("o", "喔", "ō"),
    letter("e", "鹅", "é"),
    letter("i", "衣", "yī"),
    letter("u", "屋", "wū"),
    letter("ü", "雨", "yǔ"),
];

/// The 18 compound and nasal finals (复韵母).
pub const COMPOUND_FINALS: &[PinyinLetter] = &[
    letter("ai", "爱", "ài"),
    letter("ei", "诶", "éi"),
    letter("ui", "水", "shuǐ"),
    letter("ao", "猫", "māo"),
    letter("ou", "口", "kǒu"),
    letter("iu", "牛", "niú"),
    letter("ie", "叶", "yè"),
    letter("üe", "月", "yuè"),
    letter("er", "耳", "ěr"),
    letter("an", "山", "shān"),
    letter("en", "门", "mén"),
    letter("in", "心", "xīn"),
    letter("un", "云", "yún"),
    letter("ün", "军", "jūn"),
    letter("ang", "糖", "táng"),
    letter("eng", "灯", "dēng"),
    letter("ing", "星", "xīng"),
    letter("ong", "龙", "lóng"),
];

/// The 16 whole-recognition syllables (整体认读音节).
pub const WHOLE_SYLLABLES: &[PinyinLetter] = &[
    letter("zhi", "知", "zhī"),
    letter("chi", "吃", "chī"),
    letter("shi", "十", "shí"),
    letter("ri", "日", "rì"),
    letter("zi", "字", "zì"),
    letter("ci", "刺", "cì"),
    letter("si", "四", "sì"),
    letter("yi", "一", "yī"),
    letter("wu", "五", "wǔ"),
    letter("yu", "鱼", "yú"),
    letter("ye", "夜", "yè"),
    letter("yue", "月", "yuè"),
    letter("yuan", "远", "yuǎn"),
    letter("yin", "音", "yīn"),
    letter("yun", "云", "yún"),
    letter("ying", "鹰", "yīng"),
];
