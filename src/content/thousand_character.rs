//! Thousand Character Classic (千字文) sections: eight characters per section,
//! in text order. Section ids are 0-based positions.

use super::PassageSection;

const fn section(
    id: usize,
    characters: &'static str,
    pinyin: &'static str,
    translation: &'static str,
) -> PassageSection {
    PassageSection { id, characters, pinyin, translation }
}

pub const SECTIONS: &[PassageSection] = &[
    section(0, "天地玄黄 宇宙洪荒", "tiān dì xuán huáng, yǔ zhòu hóng huāng", "天是青黑色的，地是黄色的，宇宙形成于混沌蒙昧之中"),
    section(1, "日月盈昃 辰宿列张", "rì yuè yíng zè, chén xiù liè zhāng", "太阳有正有斜，月亮有缺有圆，星辰布满天空"),
    section(2, "寒来暑往 秋收冬藏", "hán lái shǔ wǎng, qiū shōu dōng cáng", "寒暑循环变换，秋天收割庄稼，冬天储藏粮食"),
    section(3, "闰余成岁 律吕调阳", "rùn yú chéng suì, lǜ lǚ tiáo yáng", "积累数年的闰余并成一个月，放在闰年里；用乐律调和阴阳"),
    section(4, "云腾致雨 露结为霜", "yún téng zhì yǔ, lù jié wéi shuāng", "云气上升遇冷就形成雨，夜里露水遇冷就凝结成霜"),
    section(5, "金生丽水 玉出昆冈", "jīn shēng lì shuǐ, yù chū kūn gāng", "金子产于金沙江底，玉石出自昆仑山冈"),
    section(6, "剑号巨阙 珠称夜光", "jiàn hào jù quē, zhū chēng yè guāng", "最锋利的宝剑叫巨阙，最贵重的明珠叫夜光"),
    section(7, "果珍李柰 菜重芥姜", "guǒ zhēn lǐ nài, cài zhòng jiè jiāng", "水果里最珍贵的是李子和柰子，蔬菜中最重要的是芥菜和生姜"),
    section(8, "海咸河淡 鳞潜羽翔", "hǎi xián hé dàn, lín qián yǔ xiáng", "海水是咸的，河水是淡的，鱼儿在水中潜游，鸟儿在空中飞翔"),
    section(9, "龙师火帝 鸟官人皇", "lóng shī huǒ dì, niǎo guān rén huáng", "龙师、火帝、鸟官、人皇都是上古时期的帝皇官员"),
    section(10, "始制文字 乃服衣裳", "shǐ zhì wén zì, nǎi fú yī cháng", "苍颉创制了文字，嫘祖制作了衣裳"),
    section(11, "推位让国 有虞陶唐", "tuī wèi ràng guó, yǒu yú táo táng", "唐尧和虞舜把君位禅让给贤能之人"),
    section(12, "吊民伐罪 周发殷汤", "diào mín fá zuì, zhōu fā yīn tāng", "安抚百姓、讨伐暴君的，是周武王姬发和商王成汤"),
    section(13, "坐朝问道 垂拱平章", "zuò cháo wèn dào, chuí gǒng píng zhāng", "贤君坐在朝廷上向大臣询问治国之道，垂衣拱手就能使天下太平"),
    section(14, "爱育黎首 臣伏戎羌", "ài yù lí shǒu, chén fú róng qiāng", "爱抚体恤老百姓，使四方民族都归附称臣"),
    section(15, "遐迩一体 率宾归王", "xiá ěr yī tǐ, shuài bīn guī wáng", "远近统一成一体，百姓都来归附君王"),
];
