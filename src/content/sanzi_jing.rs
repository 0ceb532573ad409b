//! Three Character Classic (三字经) sections: four three-character phrases per
//! section, in text order. Section ids are 0-based positions.

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
    section(0, "人之初，性本善。性相近，习相远。", "rén zhī chū, xìng běn shàn. xìng xiāng jìn, xí xiāng yuǎn.", "人生下来的时候本性都是善良的，只是后天的环境和习惯让人产生了差别"),
    section(1, "苟不教，性乃迁。教之道，贵以专。", "gǒu bù jiào, xìng nǎi qiān. jiào zhī dào, guì yǐ zhuān.", "如果不加以教导，善良的本性就会变坏；教育的方法贵在专心一致"),
    section(2, "昔孟母，择邻处。子不学，断机杼。", "xī mèng mǔ, zé lín chǔ. zǐ bù xué, duàn jī zhù.", "从前孟子的母亲为选择好邻居搬了三次家；孟子不学习，孟母就割断织机上的布来教育他"),
    section(3, "窦燕山，有义方。教五子，名俱扬。", "dòu yān shān, yǒu yì fāng. jiào wǔ zǐ, míng jù yáng.", "窦燕山教育儿子很有方法，他的五个儿子都很有成就"),
    section(4, "养不教，父之过。教不严，师之惰。", "yǎng bù jiào, fù zhī guò. jiào bù yán, shī zhī duò.", "只抚养而不教育是父亲的过错；教育而不严格要求是老师的怠惰"),
    section(5, "子不学，非所宜。幼不学，老何为。", "zǐ bù xué, fēi suǒ yí. yòu bù xué, lǎo hé wéi.", "小孩子不肯好好学习是很不应该的；小时候不学习，长大了能有什么作为呢"),
    section(6, "玉不琢，不成器。人不学，不知义。", "yù bù zhuó, bù chéng qì. rén bù xué, bù zhī yì.", "玉不经过雕琢不能成为器物；人不学习就不懂得礼仪道义"),
    section(7, "为人子，方少时。亲师友，习礼仪。", "wèi rén zǐ, fāng shào shí. qīn shī yǒu, xí lǐ yí.", "做子女的从小就要亲近良师益友，学习礼节仪态"),
    section(8, "香九龄，能温席。孝于亲，所当执。", "xiāng jiǔ líng, néng wēn xí. xiào yú qīn, suǒ dāng zhí.", "黄香九岁时就知道冬天为父亲温暖被席，孝敬父母是每个人都应该做到的"),
    section(9, "融四岁，能让梨。弟于长，宜先知。", "róng sì suì, néng ràng lí. tì yú zhǎng, yí xiān zhī.", "孔融四岁时就懂得把大梨让给哥哥，尊敬兄长的道理应该从小知道"),
    section(10, "首孝悌，次见闻。知某数，识某文。", "shǒu xiào tì, cì jiàn wén. zhī mǒu shù, shí mǒu wén.", "首先要学孝敬父母、友爱兄弟，其次才是增长见闻、学习知识"),
    section(11, "一而十，十而百。百而千，千而万。", "yī ér shí, shí ér bǎi. bǎi ér qiān, qiān ér wàn.", "从一到十，从十到百，从百到千，从千到万，数目就是这样累计的"),
];
