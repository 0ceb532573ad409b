//! Tang poem collection (唐诗). Poems are ordered roughly easiest-first; the
//! 0-based position in [`POEMS`] is the id level slices refer to.

use super::Grade;

pub struct Poem {
    pub title: &'static str,
    pub author: &'static str,
    pub content: &'static str,
    pub pinyin: &'static str,
    pub translation: &'static str,
    pub difficulty: Grade,
}

const fn poem(
    title: &'static str,
    author: &'static str,
    content: &'static str,
    pinyin: &'static str,
    translation: &'static str,
    difficulty: Grade,
) -> Poem {
    Poem { title, author, content, pinyin, translation, difficulty }
}

pub const POEMS: &[Poem] = &[
    poem(
        "静夜思", "李白",
        "床前明月光，疑是地上霜。举头望明月，低头思故乡。",
        "chuáng qián míng yuè guāng, yí shì dì shàng shuāng. jǔ tóu wàng míng yuè, dī tóu sī gù xiāng.",
        "床前洒满明亮的月光，好像地上结了一层霜。抬头望着明月，低头思念起故乡。",
        Grade::Basic,
    ),
    poem(
        "春晓", "孟浩然",
        "春眠不觉晓，处处闻啼鸟。夜来风雨声，花落知多少。",
        "chūn mián bù jué xiǎo, chù chù wén tí niǎo. yè lái fēng yǔ shēng, huā luò zhī duō shǎo.",
        "春天睡得香甜不知不觉天已亮了，到处都能听到鸟儿的啼叫。昨夜风雨交加，不知道吹落了多少花朵。",
        Grade::Basic,
    ),
    poem(
        "咏鹅", "骆宾王",
        "鹅鹅鹅，曲项向天歌。白毛浮绿水，红掌拨清波。",
        "é é é, qū xiàng xiàng tiān gē. bái máo fú lǜ shuǐ, hóng zhǎng bō qīng bō.",
        "鹅呀鹅，弯着脖子向天歌唱。白色的羽毛浮在碧绿的水面上，红红的脚掌拨动着清清的水波。",
        Grade::Basic,
    ),
    poem(
        "登鹳雀楼", "王之涣",
        "白日依山尽，黄河入海流。欲穷千里目，更上一层楼。",
        "bái rì yī shān jìn, huáng hé rù hǎi liú. yù qióng qiān lǐ mù, gèng shàng yī céng lóu.",
        "太阳依着群山落下，黄河朝着大海奔流。想要看到千里之外的风光，就要再登上一层高楼。",
        Grade::Basic,
    ),
    poem(
        "悯农", "李绅",
        "锄禾日当午，汗滴禾下土。谁知盘中餐，粒粒皆辛苦。",
        "chú hé rì dāng wǔ, hàn dī hé xià tǔ. shuí zhī pán zhōng cān, lì lì jiē xīn kǔ.",
        "农民在正午烈日下锄禾，汗水滴进了禾下的泥土。谁知道盘中的饭食，每一粒都饱含着辛苦。",
        Grade::Basic,
    ),
    poem(
        "池上", "白居易",
        "小娃撑小艇，偷采白莲回。不解藏踪迹，浮萍一道开。",
        "xiǎo wá chēng xiǎo tǐng, tōu cǎi bái lián huí. bù jiě cáng zōng jì, fú píng yī dào kāi.",
        "小孩子撑着小船，偷偷采了白莲回来。他不懂得掩藏自己的行踪，浮萍被船划开了一道波痕。",
        Grade::Basic,
    ),
    poem(
        "相思", "王维",
        "红豆生南国，春来发几枝。愿君多采撷，此物最相思。",
        "hóng dòu shēng nán guó, chūn lái fā jǐ zhī. yuàn jūn duō cǎi xié, cǐ wù zuì xiāng sī.",
        "红豆生长在南方，春天来了又生出多少新枝。希望你多多采摘，它最能寄托相思之情。",
        Grade::Intermediate,
    ),
    poem(
        "绝句", "杜甫",
        "两个黄鹂鸣翠柳，一行白鹭上青天。窗含西岭千秋雪，门泊东吴万里船。",
        "liǎng gè huáng lí míng cuì liǔ, yī háng bái lù shàng qīng tiān. chuāng hán xī lǐng qiān qiū xuě, mén bó dōng wú wàn lǐ chuán.",
        "两只黄鹂在翠绿的柳树间鸣叫，一行白鹭飞上蔚蓝的天空。窗口正对着西岭千年不化的积雪，门外停泊着来自东吴的万里航船。",
        Grade::Intermediate,
    ),
    poem(
        "寻隐者不遇", "贾岛",
        "松下问童子，言师采药去。只在此山中，云深不知处。",
        "sōng xià wèn tóng zǐ, yán shī cǎi yào qù. zhǐ zài cǐ shān zhōng, yún shēn bù zhī chù.",
        "在松树下询问童子，他说师父采药去了。只知道就在这座山中，可山高云深不知道他在哪里。",
        Grade::Intermediate,
    ),
    poem(
        "九月九日忆山东兄弟", "王维",
        "独在异乡为异客，每逢佳节倍思亲。遥知兄弟登高处，遍插茱萸少一人。",
        "dú zài yì xiāng wéi yì kè, měi féng jiā jié bèi sī qīn. yáo zhī xiōng dì dēng gāo chù, biàn chā zhū yú shǎo yī rén.",
        "独自在他乡做客，每逢佳节就加倍思念亲人。遥想兄弟们今日登高的地方，遍插茱萸时会发现少了我一个人。",
        Grade::Intermediate,
    ),
    poem(
        "江雪", "柳宗元",
        "千山鸟飞绝，万径人踪灭。孤舟蓑笠翁，独钓寒江雪。",
        "qiān shān niǎo fēi jué, wàn jìng rén zōng miè. gū zhōu suō lì wēng, dú diào hán jiāng xuě.",
        "千山万岭不见飞鸟的踪影，千路万径不见行人的足迹。一叶孤舟上披蓑戴笠的老翁，独自在寒冷的江上冒雪垂钓。",
        Grade::Advanced,
    ),
    poem(
        "枫桥夜泊", "张继",
        "月落乌啼霜满天，江枫渔火对愁眠。姑苏城外寒山寺，夜半钟声到客船。",
        "yuè luò wū tí shuāng mǎn tiān, jiāng fēng yú huǒ duì chóu mián. gū sū chéng wài hán shān sì, yè bàn zhōng shēng dào kè chuán.",
        "月亮落下乌鸦啼叫寒霜满天，江边枫树与船上渔火伴着愁思入眠。姑苏城外的寒山寺，半夜的钟声传到了客船。",
        Grade::Advanced,
    ),
];
