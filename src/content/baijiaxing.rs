//! Hundred Family Surnames (百家姓) sections: eight surnames per section, in
//! text order. Section ids are 0-based positions.

pub struct Surname {
    pub surname: &'static str,
    pub pinyin: &'static str,
}

pub struct SurnameSection {
    pub id: usize,
    pub title: &'static str,
    pub surnames: &'static [Surname],
}

const fn s(surname: &'static str, pinyin: &'static str) -> Surname {
    Surname { surname, pinyin }
}

pub const SECTIONS: &[SurnameSection] = &[
    SurnameSection {
        id: 0,
        title: "赵钱孙李",
        surnames: &[
            s("赵", "zhào"), s("钱", "qián"), s("孙", "sūn"), s("李", "lǐ"),
            s("周", "zhōu"), s("吴", "wú"), s("郑", "zhèng"), s("王", "wáng"),
        ],
    },
    SurnameSection {
        id: 1,
        title: "冯陈褚卫",
        surnames: &[
            s("冯", "féng"), s("陈", "chén"), s("褚", "chǔ"), s("卫", "wèi"),
            s("蒋", "jiǎng"), s("沈", "shěn"), s("韩", "hán"), s("杨", "yáng"),
        ],
    },
    SurnameSection {
        id: 2,
        title: "朱秦尤许",
        surnames: &[
            s("朱", "zhū"), s("秦", "qín"), s("尤", "yóu"), s("许", "xǔ"),
            s("何", "hé"), s("吕", "lǚ"), s("施", "shī"), s("张", "zhāng"),
        ],
    },
    SurnameSection {
        id: 3,
        title: "孔曹严华",
        surnames: &[
            s("孔", "kǒng"), s("曹", "cáo"), s("严", "yán"), s("华", "huà"),
            s("金", "jīn"), s("魏", "wèi"), s("陶", "táo"), s("姜", "jiāng"),
        ],
    },
    SurnameSection {
        id: 4,
        title: "戚谢邹喻",
        surnames: &[
            s("戚", "qī"), s("谢", "xiè"), s("邹", "zōu"), s("喻", "yù"),
            s("柏", "bǎi"), s("水", "shuǐ"), s("窦", "dòu"), s("章", "zhāng"),
        ],
    },
    SurnameSection {
        id: 5,
        title: "云苏潘葛",
        surnames: &[
            s("云", "yún"), s("苏", "sū"), s("潘", "pān"), s("葛", "gě"),
            s("奚", "xī"), s("范", "fàn"), s("彭", "péng"), s("郎", "láng"),
        ],
    },
    SurnameSection {
        id: 6,
        title: "鲁韦昌马",
        surnames: &[
            s("鲁", "lǔ"), s("韦", "wéi"), s("昌", "chāng"), s("马", "mǎ"),
            s("苗", "miáo"), s("凤", "fèng"), s("花", "huā"), s("方", "fāng"),
        ],
    },
    SurnameSection {
        id: 7,
        title: "俞任袁柳",
        surnames: &[
            s("俞", "yú"), s("任", "rèn"), s("袁", "yuán"), s("柳", "liǔ"),
            s("酆", "fēng"), s("鲍", "bào"), s("史", "shǐ"), s("唐", "táng"),
        ],
    },
];
