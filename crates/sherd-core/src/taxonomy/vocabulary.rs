//! Built-in ceramic vocabulary.
//!
//! Covers Chinese imperial wares and European (chiefly Dutch and Belgian)
//! tin-glazed pottery. All surface forms are lower-case.

use super::KeywordSet;

pub(super) fn colors() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "blue and white",
            &[
                "blue", "white", "blue and white", "underglaze blue", "cobalt blue", "qinghua",
                "blue white", "delft blue", "delfts blauw",
            ],
        ),
        (
            "celadon",
            &[
                "celadon", "green glaze", "greenish", "longquan celadon", "yue celadon",
                "greenware", "sea green",
            ],
        ),
        (
            "famille rose",
            &["famille rose", "pink", "rose", "fencai", "yangcai", "enamel pink"],
        ),
        (
            "famille verte",
            &["famille verte", "green family", "kangxi palette", "wucai"],
        ),
        (
            "red",
            &["red", "copper red", "iron red", "sang de boeuf", "oxblood", "jihong", "crimson"],
        ),
        (
            "yellow",
            &["yellow", "imperial yellow", "egg yolk", "lemon yellow", "mustard"],
        ),
        ("black", &["black", "mirror black", "tenmoku", "jian ware"]),
        (
            "brown",
            &["brown", "cafe-au-lait", "chocolate", "tea dust", "coffee"],
        ),
        ("purple", &["purple", "aubergine", "violet", "lavender", "plum"]),
        (
            "green",
            &["green", "apple green", "cucumber green", "emerald", "jade"],
        ),
        ("gold", &["gold", "gilt", "gilded", "golden", "gilding"]),
        (
            "multicolor",
            &[
                "polychrome", "multicolor", "wucai", "doucai", "contrasting colors", "five color",
            ],
        ),
    ])
}

pub(super) fn decoration_themes() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "floral",
            &[
                "flower", "floral", "peony", "lotus", "chrysanthemum", "prunus", "bamboo", "pine",
                "plant", "leaf", "branch", "bloom", "blossom", "orchid", "camellia", "magnolia",
                "plum blossom", "rose", "lily", "iris", "narcissus", "tree", "foliage", "vine",
                "spray", "flowers", "petals", "stems", "buds", "willow", "tulip",
            ],
        ),
        (
            "figural",
            &[
                "figure", "people", "scholar", "lady", "child", "immortal", "deity", "warrior",
                "official", "sage", "goddess", "emperor", "court", "attendant", "maiden", "monk",
                "buddha", "bodhisattva", "luohan", "guanyin", "figures", "person", "man", "woman",
                "boy", "dutch figure", "european figure",
            ],
        ),
        (
            "animal",
            &[
                "dragon", "phoenix", "bird", "crane", "fish", "deer", "lion", "tiger", "horse",
                "butterfly", "qilin", "foo dog", "bat", "magpie", "peacock", "eagle", "carp",
                "goldfish", "mandarin duck", "rooster", "rabbit", "birds", "animals",
            ],
        ),
        (
            "landscape",
            &[
                "landscape", "mountain", "river", "pavilion", "garden", "rock", "tree", "cloud",
                "moon", "scenery", "waterfall", "bridge", "pagoda", "temple", "island", "boat",
                "shore", "cliff", "wave", "mist", "mountains", "hills", "valley", "lake",
                "windmill", "canal", "dutch landscape",
            ],
        ),
        (
            "geometric",
            &[
                "geometric", "pattern", "band", "border", "scroll", "lattice", "diaper",
                "key-fret", "meander", "lozenge", "checkerboard", "zigzag", "diamond", "hexagon",
                "octagon", "circle", "square", "triangle", "stripes", "dots", "lines",
            ],
        ),
        (
            "calligraphy",
            &[
                "character", "inscription", "poem", "text", "writing", "calligraphy",
                "seal script", "kaishu", "poetry", "verse", "couplet", "mark", "characters",
                "script",
            ],
        ),
        (
            "symbolic",
            &[
                "ruyi", "shou", "fu", "lu", "xi", "bagua", "taiji", "yin yang", "endless knot",
                "auspicious", "symbol", "eight treasures", "buddhist emblems", "daoist emblems",
                "coat of arms", "heraldic",
            ],
        ),
    ])
}

pub(super) fn shapes() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "bowl",
            &["bowl", "deep bowl", "shallow bowl", "tea bowl", "rice bowl", "lotus bowl"],
        ),
        (
            "vase",
            &[
                "vase", "meiping", "baluster vase", "bottle vase", "gu", "hu", "zun", "tulip vase",
            ],
        ),
        (
            "jar",
            &["jar", "ginger jar", "storage jar", "covered jar", "lidded jar", "tobacco jar"],
        ),
        ("plate", &["plate", "dish", "charger", "saucer", "platter"]),
        (
            "cup",
            &["cup", "tea cup", "wine cup", "stem cup", "beaker", "teacup"],
        ),
        (
            "pot",
            &["pot", "teapot", "wine pot", "water pot", "ewer", "kettle", "coffee pot"],
        ),
        (
            "bottle",
            &["bottle", "moon flask", "double gourd", "pilgrim flask", "snuff bottle"],
        ),
        (
            "box",
            &["box", "covered box", "seal box", "cosmetic box", "container"],
        ),
        (
            "censer",
            &["censer", "incense burner", "tripod censer", "brazier"],
        ),
        (
            "ewer",
            &["ewer", "wine ewer", "water ewer", "spouted vessel", "pitcher"],
        ),
        (
            "tile",
            &["tile", "wall tile", "floor tile", "decorative tile"],
        ),
    ])
}

pub(super) fn functions() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "tea",
            &["tea", "tea bowl", "teapot", "tea cup", "tea ceremony", "tea service"],
        ),
        (
            "wine",
            &["wine", "wine cup", "wine pot", "wine vessel", "drinking"],
        ),
        (
            "dining",
            &["dining", "eating", "food", "serving", "table", "banquet", "tableware"],
        ),
        (
            "ceremonial",
            &[
                "ceremonial", "ritual", "religious", "altar", "offering", "sacrifice", "temple",
            ],
        ),
        (
            "storage",
            &[
                "storage", "container", "jar", "keeping", "preservation", "vessel", "tobacco",
            ],
        ),
        (
            "decorative",
            &["decorative", "display", "ornamental", "aesthetic", "ornament"],
        ),
        (
            "scholarly",
            &["scholar", "study", "desk", "brush", "ink", "literati", "studio", "writing"],
        ),
        (
            "cosmetic",
            &["cosmetic", "powder", "rouge", "mirror", "toiletry", "makeup"],
        ),
        (
            "export",
            &["export", "trade", "commercial", "overseas", "maritime", "shipping", "canton"],
        ),
        (
            "pharmaceutical",
            &["pharmaceutical", "apothecary", "medicine", "drug jar"],
        ),
    ])
}

pub(super) fn materials() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "porcelain",
            &[
                "porcelain", "hard-paste", "soft-paste", "high-fired", "paste porcelain",
                "chinese porcelain",
            ],
        ),
        ("stoneware", &["stoneware", "stone ware", "proto-porcelain"]),
        (
            "earthenware",
            &["earthenware", "pottery", "terracotta", "ceramics", "faience", "delftware"],
        ),
        ("ceramic", &["ceramic", "pottery"]),
    ])
}

pub(super) fn glazes() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "celadon",
            &["celadon", "longquan", "guan", "ge", "greenware", "yue ware", "ru ware"],
        ),
        (
            "blue_white",
            &[
                "blue and white", "underglaze blue", "cobalt", "qinghua", "ming blue", "delft blue",
            ],
        ),
        (
            "famille_rose",
            &["famille rose", "fencai", "overglaze enamel", "yangcai", "rose enamel"],
        ),
        (
            "famille_verte",
            &["famille verte", "wucai", "five color", "kangxi colors"],
        ),
        (
            "monochrome",
            &["monochrome", "single color", "solid glaze", "plain"],
        ),
        (
            "crackle",
            &["crackle", "crazing", "ice crackle", "ge glaze", "craquelure"],
        ),
        (
            "flambe",
            &["flambe", "transmutation", "jun glaze", "copper splash"],
        ),
        (
            "sancai",
            &["sancai", "three color", "tang sancai", "tricolor"],
        ),
        (
            "underglaze",
            &["underglaze", "underglaze red", "underglaze copper", "underglaze painting"],
        ),
        (
            "overglaze",
            &["overglaze", "enamel", "enameled", "overglaze enamel"],
        ),
        (
            "transfer",
            &["transfer", "transfer printed", "transfer print", "printed"],
        ),
        (
            "tin_glaze",
            &[
                "tin glaze", "tin-glazed", "tin glazed", "tin-glaze", "maiolica", "majolica",
                "faience", "faïence", "émail stannifère", "tinglazuur", "plateel", "fayence",
                "zinnglasur", "galleyware", "galliware", "delftware",
            ],
        ),
    ])
}

pub(super) fn production_places() -> KeywordSet {
    KeywordSet::from_pairs(&[
        // Chinese kilns
        (
            "jingdezhen",
            &["jingdezhen", "jiangxi", "imperial kiln", "porcelain capital", "ching-te-chen"],
        ),
        ("longquan", &["longquan", "zhejiang", "longquan kiln"]),
        (
            "dehua",
            &["dehua", "fujian", "blanc de chine", "white porcelain", "te-hua"],
        ),
        ("yixing", &["yixing", "jiangsu", "purple clay", "zisha"]),
        ("jun", &["jun", "junzhou", "henan", "jun kiln", "chun"]),
        ("ding", &["ding", "dingzhou", "hebei", "ding kiln"]),
        ("cizhou", &["cizhou", "hebei", "cizhou kiln", "tz'u-chou"]),
        ("yaozhou", &["yaozhou", "shaanxi", "yaozhou kiln"]),
        (
            "china",
            &["china", "chinese", "middle kingdom", "zhongguo", "chine", "cina", "kina"],
        ),
        // Dutch centres
        (
            "delft",
            &[
                "delft", "delftware", "delfts", "delftse", "hollants porceleyn", "dutch delft",
                "de porceleyne fles", "de grieksche a", "de witte ster", "royal delft",
                "de delftse pauw", "delft pottery", "delfts blauw", "delft blue", "tin glaze",
                "tin-glaze", "tin glazed", "tin-glazed", "faience", "faïence", "plateel",
                "galleyware", "galliware", "maiolica", "majolica", "dutch blue and white",
                "dutch blue white", "tin glazuur", "tinglazuur",
            ],
        ),
        ("amsterdam", &["amsterdam", "amsterdamse"]),
        ("rotterdam", &["rotterdam", "rotterdamse"]),
        ("haarlem", &["haarlem", "haarlemse"]),
        ("makkum", &["makkum", "tichelaar", "friesland"]),
        (
            "netherlands",
            &["netherlands", "dutch", "holland", "nederlandse", "hollandse", "nederland"],
        ),
        // Belgian centres
        (
            "belgium",
            &["belgium", "belgian", "belgique", "belgie", "belgisch"],
        ),
        ("brussels", &["brussels", "bruxelles", "brussel"]),
        ("antwerp", &["antwerp", "antwerpen", "anvers"]),
        ("tournai", &["tournai", "doornik"]),
        ("ghent", &["ghent", "gent", "gand"]),
        // Other European centres
        ("meissen", &["meissen", "dresden", "saxony"]),
        ("sevres", &["sevres", "vincennes"]),
        ("worcester", &["worcester", "dr wall"]),
        ("staffordshire", &["staffordshire", "stoke on trent"]),
        // Trade
        (
            "export",
            &[
                "export", "canton", "guangzhou", "trade port", "chinese export", "export porcelain",
            ],
        ),
    ])
}

pub(super) fn periods() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "tang",
            &["tang", "tang dynasty", "618-907", "7th century", "8th century", "9th century"],
        ),
        (
            "song",
            &[
                "song", "northern song", "southern song", "song dynasty", "960-1279",
                "10th century", "11th century", "12th century", "13th century",
            ],
        ),
        (
            "yuan",
            &["yuan", "mongol", "yuan dynasty", "1279-1368", "13th century", "14th century"],
        ),
        (
            "ming",
            &[
                "ming", "hongwu", "yongle", "xuande", "chenghua", "zhengde", "jiajing", "wanli",
                "tianqi", "chongzhen", "ming dynasty", "1368-1644", "14th century",
                "15th century", "16th century", "17th century",
            ],
        ),
        (
            "qing",
            &[
                "qing", "shunzhi", "kangxi", "yongzheng", "qianlong", "jiaqing", "daoguang",
                "xianfeng", "tongzhi", "guangxu", "xuantong", "qing dynasty", "1644-1911",
                "17th century", "18th century", "19th century", "20th century",
            ],
        ),
        (
            "republic",
            &["republic", "minguo", "republic of china", "1912-1949"],
        ),
        (
            "modern",
            &["modern", "contemporary", "20th century", "21st century", "1900s", "2000s"],
        ),
        (
            "delft_golden_age",
            &["1640-1740", "dutch golden age", "17th century delft", "18th century delft"],
        ),
        (
            "delft_revival",
            &["1870-1920", "delft revival", "new delft", "art nouveau delft"],
        ),
    ])
}

/// Canonical place name -> multilingual variants.
pub(super) fn place_variants() -> KeywordSet {
    KeywordSet::from_pairs(&[
        (
            "china",
            &[
                "china", "chine", "cina", "kina", "kitajska", "txina", "kína", "ķīna", "kiina",
                "hiina", "čína", "síne", "xina", "kinijos", "chinese", "chińska",
                "ljudska republika kitajska", "txinako herri errepublika",
                "repubblika tal-poplu taċ-ċina", "λαϊκή δημοκρατία της κίνας",
                "daon-phoblacht na síne", "república popular de la xina",
                "kinijos liaudies respublika", "中国", "zhongguo", "middle kingdom", "китай",
            ],
        ),
        (
            "vienna",
            &["vienna", "wien", "viena", "viin", "viedeň", "виена", "bécs", "vienne"],
        ),
        (
            "netherlands",
            &[
                "netherlands", "nederland", "holland", "pays-bas", "niederlande", "olanda",
                "países bajos", "países baixos", "paesi bassi", "holandia", "hollanda",
            ],
        ),
        (
            "belgium",
            &["belgium", "belgique", "belgië", "belgien", "bélgica", "belgio", "belgia"],
        ),
        (
            "brussels",
            &[
                "brussels", "bruxelles", "brussel", "an bhruiséil", "brisele", "briseles",
                "briuselio", "briuselis", "bruksela", "brusel", "brusela", "brüssel",
            ],
        ),
        (
            "united_kingdom",
            &[
                "united kingdom", "uk", "britain", "great britain", "england",
                "an ríocht aontaithe", "apvienotā karaliste", "egyesült királyság",
                "erresuma batua", "regatul unit",
            ],
        ),
        ("japan", &["japan", "nippon", "an tseapáin", "日本"]),
    ])
}
