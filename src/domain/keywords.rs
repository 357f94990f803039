//! Domain keyword set
//!
//! Matched as lowercase substrings of the lowercased query. Several short
//! entries ("un", "war", "key", "aid") also occur inside unrelated words.

/// English terms
pub const ENGLISH: &[&str] = &[
    "palestine",
    "palestinian",
    "gaza",
    "west bank",
    "jerusalem",
    "al-quds",
    "israel",
    "israeli",
    "occupation",
    "intifada",
    "nakba",
    "hamas",
    "fatah",
    "plo",
    "bds",
    "boycott",
    "settlement",
    "settler",
    "zionism",
    "zionist",
    "al-aqsa",
    "dome of rock",
    "hebron",
    "ramallah",
    "bethlehem",
    "nablus",
    "jenin",
    "rafah",
    "khan younis",
    "unrwa",
    "refugee",
    "right of return",
    "oslo",
    "two-state",
    "one-state",
    "apartheid",
    "wall",
    "barrier",
    "checkpoint",
    "blockade",
    "olive",
    "resistance",
    "martyr",
    "shahid",
    "idf",
    "arab",
    "middle east",
    "levant",
    "holy land",
    "balfour",
    "1948",
    "1967",
    "uprising",
    "protest",
    "demonstration",
    "solidarity",
    "human rights",
    "international law",
    "un resolution",
    "colonization",
    "annexation",
    "displacement",
    "demolition",
    "prisoner",
    "detention",
    "administrative detention",
    "hunger strike",
    "flotilla",
    "aid",
    "humanitarian",
    "ceasefire",
    "peace process",
    "negotiation",
    "mediation",
    "conflict",
    "war",
    "attack",
    "bombing",
    "airstrike",
    "rocket",
    "tunnel",
    "border",
    "crossing",
    "siege",
    "sanction",
    "embargo",
    "economy",
    "water",
    "electricity",
    "infrastructure",
    "education",
    "health",
    "culture",
    "heritage",
    "identity",
    "diaspora",
    "return",
    "citizenship",
    "stateless",
    "nationality",
    "flag",
    "keffiyeh",
    "olive tree",
    "key",
    "map",
    "partition",
    "resolution",
    "un",
    "unesco",
    "icj",
    "icc",
    "amnesty",
    "hrw",
    "btselem",
    "pchr",
    "al haq",
    "adalah",
    "badil",
    "passia",
    "miftah",
    "pngo",
    "pflp",
    "dflp",
    "jihad",
    "islamic",
    "christian",
    "muslim",
    "jew",
    "holy site",
    "temple mount",
    "haram al-sharif",
    "church of nativity",
    "ibrahimi mosque",
    "cave of patriarchs",
    "rachel's tomb",
    "joseph's tomb",
    "from the river to the sea",
    "free palestine",
    "save palestine",
];

/// Arabic terms
pub const ARABIC: &[&str] = &[
    "فلسطين",
    "غزة",
    "القدس",
    "الضفة",
    "النكبة",
    "الأقصى",
    "الانتفاضة",
    "إسرائيل",
    "الاحتلال",
];
