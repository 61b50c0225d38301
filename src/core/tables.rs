//! 발음 단위 -> 고대 문자 글리프 매핑 테이블
//!
//! 모든 테이블은 리터럴 데이터로부터 한 번만 생성되며 이후 변경되지 않습니다.
//! 역방향 테이블(글리프 -> 발음 단위)은 생성 시점에 정방향 테이블을 뒤집어 만듭니다.

use std::collections::HashMap;

// --- 브라흐미 (U+11000 블록) ---

/// 자음 (모두 내재 모음 "a"를 가짐)
#[rustfmt::skip]
pub const BRAHMI_CONSONANTS: [(&str, &str); 15] = [
    ("k", "\u{11013}"), // 𑀓 KA
    ("g", "\u{11015}"), // 𑀕 GA
    ("c", "\u{11018}"), // 𑀘 CA
    ("j", "\u{1101A}"), // 𑀚 JA
    ("t", "\u{11022}"), // 𑀢 TA
    ("d", "\u{11024}"), // 𑀤 DA
    ("n", "\u{11026}"), // 𑀦 NA
    ("p", "\u{11027}"), // 𑀧 PA
    ("m", "\u{1102B}"), // 𑀫 MA
    ("y", "\u{1102C}"), // 𑀬 YA
    ("r", "\u{1102D}"), // 𑀭 RA
    ("l", "\u{1102E}"), // 𑀮 LA
    ("v", "\u{1102F}"), // 𑀯 VA
    ("s", "\u{11032}"), // 𑀲 SA
    ("h", "\u{11033}"), // 𑀳 HA
];

/// 독립 모음 (어두 등 자음에 붙지 않는 모음)
#[rustfmt::skip]
pub const BRAHMI_INDEPENDENT_VOWELS: [(&str, &str); 10] = [
    ("a", "\u{11005}"),  // 𑀅
    ("ā", "\u{11006}"),  // 𑀆
    ("i", "\u{11007}"),  // 𑀇
    ("ī", "\u{11008}"),  // 𑀈
    ("u", "\u{11009}"),  // 𑀉
    ("ū", "\u{1100A}"),  // 𑀊
    ("e", "\u{1100F}"),  // 𑀏
    ("ai", "\u{11010}"), // 𑀐
    ("o", "\u{11011}"),  // 𑀑
    ("au", "\u{11012}"), // 𑀒
];

/// 종속 모음 기호 (자음 뒤에 붙어 내재 모음을 대체)
/// "a"는 내재 모음이므로 빈 문자열
#[rustfmt::skip]
pub const BRAHMI_DEPENDENT_VOWELS: [(&str, &str); 10] = [
    ("a", ""),
    ("ā", "\u{11038}"),
    ("i", "\u{1103A}"),
    ("ī", "\u{1103B}"),
    ("u", "\u{1103C}"),
    ("ū", "\u{1103D}"),
    ("e", "\u{1103E}"),
    ("ai", "\u{1103F}"),
    ("o", "\u{11040}"),
    ("au", "\u{11041}"),
];

// --- 단순 치환 문자 체계 ---

#[rustfmt::skip]
pub const TAMIL: [(char, char); 17] = [
    ('a', 'அ'), ('i', 'இ'), ('u', 'உ'), ('e', 'எ'), ('o', 'ஒ'),
    ('k', 'க'), ('c', 'ச'), ('t', 'த'), ('n', 'ந'), ('p', 'ப'), ('m', 'ம'),
    ('y', 'ய'), ('r', 'ர'), ('l', 'ல'), ('v', 'வ'), ('s', 'ஸ'), ('h', 'ஹ'),
];

#[rustfmt::skip]
pub const HEBREW: [(char, char); 14] = [
    ('a', '\u{05D0}'), // א alef
    ('b', '\u{05D1}'), // ב bet
    ('g', '\u{05D2}'), // ג gimel
    ('d', '\u{05D3}'), // ד dalet
    ('h', '\u{05D4}'), // ה he
    ('k', '\u{05DB}'), // כ kaf
    ('l', '\u{05DC}'), // ל lamed
    ('m', '\u{05DE}'), // מ mem
    ('n', '\u{05E0}'), // נ nun
    ('r', '\u{05E8}'), // ר resh
    ('s', '\u{05E9}'), // ש shin
    ('t', '\u{05EA}'), // ת tav
    ('y', '\u{05D9}'), // י yod
    ('v', '\u{05D5}'), // ו vav
];

/// 제국 아람 문자 (U+10840 블록)
#[rustfmt::skip]
pub const ARAMAIC: [(char, char); 12] = [
    ('a', '\u{10840}'), // alaph
    ('b', '\u{10841}'), // beth
    ('g', '\u{10842}'), // gamal
    ('d', '\u{10843}'), // dalath
    ('h', '\u{10844}'), // he
    ('k', '\u{1084A}'), // kaph
    ('l', '\u{1084B}'), // lamadh
    ('m', '\u{1084C}'), // mem
    ('n', '\u{1084D}'), // nun
    ('r', '\u{10853}'), // resh
    ('s', '\u{10854}'), // shin
    ('t', '\u{10855}'), // taw
];

/// 그리스 대문자
#[rustfmt::skip]
pub const GREEK: [(char, char); 17] = [
    ('a', 'Α'), ('b', 'Β'), ('g', 'Γ'), ('d', 'Δ'), ('e', 'Ε'), ('z', 'Ζ'),
    ('i', 'Ι'), ('k', 'Κ'), ('l', 'Λ'), ('m', 'Μ'), ('n', 'Ν'), ('o', 'Ο'),
    ('p', 'Π'), ('r', 'Ρ'), ('s', 'Σ'), ('t', 'Τ'), ('u', 'Υ'),
];

/// 정방향/역방향 1:1 치환 테이블
///
/// 정방향 키는 발음 단위 한 글자, 값은 글리프 한 글자.
/// 역방향은 입력 순서대로 삽입하므로 같은 글리프가 두 번 나오면 나중 항목이 남음
/// (현재 테이블에는 충돌 없음).
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl SubstitutionTable {
    /// (발음 단위, 글리프) 쌍으로 테이블 생성
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        for (unit, glyph) in pairs {
            forward.insert(unit, glyph);
            reverse.insert(glyph, unit);
        }
        Self { forward, reverse }
    }

    /// 라틴 대문자 테이블 (a-z -> A-Z)
    pub fn latin_capitals() -> Self {
        Self::from_pairs(('a'..='z').map(|c| (c, c.to_ascii_uppercase())))
    }

    /// 발음 단위 -> 글리프
    pub fn forward(&self) -> &HashMap<char, char> {
        &self.forward
    }

    /// 글리프 -> 발음 단위
    pub fn reverse(&self) -> &HashMap<char, char> {
        &self.reverse
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// 브라흐미 테이블: 자음 / 독립 모음 / 종속 모음
#[derive(Debug, Clone)]
pub struct BrahmiTable {
    consonants: HashMap<&'static str, &'static str>,
    independent_vowels: HashMap<&'static str, &'static str>,
    dependent_vowels: HashMap<&'static str, &'static str>,
    /// 자음 ∪ 독립 모음의 역방향 매핑 (종속 모음은 포함하지 않음)
    reverse: HashMap<char, &'static str>,
}

impl BrahmiTable {
    pub fn new() -> Self {
        let consonants: HashMap<_, _> = BRAHMI_CONSONANTS.into_iter().collect();
        let independent_vowels: HashMap<_, _> = BRAHMI_INDEPENDENT_VOWELS.into_iter().collect();
        let dependent_vowels: HashMap<_, _> = BRAHMI_DEPENDENT_VOWELS.into_iter().collect();

        // 자음 먼저, 독립 모음 나중에 삽입 -> 충돌 시 독립 모음이 남음
        let mut reverse = HashMap::new();
        for (unit, glyph) in BRAHMI_CONSONANTS
            .into_iter()
            .chain(BRAHMI_INDEPENDENT_VOWELS)
        {
            if let Some(c) = single_char(glyph) {
                reverse.insert(c, unit);
            }
        }

        Self {
            consonants,
            independent_vowels,
            dependent_vowels,
            reverse,
        }
    }

    pub fn consonant(&self, unit: &str) -> Option<&'static str> {
        self.consonants.get(unit).copied()
    }

    pub fn independent_vowel(&self, unit: &str) -> Option<&'static str> {
        self.independent_vowels.get(unit).copied()
    }

    /// 종속 모음 기호 조회 ("a"는 Some(""))
    pub fn dependent_vowel(&self, unit: &str) -> Option<&'static str> {
        self.dependent_vowels.get(unit).copied()
    }

    /// 글리프 -> 발음 단위 (자음, 독립 모음만)
    pub fn reverse(&self) -> &HashMap<char, &'static str> {
        &self.reverse
    }
}

impl Default for BrahmiTable {
    fn default() -> Self {
        Self::new()
    }
}

/// 정확히 한 글자로 된 문자열이면 그 글자 반환
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
