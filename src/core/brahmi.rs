//! 브라흐미 결합 코덱
//!
//! 자음 글리프는 내재 모음 "a"를 가지며, 뒤따르는 모음은 종속 모음 기호로 붙습니다.
//! 자음에 붙지 않은 모음은 독립 모음 글리프로 출력합니다.
//!
//! 토큰 분리는 매 위치에서 최장 일치(2글자 -> 1글자) 우선이며,
//! 같은 위치에서는 독립 모음 해석이 자음 해석보다 먼저 시도됩니다.

use crate::core::tables::BrahmiTable;

/// 최장 일치 시 시도할 발음 단위 길이 (긴 것부터)
const UNIT_LENGTHS: [usize; 2] = [2, 1];

/// 토큰 분리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrahmiToken {
    /// 독립 모음 글리프
    IndependentVowel(&'static str),
    /// 자음 + 종속 모음
    /// vowel_sign이 None이면 뒤에 모음이 없었음 (내재 모음 "a"로 읽힘)
    /// Some("")는 명시적인 "a"
    Syllable {
        consonant: &'static str,
        vowel_sign: Option<&'static str>,
    },
    /// 매핑 없는 글자 (숫자, 공백, 특수문자 등)
    Passthrough(char),
}

impl BrahmiToken {
    fn write_to(&self, out: &mut String) {
        match self {
            BrahmiToken::IndependentVowel(glyph) => out.push_str(glyph),
            BrahmiToken::Syllable {
                consonant,
                vowel_sign,
            } => {
                out.push_str(consonant);
                if let Some(sign) = vowel_sign {
                    out.push_str(sign);
                }
            }
            BrahmiToken::Passthrough(c) => out.push(*c),
        }
    }
}

/// 영문(발음 표기)을 브라흐미 토큰열로 분리
/// 입력 전체를 먼저 소문자로 변환
pub fn tokenize(text: &str, table: &BrahmiTable) -> Vec<BrahmiToken> {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut pos = 0;

    while pos < chars.len() {
        // 1. 독립 모음 (2글자 -> 1글자)
        if let Some((glyph, len)) = longest_match(&chars, pos, |unit| table.independent_vowel(unit)) {
            tokens.push(BrahmiToken::IndependentVowel(glyph));
            pos += len;
            continue;
        }

        // 2. 자음 + 뒤따르는 종속 모음
        let c = chars[pos];
        let mut buf = [0u8; 4];
        if let Some(consonant) = table.consonant(c.encode_utf8(&mut buf)) {
            let vowel = longest_match(&chars, pos + 1, |unit| table.dependent_vowel(unit));
            tokens.push(BrahmiToken::Syllable {
                consonant,
                vowel_sign: vowel.map(|(glyph, _)| glyph),
            });
            pos += 1 + vowel.map_or(0, |(_, len)| len);
            continue;
        }

        // 3. 매핑 없음
        tokens.push(BrahmiToken::Passthrough(c));
        pos += 1;
    }

    tokens
}

/// 영문 -> 브라흐미
pub fn encode_brahmi(text: &str, table: &BrahmiTable) -> String {
    let mut result = String::with_capacity(text.len() * 4);
    for token in tokenize(text, table) {
        token.write_to(&mut result);
    }
    result
}

/// 브라흐미 -> 영문 (근사 변환)
///
/// 자음과 독립 모음만 복원합니다. 종속 모음 기호는 복원하지 않고 그대로 남기며,
/// 내재 모음 "a"도 출력하지 않습니다.
pub fn decode_brahmi(text: &str, table: &BrahmiTable) -> String {
    let reverse = table.reverse();
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match reverse.get(&c) {
            Some(unit) => result.push_str(unit),
            None => result.push(c),
        }
    }
    result
}

/// start 위치에서 2글자, 1글자 순으로 발음 단위 조회
/// 반환: (글리프, 소비한 글자 수)
fn longest_match<F>(chars: &[char], start: usize, lookup: F) -> Option<(&'static str, usize)>
where
    F: Fn(&str) -> Option<&'static str>,
{
    UNIT_LENGTHS.into_iter().find_map(|len| {
        let window = chars.get(start..start + len)?;
        let unit: String = window.iter().collect();
        lookup(&unit).map(|glyph| (glyph, len))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KA: &str = "\u{11013}";
    const TA: &str = "\u{11022}";
    const NA: &str = "\u{11026}";
    const MA: &str = "\u{1102B}";
    const LA: &str = "\u{1102E}";
    const SIGN_AI: &str = "\u{1103F}";
    const SIGN_O: &str = "\u{11040}";
    const SIGN_I: &str = "\u{1103A}";
    const VOWEL_A: &str = "\u{11005}";
    const VOWEL_AU: &str = "\u{11012}";
    const VOWEL_I: &str = "\u{11007}";

    fn table() -> BrahmiTable {
        BrahmiTable::new()
    }

    #[test]
    fn test_inherent_vowel() {
        assert_eq!(encode_brahmi("k", &table()), KA);
        assert_eq!(encode_brahmi("ka", &table()), KA);
    }

    #[test]
    fn test_longest_dependent_vowel() {
        // "ai"는 종속 모음 하나로 소비 ("a" + "i"가 아님)
        assert_eq!(encode_brahmi("tai", &table()), format!("{TA}{SIGN_AI}"));
    }

    #[test]
    fn test_syllables() {
        assert_eq!(encode_brahmi("namo", &table()), format!("{NA}{MA}{SIGN_O}"));
        assert_eq!(encode_brahmi("kkI", &table()), format!("{KA}{KA}{SIGN_I}"));
    }

    #[test]
    fn test_independent_vowels() {
        assert_eq!(encode_brahmi("aum", &table()), format!("{VOWEL_AU}{MA}"));
        assert_eq!(encode_brahmi("ai", &table()), "\u{11010}");
        assert_eq!(encode_brahmi("i", &table()), VOWEL_I);
    }

    #[test]
    fn test_vowel_after_unmapped_is_independent() {
        // 'b'는 브라흐미 자음 테이블에 없음
        assert_eq!(encode_brahmi("bala", &table()), format!("b{VOWEL_A}{LA}"));
    }

    #[test]
    fn test_passthrough_and_empty() {
        assert_eq!(encode_brahmi("", &table()), "");
        assert_eq!(encode_brahmi("k1 !", &table()), format!("{KA}1 !"));
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Ka2", &table());
        assert_eq!(
            tokens,
            vec![
                BrahmiToken::Syllable {
                    consonant: KA,
                    vowel_sign: Some(""),
                },
                BrahmiToken::Passthrough('2'),
            ]
        );
        assert_eq!(
            tokenize("t", &table()),
            vec![BrahmiToken::Syllable {
                consonant: TA,
                vowel_sign: None,
            }]
        );
    }

    #[test]
    fn test_macron_vowels() {
        assert_eq!(encode_brahmi("kā", &table()), "\u{11013}\u{11038}");
        assert_eq!(encode_brahmi("ū", &table()), "\u{1100A}");
    }

    #[test]
    fn test_decode_is_lossy() {
        // 종속 모음 기호는 그대로 남고 내재 모음은 복원되지 않음
        assert_eq!(decode_brahmi(&format!("{NA}{MA}{SIGN_O}"), &table()), format!("nm{SIGN_O}"));
        assert_eq!(decode_brahmi(&format!("{VOWEL_AU}{MA}"), &table()), "aum");
        assert_eq!(decode_brahmi("", &table()), "");
        assert_eq!(decode_brahmi("x 9", &table()), "x 9");
    }
}
