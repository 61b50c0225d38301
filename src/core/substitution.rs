//! 1:1 문자 치환 코덱 (Tamil, Hebrew, Aramaic, Greek, Latin)
//!
//! 글자 단위로만 동작하며 두 글자 발음 단위("ai" 등)는 인식하지 않습니다.

use std::collections::HashMap;

/// 영문 -> 고대 문자
/// 각 글자를 소문자로 바꿔 조회하고, 매핑이 없으면 원래 글자(대소문자 유지)를 그대로 출력
pub fn encode_simple(text: &str, table: &HashMap<char, char>) -> String {
    text.chars()
        .map(|c| table.get(&lowercase_char(c)).copied().unwrap_or(c))
        .collect()
}

/// 고대 문자 -> 영문
/// 매핑이 없는 글자는 그대로 출력 (대소문자 변경 없음)
pub fn decode_simple(text: &str, reverse: &HashMap<char, char>) -> String {
    text.chars()
        .map(|c| reverse.get(&c).copied().unwrap_or(c))
        .collect()
}

/// 한 글자 소문자 변환
/// 소문자가 여러 글자로 늘어나는 경우(İ 등)는 원래 글자 유지
fn lowercase_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
