//! 지원 문자 체계 및 변환 방향 정의

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 지원하는 고대 문자 체계
///
/// 선언 순서가 곧 출력 순서 (Brahmi → Latin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// 브라흐미 (아부기다, 자음+모음 결합 규칙 적용)
    Brahmi,
    Tamil,
    Hebrew,
    /// 제국 아람 문자 (U+10840 블록)
    Aramaic,
    /// 그리스 대문자
    Greek,
    /// 고대 로마식 대문자
    Latin,
}

impl Script {
    /// 전체 문자 체계 (출력 순서)
    pub const ALL: [Script; 6] = [
        Script::Brahmi,
        Script::Tamil,
        Script::Hebrew,
        Script::Aramaic,
        Script::Greek,
        Script::Latin,
    ];

    /// 표시용 이름
    pub fn name(&self) -> &'static str {
        match self {
            Script::Brahmi => "Brahmi",
            Script::Tamil => "Tamil",
            Script::Hebrew => "Hebrew",
            Script::Aramaic => "Aramaic",
            Script::Greek => "Greek",
            Script::Latin => "Latin",
        }
    }

    /// 단순 치환(1:1) 코덱을 쓰는 문자 체계인지 확인
    pub fn is_simple(&self) -> bool {
        !matches!(self, Script::Brahmi)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = String;

    /// 대소문자 구분 없이 파싱 ("brahmi", "Greek", "LATIN" 모두 허용)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::ALL
            .into_iter()
            .find(|script| script.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("지원하지 않는 문자 체계: {}", s))
    }
}

/// 변환 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// 영문(발음 표기) → 고대 문자
    #[default]
    ToAncient,
    /// 고대 문자 → 영문(발음 표기)
    ToEnglish,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "to-ancient" | "ancient" => Ok(Direction::ToAncient),
            "to-english" | "english" => Ok(Direction::ToEnglish),
            _ => Err(format!("알 수 없는 변환 방향: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let names: Vec<&str> = Script::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            ["Brahmi", "Tamil", "Hebrew", "Aramaic", "Greek", "Latin"]
        );
        assert!(Script::Brahmi < Script::Latin);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("brahmi".parse::<Script>(), Ok(Script::Brahmi));
        assert_eq!("GREEK".parse::<Script>(), Ok(Script::Greek));
        assert_eq!(" Tamil ".parse::<Script>(), Ok(Script::Tamil));
        assert!("kharosthi".parse::<Script>().is_err());
    }

    #[test]
    fn test_is_simple() {
        assert!(!Script::Brahmi.is_simple());
        assert!(Script::Hebrew.is_simple());
        assert!(Script::Latin.is_simple());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Script::Aramaic).unwrap(), "\"aramaic\"");
        let parsed: Direction = serde_json::from_str("\"to-english\"").unwrap();
        assert_eq!(parsed, Direction::ToEnglish);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("to-ancient".parse::<Direction>(), Ok(Direction::ToAncient));
        assert_eq!("English".parse::<Direction>(), Ok(Direction::ToEnglish));
        assert!("sideways".parse::<Direction>().is_err());
    }
}
